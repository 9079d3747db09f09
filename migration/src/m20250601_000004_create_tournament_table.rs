use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000003_create_series_table::Series;

static IDX_TOURNAMENTS_SERIES_ID: &str = "idx_tournaments_series_id";
static FK_TOURNAMENTS_SERIES_ID: &str = "fk_tournaments_series_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tournament::Table)
                    .if_not_exists()
                    .col(integer(Tournament::Id).primary_key())
                    .col(string_null(Tournament::Slug))
                    .col(integer(Tournament::GameId))
                    .col(integer(Tournament::SeriesId))
                    .col(integer(Tournament::LeagueId))
                    .col(integer(Tournament::Tier))
                    .col(string(Tournament::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TOURNAMENTS_SERIES_ID)
                            .from(Tournament::Table, Tournament::SeriesId)
                            .to(Series::Table, Series::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TOURNAMENTS_SERIES_ID)
                    .table(Tournament::Table)
                    .col(Tournament::SeriesId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TOURNAMENTS_SERIES_ID)
                    .table(Tournament::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Tournament::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Tournament {
    #[sea_orm(iden = "tournaments")]
    Table,
    Id,
    Slug,
    GameId,
    SeriesId,
    LeagueId,
    Tier,
    Name,
}
