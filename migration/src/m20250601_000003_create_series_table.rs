use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000002_create_league_table::League;

static IDX_SERIES_LEAGUE_ID: &str = "idx_series_league_id";
static FK_SERIES_LEAGUE_ID: &str = "fk_series_league_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Series::Table)
                    .if_not_exists()
                    .col(integer(Series::Id).primary_key())
                    .col(string_null(Series::Slug))
                    .col(integer(Series::GameId))
                    .col(integer(Series::LeagueId))
                    .col(string(Series::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SERIES_LEAGUE_ID)
                            .from(Series::Table, Series::LeagueId)
                            .to(League::Table, League::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SERIES_LEAGUE_ID)
                    .table(Series::Table)
                    .col(Series::LeagueId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SERIES_LEAGUE_ID)
                    .table(Series::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Series::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Series {
    #[sea_orm(iden = "series")]
    Table,
    Id,
    Slug,
    GameId,
    LeagueId,
    Name,
}
