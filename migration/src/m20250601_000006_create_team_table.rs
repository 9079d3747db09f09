use sea_orm_migration::{prelude::*, schema::*};

static IDX_TEAMS_GAME_ID: &str = "idx_teams_game_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(integer(Team::Id).primary_key())
                    .col(integer(Team::GameId))
                    .col(string(Team::Name))
                    .col(string_null(Team::Acronym))
                    .col(string_null(Team::Slug))
                    .col(string_null(Team::ImageLink))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAMS_GAME_ID)
                    .table(Team::Table)
                    .col(Team::GameId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAMS_GAME_ID)
                    .table(Team::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Team {
    #[sea_orm(iden = "teams")]
    Table,
    Id,
    GameId,
    Name,
    Acronym,
    Slug,
    ImageLink,
}
