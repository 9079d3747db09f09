use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000001_create_game_table::Game;

static IDX_LEAGUES_GAME_ID: &str = "idx_leagues_game_id";
static FK_LEAGUES_GAME_ID: &str = "fk_leagues_game_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(League::Table)
                    .if_not_exists()
                    .col(integer(League::Id).primary_key())
                    .col(string_null(League::Slug))
                    .col(integer(League::GameId))
                    .col(string(League::Name))
                    .col(string_null(League::ImageLink))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LEAGUES_GAME_ID)
                            .from(League::Table, League::GameId)
                            .to(Game::Table, Game::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LEAGUES_GAME_ID)
                    .table(League::Table)
                    .col(League::GameId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LEAGUES_GAME_ID)
                    .table(League::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(League::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum League {
    #[sea_orm(iden = "leagues")]
    Table,
    Id,
    Slug,
    GameId,
    Name,
    ImageLink,
}
