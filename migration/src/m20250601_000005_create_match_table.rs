use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000004_create_tournament_table::Tournament;

static IDX_MATCHES_TOURNAMENT_ID: &str = "idx_matches_tournament_id";
static IDX_MATCHES_EXPECTED_START_TIME: &str = "idx_matches_expected_start_time";
static FK_MATCHES_TOURNAMENT_ID: &str = "fk_matches_tournament_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Match::Table)
                    .if_not_exists()
                    .col(integer(Match::Id).primary_key())
                    .col(string_null(Match::Slug))
                    .col(string(Match::Name))
                    .col(boolean(Match::Finished))
                    .col(integer(Match::GameId))
                    .col(integer(Match::LeagueId))
                    .col(integer(Match::SeriesId))
                    .col(integer(Match::TournamentId))
                    .col(integer(Match::Team1Id).default(0))
                    .col(integer(Match::Team1Score).default(0))
                    .col(integer(Match::Team2Id).default(0))
                    .col(integer(Match::Team2Score).default(0))
                    .col(timestamp_null(Match::ExpectedStartTime))
                    .col(integer(Match::AmountOfGames))
                    .col(double(Match::ActualGameTime).default(0.0))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MATCHES_TOURNAMENT_ID)
                            .from(Match::Table, Match::TournamentId)
                            .to(Tournament::Table, Tournament::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCHES_TOURNAMENT_ID)
                    .table(Match::Table)
                    .col(Match::TournamentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCHES_EXPECTED_START_TIME)
                    .table(Match::Table)
                    .col(Match::ExpectedStartTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MATCHES_EXPECTED_START_TIME)
                    .table(Match::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MATCHES_TOURNAMENT_ID)
                    .table(Match::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Match::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Match {
    #[sea_orm(iden = "matches")]
    Table,
    Id,
    Slug,
    Name,
    Finished,
    GameId,
    LeagueId,
    SeriesId,
    TournamentId,
    Team1Id,
    Team1Score,
    Team2Id,
    Team2Score,
    ExpectedStartTime,
    AmountOfGames,
    ActualGameTime,
}
