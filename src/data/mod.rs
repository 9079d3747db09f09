//! Data access layer repositories.
//!
//! One repository per synced table. Every write is an insert keyed by the PandaScore ID
//! that leaves an existing row untouched, so replaying a page or re-resolving a parent is a
//! no-op.

pub mod existence;
pub mod game;
pub mod league;
pub mod matches;
pub mod series;
pub mod team;
pub mod tournament;

use sea_orm::ConnectionTrait;

use crate::{
    data::{
        game::GameRepository, league::LeagueRepository, matches::MatchRepository,
        series::SeriesRepository, team::TeamRepository, tournament::TournamentRepository,
    },
    error::Error,
    model::row::EntityRow,
};

/// Persists a row of any kind with insert-or-ignore semantics.
///
/// # Returns
/// - `Ok(true)` - The row was inserted
/// - `Ok(false)` - A row with the same ID already existed and was left as is
/// - `Err(Error::IdOutOfRange)` - An integer column does not fit the store, nothing written
/// - `Err(Error::DbErr)` - The insert failed, e.g. on a foreign key violation
pub async fn upsert_row<C: ConnectionTrait>(db: &C, row: &EntityRow) -> Result<bool, Error> {
    match row {
        EntityRow::Game(row) => GameRepository::new(db).upsert(row).await,
        EntityRow::League(row) => LeagueRepository::new(db).upsert(row).await,
        EntityRow::Series(row) => SeriesRepository::new(db).upsert(row).await,
        EntityRow::Tournament(row) => TournamentRepository::new(db).upsert(row).await,
        EntityRow::Match(row) => MatchRepository::new(db).upsert(row).await,
        EntityRow::Team(row) => TeamRepository::new(db).upsert(row).await,
    }
}
