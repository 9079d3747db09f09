use sea_orm::ConnectionTrait;

use crate::{
    data::{
        game::GameRepository, league::LeagueRepository, matches::MatchRepository,
        series::SeriesRepository, team::TeamRepository, tournament::TournamentRepository,
    },
    error::Error,
    model::entity::EntityKind,
};

/// Answers whether a row of a given kind is already stored.
///
/// Holds only a borrowed connection and can be shared across concurrent callers.
pub struct ExistenceOracle<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExistenceOracle<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Looks up a single row by primary key.
    ///
    /// # Arguments
    /// - `kind` - Table to look in
    /// - `id` - PandaScore ID of the row
    ///
    /// # Returns
    /// - `Ok(true)` - The row exists
    /// - `Ok(false)` - The row does not exist
    /// - `Err(Error::IdOutOfRange)` - `id` cannot be stored, no query issued
    /// - `Err(Error::DbErr)` - The lookup itself failed
    pub async fn exists(&self, kind: EntityKind, id: i64) -> Result<bool, Error> {
        let found = match kind {
            EntityKind::Game => GameRepository::new(self.db).get(id).await?.is_some(),
            EntityKind::League => LeagueRepository::new(self.db).get(id).await?.is_some(),
            EntityKind::Series => SeriesRepository::new(self.db).get(id).await?.is_some(),
            EntityKind::Tournament => TournamentRepository::new(self.db)
                .get(id)
                .await?
                .is_some(),
            EntityKind::Match => MatchRepository::new(self.db).get(id).await?.is_some(),
            EntityKind::Team => TeamRepository::new(self.db).get(id).await?.is_some(),
        };

        Ok(found)
    }
}
