//! Row insertion helpers.
//!
//! Each helper is idempotent and creates the parent rows its foreign keys need, so a test
//! can ask for a tournament without spelling out the game, league and series above it.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_GAME_ID, error::TestError, fixtures::PandaFixtures};

impl<'a> PandaFixtures<'a> {
    /// Insert a game row.
    ///
    /// # Arguments
    /// - `game_id` - PandaScore videogame ID
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - The created or existing game
    /// - `Err(TestError::DbErr)` - Database query or insert failed
    pub async fn insert_game(&self, game_id: i64) -> Result<entity::game::Model, TestError> {
        if let Some(existing) = entity::prelude::Game::find_by_id(game_id as i32)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(entity::prelude::Game::insert(entity::game::ActiveModel {
            id: ActiveValue::Set(game_id as i32),
            slug: ActiveValue::Set(Some(format!("game-{game_id}"))),
            name: ActiveValue::Set(format!("Game {game_id}")),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a league row, creating its game if missing.
    pub async fn insert_league(
        &self,
        league_id: i64,
        game_id: i64,
    ) -> Result<entity::league::Model, TestError> {
        if let Some(existing) = entity::prelude::League::find_by_id(league_id as i32)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        self.insert_game(game_id).await?;

        Ok(entity::prelude::League::insert(entity::league::ActiveModel {
            id: ActiveValue::Set(league_id as i32),
            slug: ActiveValue::Set(Some(format!("league-{league_id}"))),
            game_id: ActiveValue::Set(game_id as i32),
            name: ActiveValue::Set(format!("League {league_id}")),
            image_link: ActiveValue::Set(None),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a series row, creating its league under [`TEST_GAME_ID`] if missing.
    pub async fn insert_series(
        &self,
        series_id: i64,
        league_id: i64,
    ) -> Result<entity::series::Model, TestError> {
        if let Some(existing) = entity::prelude::Series::find_by_id(series_id as i32)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        let league = self.insert_league(league_id, TEST_GAME_ID).await?;

        Ok(entity::prelude::Series::insert(entity::series::ActiveModel {
            id: ActiveValue::Set(series_id as i32),
            slug: ActiveValue::Set(Some(format!("series-{series_id}"))),
            game_id: ActiveValue::Set(league.game_id),
            league_id: ActiveValue::Set(league.id),
            name: ActiveValue::Set(format!("Spring {series_id}")),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a tournament row, creating its series if missing.
    ///
    /// A missing series is created under a league with the same ID as the series.
    pub async fn insert_tournament(
        &self,
        tournament_id: i64,
        series_id: i64,
    ) -> Result<entity::tournament::Model, TestError> {
        if let Some(existing) = entity::prelude::Tournament::find_by_id(tournament_id as i32)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        let series = self.insert_series(series_id, series_id).await?;

        Ok(
            entity::prelude::Tournament::insert(entity::tournament::ActiveModel {
                id: ActiveValue::Set(tournament_id as i32),
                slug: ActiveValue::Set(Some(format!("tournament-{tournament_id}"))),
                game_id: ActiveValue::Set(series.game_id),
                series_id: ActiveValue::Set(series.id),
                league_id: ActiveValue::Set(series.league_id),
                tier: ActiveValue::Set(2),
                name: ActiveValue::Set(format!("Tournament {tournament_id}")),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a team row.
    pub async fn insert_team(&self, team_id: i64) -> Result<entity::team::Model, TestError> {
        if let Some(existing) = entity::prelude::Team::find_by_id(team_id as i32)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(entity::prelude::Team::insert(entity::team::ActiveModel {
            id: ActiveValue::Set(team_id as i32),
            game_id: ActiveValue::Set(TEST_GAME_ID as i32),
            name: ActiveValue::Set(format!("Team {team_id}")),
            acronym: ActiveValue::Set(Some(format!("T{team_id}"))),
            slug: ActiveValue::Set(Some(format!("team-{team_id}"))),
            image_link: ActiveValue::Set(None),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
