//! Declarative test builder.
//!
//! All configuration is queued on the builder and applied in one pass by `build()`: tables
//! first, then stored rows, then mock PandaScore endpoints.

use sea_orm::Schema;
use serde_json::Value;

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    include_sync_tables: bool,

    // Database fixtures to insert
    games: Vec<i64>,
    leagues: Vec<(i64, i64)>,      // (league_id, game_id)
    series: Vec<(i64, i64)>,       // (series_id, league_id)
    tournaments: Vec<(i64, i64)>,  // (tournament_id, series_id)
    teams: Vec<i64>,

    // Mock endpoints to create
    entity_endpoints: Vec<(String, i64, Value, usize)>, // (path, id, body, expected_requests)
    page_endpoints: Vec<(String, usize, Vec<Value>, usize)>, // (path, page, items, expected_requests)
    list_endpoints: Vec<(String, Vec<Value>, usize)>,
    error_endpoints: Vec<(String, Option<usize>, usize, usize)>, // (path, page, status, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with nothing configured.
    pub fn new() -> Self {
        Self {
            include_sync_tables: false,
            games: Vec::new(),
            leagues: Vec::new(),
            series: Vec::new(),
            tournaments: Vec::new(),
            teams: Vec::new(),
            entity_endpoints: Vec::new(),
            page_endpoints: Vec::new(),
            list_endpoints: Vec::new(),
            error_endpoints: Vec::new(),
        }
    }

    /// Add all six synced tables, with their foreign keys, to the test database.
    pub fn with_sync_tables(mut self) -> Self {
        self.include_sync_tables = true;
        self
    }

    /// Insert a game row.
    pub fn with_game(mut self, game_id: i64) -> Self {
        self.games.push(game_id);
        self
    }

    /// Insert a league row, creating its game if missing.
    pub fn with_league(mut self, league_id: i64, game_id: i64) -> Self {
        self.leagues.push((league_id, game_id));
        self
    }

    /// Insert a series row, creating its league and game if missing.
    pub fn with_series(mut self, series_id: i64, league_id: i64) -> Self {
        self.series.push((series_id, league_id));
        self
    }

    /// Insert a tournament row, creating its series, league and game if missing.
    pub fn with_tournament(mut self, tournament_id: i64, series_id: i64) -> Self {
        self.tournaments.push((tournament_id, series_id));
        self
    }

    /// Insert a team row.
    pub fn with_team(mut self, team_id: i64) -> Self {
        self.teams.push(team_id);
        self
    }

    /// Add a mock endpoint at `/{path}/{id}` returning `body`.
    ///
    /// # Arguments
    /// - `path` - Collection path such as `videogames`
    /// - `id` - Entity ID
    /// - `body` - Payload to return, usually from [`factory`](crate::fixtures::factory)
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_entity_endpoint(
        mut self,
        path: &str,
        id: i64,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.entity_endpoints
            .push((path.to_string(), id, body, expected_requests));
        self
    }

    /// Add a mock endpoint at `/{path}` answering only `page=<page>`.
    pub fn with_page_endpoint(
        mut self,
        path: &str,
        page: usize,
        items: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.page_endpoints
            .push((path.to_string(), page, items, expected_requests));
        self
    }

    /// Add a mock endpoint at `/{path}` answering any query.
    pub fn with_list_endpoint(
        mut self,
        path: &str,
        items: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.list_endpoints
            .push((path.to_string(), items, expected_requests));
        self
    }

    /// Add a mock endpoint at `path` failing with `status`, optionally for one page only.
    pub fn with_error_endpoint(
        mut self,
        path: &str,
        page: Option<usize>,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.error_endpoints
            .push((path.to_string(), page, status, expected_requests));
        self
    }

    /// Build the test setup.
    ///
    /// Executes all queued operations in order:
    /// 1. Creates the sync tables if requested
    /// 2. Inserts database fixtures, parents before children
    /// 3. Creates mock HTTP endpoints, error endpoints first
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Fully configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_sync_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Game),
                schema.create_table_from_entity(entity::prelude::League),
                schema.create_table_from_entity(entity::prelude::Series),
                schema.create_table_from_entity(entity::prelude::Tournament),
                schema.create_table_from_entity(entity::prelude::Match),
                schema.create_table_from_entity(entity::prelude::Team),
            ]);
        }

        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for game_id in self.games {
            setup.panda().insert_game(game_id).await?;
        }

        for (league_id, game_id) in self.leagues {
            setup.panda().insert_league(league_id, game_id).await?;
        }

        for (series_id, league_id) in self.series {
            setup.panda().insert_series(series_id, league_id).await?;
        }

        for (tournament_id, series_id) in self.tournaments {
            setup
                .panda()
                .insert_tournament(tournament_id, series_id)
                .await?;
        }

        for team_id in self.teams {
            setup.panda().insert_team(team_id).await?;
        }

        // 3. Create mock endpoints
        let mut mocks = Vec::new();

        for (path, page, status, expected) in self.error_endpoints {
            mocks.push(
                setup
                    .panda()
                    .create_error_endpoint(&path, page, status, expected),
            );
        }

        for (path, id, body, expected) in self.entity_endpoints {
            mocks.push(
                setup
                    .panda()
                    .create_entity_endpoint(&path, id, body, expected),
            );
        }

        for (path, page, items, expected) in self.page_endpoints {
            mocks.push(
                setup
                    .panda()
                    .create_page_endpoint(&path, page, items, expected),
            );
        }

        for (path, items, expected) in self.list_endpoints {
            mocks.push(setup.panda().create_list_endpoint(&path, items, expected));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
