//! Per-kind list syncs and the full backfill sequence.

use sea_orm::DatabaseConnection;
use tracing::{debug, info, warn};

use crate::{
    config::SyncConfig,
    data::upsert_row,
    error::Error,
    model::entity::EntityKind,
    pandascore::{client::SORT_BY_MODIFIED, PandaClient},
    service::{
        dependency::DependencyResolver,
        matches::{is_cancelled, MatchSyncReport, MatchSyncService},
    },
};

/// Pages read per kind by a backfill run.
pub const LEAGUE_BACKFILL_PAGES: usize = 15;
pub const SERIES_BACKFILL_PAGES: usize = 20;
pub const TOURNAMENT_BACKFILL_PAGES: usize = 10;
pub const TEAM_BACKFILL_PAGES: usize = 20;

/// How far back a list sync reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Only the most recently modified page.
    Incremental,
    /// Every page up to the kind's backfill limit, stopping at the first empty page.
    Backfill,
}

impl SyncMode {
    fn pages(self, backfill_pages: usize) -> usize {
        match self {
            SyncMode::Incremental => 1,
            SyncMode::Backfill => backfill_pages,
        }
    }
}

/// Counts of a full backfill run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackfillReport {
    pub games: usize,
    pub leagues: usize,
    pub series: usize,
    pub teams: usize,
    pub tournaments: usize,
    pub matches: MatchSyncReport,
}

impl BackfillReport {
    /// Rows newly written by the list syncs plus matches stored by the match sync.
    pub fn total(&self) -> usize {
        self.games
            + self.leagues
            + self.series
            + self.teams
            + self.tournaments
            + self.matches.matches_persisted
    }
}

pub struct SyncService<'a> {
    db: &'a DatabaseConnection,
    panda_client: &'a PandaClient,
    config: SyncConfig,
}

impl<'a> SyncService<'a> {
    /// Creates a new instance of [`SyncService`]
    pub fn new(
        db: &'a DatabaseConnection,
        panda_client: &'a PandaClient,
        config: SyncConfig,
    ) -> Self {
        Self {
            db,
            panda_client,
            config,
        }
    }

    /// Fetches every videogame and stores the ones not yet stored
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of games inserted
    /// - `Err(Error)` - The request or a game's insert failed
    pub async fn update_games(&self) -> Result<usize, Error> {
        let games = self.panda_client.fetch_page(EntityKind::Game, &[]).await?;
        let mut inserted = 0;

        for game in &games {
            debug!(id = game.id(), name = game.name(), "Writing game");

            if upsert_row(self.db, &game.to_row()).await? {
                inserted += 1;
            }
        }

        info!(fetched = games.len(), inserted, "Updated games");

        Ok(inserted)
    }

    pub async fn sync_leagues(&self, mode: SyncMode) -> Result<usize, Error> {
        self.sync_kind(EntityKind::League, mode.pages(LEAGUE_BACKFILL_PAGES))
            .await
    }

    pub async fn sync_series(&self, mode: SyncMode) -> Result<usize, Error> {
        self.sync_kind(EntityKind::Series, mode.pages(SERIES_BACKFILL_PAGES))
            .await
    }

    pub async fn sync_tournaments(&self, mode: SyncMode) -> Result<usize, Error> {
        self.sync_kind(
            EntityKind::Tournament,
            mode.pages(TOURNAMENT_BACKFILL_PAGES),
        )
        .await
    }

    pub async fn sync_teams(&self, mode: SyncMode) -> Result<usize, Error> {
        self.sync_kind(EntityKind::Team, mode.pages(TEAM_BACKFILL_PAGES))
            .await
    }

    /// Runs every sync in dependency order: games, leagues, series, teams, tournaments, matches
    ///
    /// The match sync reads `BACKFILL_MATCH_PAGES` pages in backfill mode and `MATCH_PAGES`
    /// otherwise. The first failing step ends the run.
    pub async fn full_backfill(&self, mode: SyncMode) -> Result<BackfillReport, Error> {
        info!(?mode, "Starting full sync");

        let match_pages = match mode {
            SyncMode::Incremental => self.config.match_pages,
            SyncMode::Backfill => self.config.backfill_match_pages,
        };

        let report = BackfillReport {
            games: self.update_games().await?,
            leagues: self.sync_leagues(mode).await?,
            series: self.sync_series(mode).await?,
            teams: self.sync_teams(mode).await?,
            tournaments: self.sync_tournaments(mode).await?,
            matches: MatchSyncService::new(self.db, self.panda_client)
                .sync_matches(match_pages)
                .await?,
        };

        info!(
            ?mode,
            games = report.games,
            leagues = report.leagues,
            series = report.series,
            teams = report.teams,
            tournaments = report.tournaments,
            matches = report.matches.matches_persisted,
            requests = self.panda_client.request_count(),
            "Full sync complete"
        );

        Ok(report)
    }

    /// Reads up to `pages` pages of one kind, most recently modified first
    ///
    /// An entity whose parent chain cannot be resolved is logged and skipped. A page that
    /// cannot be fetched, an entity that cannot be stored, or cancellation ends the sync
    /// with that error.
    async fn sync_kind(&self, kind: EntityKind, pages: usize) -> Result<usize, Error> {
        let resolver = DependencyResolver::new(self.db, self.panda_client);
        let mut inserted = 0;
        let mut skipped = 0;

        for page in 1..=pages {
            let params = [
                ("sort", SORT_BY_MODIFIED.to_string()),
                ("page", page.to_string()),
            ];
            let entities = self.panda_client.fetch_page(kind, &params).await?;

            if entities.is_empty() {
                debug!(%kind, page, "Reached empty page");
                break;
            }

            for entity in &entities {
                let row = entity.to_row();
                row.check_range()?;

                if let Err(e) = resolver.ensure_dependency(entity).await {
                    if is_cancelled(&e) {
                        return Err(e);
                    }

                    warn!(
                        %kind,
                        id = entity.id(),
                        error = %e,
                        "Skipping entity with unresolved parent"
                    );
                    skipped += 1;
                    continue;
                }

                debug!(%kind, id = entity.id(), name = entity.name(), "Writing entity");

                if upsert_row(self.db, &row).await? {
                    inserted += 1;
                }
            }
        }

        info!(%kind, pages, inserted, skipped, "Synced kind");

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::EntityTrait;
    use stalka_test_utils::prelude::*;

    use super::*;
    use crate::error::panda::PandaError;

    fn client(test: &TestSetup) -> PandaClient {
        PandaClient::new(test.panda_url(), TEST_PANDASCORE_TOKEN).unwrap()
    }

    mod update_games_tests {
        use super::*;

        /// Expect every listed game to be stored
        #[tokio::test]
        async fn test_update_games() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_sync_tables()
                .with_game(1)
                .with_list_endpoint(
                    "videogames",
                    vec![factory::game(1), factory::game(3), factory::game(26)],
                    1,
                )
                .build()
                .await?;
            let panda_client = client(&test);
            let service = SyncService::new(&test.db, &panda_client, SyncConfig::default());

            let inserted = service.update_games().await.unwrap();

            assert_eq!(inserted, 2);
            assert_eq!(entity::prelude::Game::find().all(&test.db).await?.len(), 3);
            test.assert_mocks();

            Ok(())
        }
    }

    mod sync_kind_tests {
        use super::*;

        /// Expect backfill to stop at the first empty page
        #[tokio::test]
        async fn test_backfill_stops_on_empty_page() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_sync_tables()
                .with_game(1)
                .with_page_endpoint(
                    "leagues",
                    1,
                    vec![factory::league(100, 1), factory::league(101, 1)],
                    1,
                )
                .with_page_endpoint("leagues", 2, vec![factory::league(102, 1)], 1)
                .with_page_endpoint("leagues", 3, vec![], 1)
                .with_page_endpoint("leagues", 4, vec![factory::league(103, 1)], 0)
                .build()
                .await?;
            let panda_client = client(&test);
            let service = SyncService::new(&test.db, &panda_client, SyncConfig::default());

            let inserted = service.sync_leagues(SyncMode::Backfill).await.unwrap();

            assert_eq!(inserted, 3);
            test.assert_mocks();

            Ok(())
        }

        /// Expect incremental mode to read only the first page
        #[tokio::test]
        async fn test_incremental_reads_first_page() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_sync_tables()
                .with_page_endpoint("teams", 1, vec![factory::team(10, 1)], 1)
                .with_page_endpoint("teams", 2, vec![factory::team(11, 1)], 0)
                .build()
                .await?;
            let panda_client = client(&test);
            let service = SyncService::new(&test.db, &panda_client, SyncConfig::default());

            let inserted = service.sync_teams(SyncMode::Incremental).await.unwrap();

            assert_eq!(inserted, 1);
            assert_eq!(panda_client.request_count(), 1);
            test.assert_mocks();

            Ok(())
        }

        /// Expect an entity with an unresolvable parent to be skipped while the rest are stored
        #[tokio::test]
        async fn test_unresolved_parent_skipped() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_sync_tables()
                .with_league(100, 1)
                .with_page_endpoint(
                    "series",
                    1,
                    vec![factory::series(200, 100, 1), factory::series(201, 999, 1)],
                    1,
                )
                .with_error_endpoint("/leagues/999", None, 404, 1)
                .build()
                .await?;
            let panda_client = client(&test);
            let service = SyncService::new(&test.db, &panda_client, SyncConfig::default());

            let inserted = service.sync_series(SyncMode::Incremental).await.unwrap();

            assert_eq!(inserted, 1);
            assert!(entity::prelude::Series::find_by_id(201)
                .one(&test.db)
                .await?
                .is_none());
            test.assert_mocks();

            Ok(())
        }

        /// Expect cancellation while resolving a parent to end the sync
        #[tokio::test]
        async fn test_cancelled_while_resolving_parent() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_sync_tables()
                .with_page_endpoint(
                    "series",
                    1,
                    vec![factory::series(200, 100, 1), factory::series(201, 101, 1)],
                    1,
                )
                .with_entity_endpoint("leagues", 101, factory::league(101, 1), 0)
                .build()
                .await?;
            let panda_client = client(&test);
            let shutdown = panda_client.clone();
            let league_mock = test
                .server
                .mock("GET", "/leagues/100")
                .match_query(mockito::Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body_from_request(move |_| {
                    shutdown.cancel();
                    factory::league(100, 1).to_string().into_bytes()
                })
                .expect(1)
                .create_async()
                .await;
            let service = SyncService::new(&test.db, &panda_client, SyncConfig::default());

            let result = service.sync_series(SyncMode::Incremental).await;

            assert!(matches!(
                result,
                Err(Error::PandaError(PandaError::Cancelled { .. }))
            ));
            assert!(entity::prelude::Series::find().all(&test.db).await?.is_empty());
            league_mock.assert_async().await;
            test.assert_mocks();

            Ok(())
        }

        /// Expect an unstorable entity to end the sync before its parent is requested
        #[tokio::test]
        async fn test_out_of_range_entity_fails_first() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_sync_tables()
                .with_page_endpoint(
                    "series",
                    1,
                    vec![factory::series(5_000_000_000, 100, 1)],
                    1,
                )
                .with_entity_endpoint("leagues", 100, factory::league(100, 1), 0)
                .build()
                .await?;
            let panda_client = client(&test);
            let service = SyncService::new(&test.db, &panda_client, SyncConfig::default());

            let result = service.sync_series(SyncMode::Incremental).await;

            assert!(matches!(
                result,
                Err(Error::IdOutOfRange {
                    kind: EntityKind::Series,
                    ..
                })
            ));
            assert_eq!(panda_client.request_count(), 1);
            assert!(entity::prelude::League::find().all(&test.db).await?.is_empty());
            test.assert_mocks();

            Ok(())
        }

        /// Expect a failed list page to end the sync with its error
        #[tokio::test]
        async fn test_page_failure_returns_error() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_sync_tables()
                .with_error_endpoint("/tournaments", Some(1), 500, 1)
                .build()
                .await?;
            let panda_client = client(&test);
            let service = SyncService::new(&test.db, &panda_client, SyncConfig::default());

            let result = service.sync_tournaments(SyncMode::Backfill).await;

            assert!(matches!(
                result,
                Err(Error::PandaError(PandaError::Status { .. }))
            ));
            test.assert_mocks();

            Ok(())
        }
    }
}
