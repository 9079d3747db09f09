use sea_orm::DatabaseConnection;
use tokio::{sync::mpsc, task::JoinSet};
use tracing::{debug, error, info, warn};

use crate::{
    data::{existence::ExistenceOracle, upsert_row},
    error::{panda::PandaError, Error},
    model::entity::{EntityKind, PandaEntity},
    pandascore::{model::matches::Match, MatchListing, PandaClient},
    service::dependency::DependencyResolver,
};

/// Outcome of one bulk match sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSyncReport {
    pub pages_requested: usize,
    pub pages_failed: usize,
    pub matches_fetched: usize,
    /// Matches stored by this run or already present.
    pub matches_persisted: usize,
    pub matches_skipped: usize,
    pub teams_created: usize,
}

pub struct MatchSyncService<'a> {
    db: &'a DatabaseConnection,
    panda_client: &'a PandaClient,
}

impl<'a> MatchSyncService<'a> {
    /// Creates a new instance of [`MatchSyncService`]
    pub fn new(db: &'a DatabaseConnection, panda_client: &'a PandaClient) -> Self {
        Self { db, panda_client }
    }

    /// Fetches `pages` match-list pages concurrently, then stores their matches one by one
    ///
    /// Page task `i` (1-based) reads `matches/upcoming` when `i` is even and `matches/past`
    /// when odd, at page `i / 2`. A failed page is logged and dropped without affecting
    /// its siblings. Each match is then stored after its tournament chain is resolved, and
    /// the teams of finished team matches are fetched when missing. A match or team that
    /// fails is logged and skipped.
    ///
    /// # Returns
    /// - `Ok(MatchSyncReport)` - Counts for the run, including failed pages and skipped matches
    /// - `Err(Error::PandaError)` - The client was cancelled; nothing further is attempted
    pub async fn sync_matches(&self, pages: usize) -> Result<MatchSyncReport, Error> {
        let mut report = MatchSyncReport {
            pages_requested: pages,
            ..Default::default()
        };

        if pages == 0 {
            return Ok(report);
        }

        let fetched = self.fetch_pages(pages, &mut report).await?;
        report.matches_fetched = fetched.len();

        let resolver = DependencyResolver::new(self.db, self.panda_client);

        for m in fetched {
            let match_id = m.id;
            let team_ids: Vec<i64> = if m.end_at.is_some() && m.is_team_match() {
                m.opponents.iter().map(|o| o.opponent.id).collect()
            } else {
                Vec::new()
            };

            if let Err(e) = resolver
                .persist_with_dependencies(&PandaEntity::Match(m))
                .await
            {
                if is_cancelled(&e) {
                    return Err(e);
                }

                warn!(match_id, error = %e, "Skipping match");
                report.matches_skipped += 1;
                continue;
            }

            report.matches_persisted += 1;
            report.teams_created += self.ensure_teams(match_id, &team_ids).await?;
        }

        info!(
            pages_requested = report.pages_requested,
            pages_failed = report.pages_failed,
            matches_fetched = report.matches_fetched,
            matches_persisted = report.matches_persisted,
            matches_skipped = report.matches_skipped,
            teams_created = report.teams_created,
            requests = self.panda_client.request_count(),
            "Match sync complete"
        );

        Ok(report)
    }

    /// Runs one task per page and collects the matches of every page that succeeded
    ///
    /// Results are gathered in completion order. The channel holds one slot per task so no
    /// sender waits on the coordinator.
    async fn fetch_pages(
        &self,
        pages: usize,
        report: &mut MatchSyncReport,
    ) -> Result<Vec<Match>, Error> {
        let (tx, mut rx) = mpsc::channel(pages);
        let mut tasks = JoinSet::new();

        for index in 1..=pages {
            let tx = tx.clone();
            let panda_client = self.panda_client.clone();

            tasks.spawn(async move {
                let (listing, page) = MatchListing::for_index(index);
                debug!(index, listing = listing.path(), page, "Fetching match page");

                let result = panda_client.fetch_match_page(listing, page).await;
                let _ = tx.send((index, result)).await;
            });
        }
        drop(tx);

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                error!(error = %e, "Match page task did not complete");
            }
        }

        let mut fetched = Vec::new();
        let mut pages_ok = 0;

        while let Some((index, result)) = rx.recv().await {
            match result {
                Ok(matches) => {
                    pages_ok += 1;
                    fetched.extend(matches);
                }
                Err(e @ PandaError::Cancelled { .. }) => return Err(e.into()),
                Err(e) => error!(index, error = %e, "Failed to fetch match page"),
            }
        }

        report.pages_failed = pages - pages_ok;

        Ok(fetched)
    }

    /// Stores each opponent team that is not stored yet, returning how many were created
    ///
    /// Teams have no parent, so a missing team is fetched and stored directly. A failed team
    /// is logged and skipped; only cancellation is returned.
    async fn ensure_teams(&self, match_id: i64, team_ids: &[i64]) -> Result<usize, Error> {
        let oracle = ExistenceOracle::new(self.db);
        let mut created = 0;

        for &team_id in team_ids {
            let result = async {
                if oracle.exists(EntityKind::Team, team_id).await? {
                    return Ok::<_, Error>(false);
                }

                let team = self
                    .panda_client
                    .fetch_one(EntityKind::Team, team_id)
                    .await?;

                upsert_row(self.db, &team.to_row()).await
            }
            .await;

            match result {
                Ok(true) => {
                    debug!(match_id, team_id, "Stored missing team");
                    created += 1;
                }
                Ok(false) => {}
                Err(e) if is_cancelled(&e) => return Err(e),
                Err(e) => warn!(match_id, team_id, error = %e, "Failed to ensure team"),
            }
        }

        Ok(created)
    }
}

pub(crate) fn is_cancelled(e: &Error) -> bool {
    matches!(e, Error::PandaError(PandaError::Cancelled { .. }))
}

#[cfg(test)]
mod tests {
    use sea_orm::EntityTrait;
    use serde_json::{json, Value};
    use stalka_test_utils::prelude::*;

    use super::*;

    fn client(test: &TestSetup) -> PandaClient {
        PandaClient::new(test.panda_url(), TEST_PANDASCORE_TOKEN).unwrap()
    }

    /// Expect an empty run to make no requests
    #[tokio::test]
    async fn test_sync_zero_pages() -> Result<(), TestError> {
        let test = TestBuilder::new().with_sync_tables().build().await?;
        let panda_client = client(&test);

        let report = MatchSyncService::new(&test.db, &panda_client)
            .sync_matches(0)
            .await
            .unwrap();

        assert_eq!(report, MatchSyncReport::default());
        assert_eq!(panda_client.request_count(), 0);

        Ok(())
    }

    /// Expect finished team matches to create their missing teams and skip existing ones
    #[tokio::test]
    async fn test_sync_creates_missing_teams() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_sync_tables()
            .with_tournament(300, 200)
            .with_team(10)
            .with_page_endpoint(
                "matches/past",
                0,
                vec![factory::finished_match(1001, 300, 10, 20)],
                1,
            )
            .with_page_endpoint(
                "matches/upcoming",
                1,
                vec![factory::upcoming_match(1002, 300)],
                1,
            )
            .with_entity_endpoint("teams", 20, factory::team(20, 1), 1)
            .with_entity_endpoint("teams", 10, factory::team(10, 1), 0)
            .build()
            .await?;
        let panda_client = client(&test);

        let report = MatchSyncService::new(&test.db, &panda_client)
            .sync_matches(2)
            .await
            .unwrap();

        assert_eq!(report.pages_failed, 0);
        assert_eq!(report.matches_fetched, 2);
        assert_eq!(report.matches_persisted, 2);
        assert_eq!(report.teams_created, 1);

        let finished = entity::prelude::Match::find_by_id(1001)
            .one(&test.db)
            .await?
            .unwrap();
        assert!(finished.finished);
        assert_eq!((finished.team1_id, finished.team1_score), (10, 2));
        assert_eq!((finished.team2_id, finished.team2_score), (20, 1));
        assert_eq!(finished.actual_game_time, 1800.0);

        let upcoming = entity::prelude::Match::find_by_id(1002)
            .one(&test.db)
            .await?
            .unwrap();
        assert!(!upcoming.finished);
        assert_eq!(upcoming.team1_id, 0);

        assert!(entity::prelude::Team::find_by_id(20)
            .one(&test.db)
            .await?
            .is_some());
        test.assert_mocks();

        Ok(())
    }

    /// Expect a match whose tournament cannot be resolved to be skipped without stopping the run
    #[tokio::test]
    async fn test_sync_skips_unresolvable_match() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_sync_tables()
            .with_tournament(300, 200)
            .with_page_endpoint(
                "matches/past",
                0,
                vec![
                    factory::upcoming_match(1001, 999),
                    factory::upcoming_match(1002, 300),
                ],
                1,
            )
            .with_error_endpoint("/tournaments/999", None, 404, 1)
            .build()
            .await?;
        let panda_client = client(&test);

        let report = MatchSyncService::new(&test.db, &panda_client)
            .sync_matches(1)
            .await
            .unwrap();

        assert_eq!(report.matches_fetched, 2);
        assert_eq!(report.matches_persisted, 1);
        assert_eq!(report.matches_skipped, 1);
        assert!(entity::prelude::Match::find_by_id(1001)
            .one(&test.db)
            .await?
            .is_none());
        test.assert_mocks();

        Ok(())
    }

    /// Expect a failing team fetch to be logged while the match itself stays stored
    #[tokio::test]
    async fn test_sync_team_failure_keeps_match() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_sync_tables()
            .with_tournament(300, 200)
            .with_team(10)
            .with_page_endpoint(
                "matches/past",
                0,
                vec![factory::finished_match(1001, 300, 10, 20)],
                1,
            )
            .with_error_endpoint("/teams/20", None, 500, 1)
            .build()
            .await?;
        let panda_client = client(&test);

        let report = MatchSyncService::new(&test.db, &panda_client)
            .sync_matches(1)
            .await
            .unwrap();

        assert_eq!(report.matches_persisted, 1);
        assert_eq!(report.teams_created, 0);
        assert!(entity::prelude::Team::find_by_id(20)
            .one(&test.db)
            .await?
            .is_none());
        test.assert_mocks();

        Ok(())
    }

    /// Expect a finished match scored between players to leave its opponents alone
    #[tokio::test]
    async fn test_sync_player_match_skips_teams() -> Result<(), TestError> {
        let mut finished = factory::finished_match(1001, 300, 10, 20);
        finished["winner_type"] = json!("Player");

        let test = TestBuilder::new()
            .with_sync_tables()
            .with_tournament(300, 200)
            .with_page_endpoint("matches/past", 0, vec![finished], 1)
            .with_entity_endpoint("teams", 10, factory::team(10, 1), 0)
            .with_entity_endpoint("teams", 20, factory::team(20, 1), 0)
            .build()
            .await?;
        let panda_client = client(&test);

        let report = MatchSyncService::new(&test.db, &panda_client)
            .sync_matches(1)
            .await
            .unwrap();

        assert_eq!(report.matches_persisted, 1);
        assert_eq!(report.teams_created, 0);
        assert_eq!(panda_client.request_count(), 1);
        test.assert_mocks();

        Ok(())
    }

    /// Expect a match that has not finished to leave its listed opponents alone
    #[tokio::test]
    async fn test_sync_unfinished_match_skips_teams() -> Result<(), TestError> {
        let mut running = factory::finished_match(1001, 300, 10, 20);
        running["status"] = json!("running");
        running["end_at"] = Value::Null;

        let test = TestBuilder::new()
            .with_sync_tables()
            .with_tournament(300, 200)
            .with_page_endpoint("matches/past", 0, vec![running], 1)
            .with_entity_endpoint("teams", 10, factory::team(10, 1), 0)
            .with_entity_endpoint("teams", 20, factory::team(20, 1), 0)
            .build()
            .await?;
        let panda_client = client(&test);

        let report = MatchSyncService::new(&test.db, &panda_client)
            .sync_matches(1)
            .await
            .unwrap();

        let stored = entity::prelude::Match::find_by_id(1001)
            .one(&test.db)
            .await?
            .unwrap();
        assert!(!stored.finished);
        assert_eq!(report.teams_created, 0);
        assert_eq!(panda_client.request_count(), 1);
        test.assert_mocks();

        Ok(())
    }

    /// Expect cancellation during a team fetch to end the run instead of skipping the team
    #[tokio::test]
    async fn test_sync_cancelled_while_ensuring_teams() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_sync_tables()
            .with_tournament(300, 200)
            .with_page_endpoint(
                "matches/past",
                0,
                vec![
                    factory::finished_match(1001, 300, 10, 20),
                    factory::finished_match(1002, 300, 30, 40),
                ],
                1,
            )
            .with_entity_endpoint("teams", 20, factory::team(20, 1), 0)
            .with_entity_endpoint("teams", 30, factory::team(30, 1), 0)
            .with_entity_endpoint("teams", 40, factory::team(40, 1), 0)
            .build()
            .await?;
        let panda_client = client(&test);
        let shutdown = panda_client.clone();
        let team_mock = test
            .server
            .mock("GET", "/teams/10")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body_from_request(move |_| {
                shutdown.cancel();
                factory::team(10, 1).to_string().into_bytes()
            })
            .expect(1)
            .create_async()
            .await;

        let result = MatchSyncService::new(&test.db, &panda_client)
            .sync_matches(1)
            .await;

        assert!(matches!(
            result,
            Err(Error::PandaError(PandaError::Cancelled { .. }))
        ));
        assert!(entity::prelude::Match::find_by_id(1002)
            .one(&test.db)
            .await?
            .is_none());
        team_mock.assert_async().await;
        test.assert_mocks();

        Ok(())
    }

    /// Expect a cancelled client to abort the run with a cancellation error
    #[tokio::test]
    async fn test_sync_cancelled() -> Result<(), TestError> {
        let test = TestBuilder::new().with_sync_tables().build().await?;
        let panda_client = client(&test);
        panda_client.cancel();

        let result = MatchSyncService::new(&test.db, &panda_client)
            .sync_matches(4)
            .await;

        assert!(matches!(
            result,
            Err(Error::PandaError(PandaError::Cancelled { .. }))
        ));

        Ok(())
    }
}
