use sea_orm::{EntityTrait, PaginatorTrait};
use stalka::{
    config::SyncConfig,
    service::sync::{SyncMode, SyncService},
};
use stalka_test_utils::prelude::*;

use super::panda_client;

/// Expect a full run over an empty store to write every kind in dependency order
#[tokio::test]
async fn test_full_backfill() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sync_tables()
        .with_list_endpoint("videogames", vec![factory::game(1), factory::game(3)], 1)
        .with_page_endpoint(
            "leagues",
            1,
            vec![factory::league(100, 1), factory::league(101, 3)],
            1,
        )
        .with_page_endpoint("leagues", 2, vec![], 1)
        .with_page_endpoint("series", 1, vec![factory::series(200, 100, 1)], 1)
        .with_page_endpoint("series", 2, vec![], 1)
        .with_page_endpoint(
            "teams",
            1,
            vec![factory::team(10, 1), factory::team(20, 1)],
            1,
        )
        .with_page_endpoint("teams", 2, vec![], 1)
        .with_page_endpoint(
            "tournaments",
            1,
            vec![factory::tournament(300, 200, 100, 1, "a")],
            1,
        )
        .with_page_endpoint("tournaments", 2, vec![], 1)
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
        .build()
        .await?;
    let panda_client = panda_client(&test);
    let config = SyncConfig {
        match_pages: 1,
        backfill_match_pages: 2,
    };

    let report = SyncService::new(&test.db, &panda_client, config)
        .full_backfill(SyncMode::Backfill)
        .await
        .unwrap();

    assert_eq!(report.games, 2);
    assert_eq!(report.leagues, 2);
    assert_eq!(report.series, 1);
    assert_eq!(report.teams, 2);
    assert_eq!(report.tournaments, 1);
    assert_eq!(report.matches.matches_persisted, 2);
    assert_eq!(report.matches.teams_created, 0);
    assert_eq!(report.total(), 10);

    assert_eq!(entity::prelude::Game::find().count(&test.db).await?, 2);
    assert_eq!(entity::prelude::Match::find().count(&test.db).await?, 2);
    test.assert_mocks();

    Ok(())
}

/// Expect a failing game list to end the run before any later kind is requested
#[tokio::test]
async fn test_full_backfill_stops_on_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sync_tables()
        .with_error_endpoint("/videogames", None, 503, 1)
        .with_list_endpoint("leagues", vec![], 0)
        .build()
        .await?;
    let panda_client = panda_client(&test);

    let result = SyncService::new(&test.db, &panda_client, SyncConfig::default())
        .full_backfill(SyncMode::Incremental)
        .await;

    assert!(result.is_err());
    assert_eq!(panda_client.request_count(), 1);
    test.assert_mocks();

    Ok(())
}
