use sea_orm::{EntityTrait, PaginatorTrait};
use stalka::service::matches::MatchSyncService;
use stalka_test_utils::prelude::*;

use super::panda_client;

/// Build a builder answering all match pages for `pages` page tasks, one match per page
///
/// Task `i` reads `matches/upcoming` page `i / 2` when even and `matches/past` page `i / 2`
/// when odd. The task in `failing` gets a 500 instead.
fn match_pages(pages: usize, failing: Option<usize>) -> TestBuilder {
    let mut builder = TestBuilder::new().with_sync_tables().with_tournament(300, 200);

    for index in 1..=pages {
        let (path, page) = if index % 2 == 0 {
            ("matches/upcoming", index / 2)
        } else {
            ("matches/past", index / 2)
        };

        builder = if failing == Some(index) {
            builder.with_error_endpoint(&format!("/{}", path), Some(page), 500, 1)
        } else {
            builder.with_page_endpoint(
                path,
                page,
                vec![factory::upcoming_match(1000 + index as i64, 300)],
                1,
            )
        };
    }

    builder
}

/// Expect every page to be requested once and every match stored
#[tokio::test]
async fn test_sync_all_pages() -> Result<(), TestError> {
    let test = match_pages(20, None).build().await?;
    let panda_client = panda_client(&test);

    let report = MatchSyncService::new(&test.db, &panda_client)
        .sync_matches(20)
        .await
        .unwrap();

    assert_eq!(report.pages_requested, 20);
    assert_eq!(report.pages_failed, 0);
    assert_eq!(report.matches_persisted, 20);
    assert_eq!(entity::prelude::Match::find().count(&test.db).await?, 20);
    test.assert_mocks();

    Ok(())
}

/// Expect one failing page to drop only its own matches
#[tokio::test]
async fn test_sync_with_failed_page() -> Result<(), TestError> {
    let test = match_pages(20, Some(7)).build().await?;
    let panda_client = panda_client(&test);

    let report = MatchSyncService::new(&test.db, &panda_client)
        .sync_matches(20)
        .await
        .unwrap();

    assert_eq!(report.pages_failed, 1);
    assert_eq!(report.matches_fetched, 19);
    assert_eq!(report.matches_persisted, 19);
    assert_eq!(entity::prelude::Match::find().count(&test.db).await?, 19);
    assert!(entity::prelude::Match::find_by_id(1007)
        .one(&test.db)
        .await?
        .is_none());
    test.assert_mocks();

    Ok(())
}

/// Expect a rerun over the same pages to store nothing new
#[tokio::test]
async fn test_sync_rerun_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sync_tables()
        .with_tournament(300, 200)
        .with_page_endpoint(
            "matches/past",
            0,
            vec![factory::finished_match(1001, 300, 10, 20)],
            2,
        )
        .with_entity_endpoint("teams", 10, factory::team(10, 1), 1)
        .with_entity_endpoint("teams", 20, factory::team(20, 1), 1)
        .build()
        .await?;
    let panda_client = panda_client(&test);
    let service = MatchSyncService::new(&test.db, &panda_client);

    let first = service.sync_matches(1).await.unwrap();
    let second = service.sync_matches(1).await.unwrap();

    assert_eq!(first.teams_created, 2);
    assert_eq!(second.teams_created, 0);
    assert_eq!(second.matches_persisted, 1);
    assert_eq!(entity::prelude::Match::find().count(&test.db).await?, 1);
    assert_eq!(entity::prelude::Team::find().count(&test.db).await?, 2);
    test.assert_mocks();

    Ok(())
}
