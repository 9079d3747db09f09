use sea_orm::EntityTrait;
use stalka::{
    data::existence::ExistenceOracle,
    model::entity::EntityKind,
    service::dependency::DependencyResolver,
};
use stalka_test_utils::prelude::*;

use super::panda_client;

/// Expect a league referencing unknown game 42 to fetch the game once, then store both rows
#[tokio::test]
async fn test_league_with_unknown_game() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sync_tables()
        .with_entity_endpoint("videogames", 42, factory::game(42), 1)
        .build()
        .await?;
    let panda_client = panda_client(&test);
    let resolver = DependencyResolver::new(&test.db, &panda_client);
    let league = EntityKind::League
        .decode_one(factory::league(7, 42).to_string().as_bytes())
        .unwrap();

    let inserted = resolver.persist_with_dependencies(&league).await.unwrap();

    let game = entity::prelude::Game::find_by_id(42).one(&test.db).await?;
    let league = entity::prelude::League::find_by_id(7).one(&test.db).await?;
    assert!(inserted);
    assert_eq!(game.map(|g| g.name), Some("Game 42".to_string()));
    assert_eq!(league.map(|l| l.game_id), Some(42));
    assert_eq!(panda_client.request_count(), 1);
    test.assert_mocks();

    Ok(())
}

/// Expect a match with no stored ancestors to store the full chain from the game down
#[tokio::test]
async fn test_match_with_empty_store() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sync_tables()
        .with_entity_endpoint(
            "tournaments",
            300,
            factory::tournament(300, 200, 100, 5, "s"),
            1,
        )
        .with_entity_endpoint("series", 200, factory::series(200, 100, 5), 1)
        .with_entity_endpoint("leagues", 100, factory::league(100, 5), 1)
        .with_entity_endpoint("videogames", 5, factory::game(5), 1)
        .build()
        .await?;
    let panda_client = panda_client(&test);
    let resolver = DependencyResolver::new(&test.db, &panda_client);
    let oracle = ExistenceOracle::new(&test.db);
    let m = EntityKind::Match
        .decode_one(factory::upcoming_match(1001, 300).to_string().as_bytes())
        .unwrap();

    resolver.persist_with_dependencies(&m).await.unwrap();

    assert!(oracle.exists(EntityKind::Game, 5).await.unwrap());
    assert!(oracle.exists(EntityKind::League, 100).await.unwrap());
    assert!(oracle.exists(EntityKind::Series, 200).await.unwrap());
    assert!(oracle.exists(EntityKind::Tournament, 300).await.unwrap());
    assert!(oracle.exists(EntityKind::Match, 1001).await.unwrap());
    assert_eq!(panda_client.request_count(), 4);

    let tournament = entity::prelude::Tournament::find_by_id(300)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(tournament.tier, 1);
    test.assert_mocks();

    Ok(())
}

/// Expect resolving the same entity again to make no further requests
#[tokio::test]
async fn test_second_resolution_is_free() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sync_tables()
        .with_entity_endpoint("series", 200, factory::series(200, 100, 1), 1)
        .with_entity_endpoint("leagues", 100, factory::league(100, 1), 1)
        .with_entity_endpoint("videogames", 1, factory::game(1), 1)
        .build()
        .await?;
    let panda_client = panda_client(&test);
    let resolver = DependencyResolver::new(&test.db, &panda_client);
    let tournament = EntityKind::Tournament
        .decode_one(
            factory::tournament(300, 200, 100, 1, "c")
                .to_string()
                .as_bytes(),
        )
        .unwrap();

    assert!(resolver.persist_with_dependencies(&tournament).await.unwrap());
    assert!(!resolver.persist_with_dependencies(&tournament).await.unwrap());

    assert_eq!(panda_client.request_count(), 3);
    test.assert_mocks();

    Ok(())
}
