use sea_orm::{sea_query::OnConflict, ActiveValue, ConnectionTrait, EntityTrait};

use crate::{error::Error, model::entity::EntityKind, model::row::MatchRow, util::id::store_int};

pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a match unless one with the same ID exists
    ///
    /// Scores and the game count are range-checked like IDs; a match is never stored with a
    /// wrapped value.
    pub async fn upsert(&self, row: &MatchRow) -> Result<bool, Error> {
        let kind = EntityKind::Match;

        let m = entity::matches::ActiveModel {
            id: ActiveValue::Set(store_int(kind, row.id)?),
            slug: ActiveValue::Set(row.slug.clone()),
            name: ActiveValue::Set(row.name.clone()),
            finished: ActiveValue::Set(row.finished),
            game_id: ActiveValue::Set(store_int(EntityKind::Game, row.game_id)?),
            league_id: ActiveValue::Set(store_int(EntityKind::League, row.league_id)?),
            series_id: ActiveValue::Set(store_int(EntityKind::Series, row.series_id)?),
            tournament_id: ActiveValue::Set(store_int(
                EntityKind::Tournament,
                row.tournament_id,
            )?),
            team1_id: ActiveValue::Set(store_int(EntityKind::Team, row.team1_id)?),
            team1_score: ActiveValue::Set(store_int(kind, row.team1_score)?),
            team2_id: ActiveValue::Set(store_int(EntityKind::Team, row.team2_id)?),
            team2_score: ActiveValue::Set(store_int(kind, row.team2_score)?),
            expected_start_time: ActiveValue::Set(row.expected_start_time),
            amount_of_games: ActiveValue::Set(store_int(kind, row.amount_of_games)?),
            actual_game_time: ActiveValue::Set(row.actual_game_time),
        };

        let inserted = entity::prelude::Match::insert(m)
            .on_conflict(
                OnConflict::column(entity::matches::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(inserted > 0)
    }

    pub async fn get(&self, id: i64) -> Result<Option<entity::matches::Model>, Error> {
        let id = store_int(EntityKind::Match, id)?;

        Ok(entity::prelude::Match::find_by_id(id).one(self.db).await?)
    }
}

#[cfg(test)]
mod tests {
    use stalka_test_utils::prelude::*;

    use super::*;

    fn row(id: i64, tournament_id: i64) -> MatchRow {
        MatchRow {
            id,
            slug: None,
            name: "G2 vs FNC".to_string(),
            finished: true,
            game_id: 1,
            league_id: 100,
            series_id: 200,
            tournament_id,
            team1_id: 10,
            team1_score: 3,
            team2_id: 20,
            team2_score: 1,
            expected_start_time: None,
            amount_of_games: 5,
            actual_game_time: 1800.0,
        }
    }

    /// Expect a match to be stored once even when upserted twice
    #[tokio::test]
    async fn test_upsert_is_idempotent() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_sync_tables()
            .with_tournament(300, 200)
            .build()
            .await?;
        let repo = MatchRepository::new(&test.db);

        assert!(repo.upsert(&row(1001, 300)).await.unwrap());
        assert!(!repo.upsert(&row(1001, 300)).await.unwrap());

        let stored = entity::prelude::Match::find().all(&test.db).await?;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].actual_game_time, 1800.0);
        assert_eq!((stored[0].team1_id, stored[0].team1_score), (10, 3));

        Ok(())
    }

    /// Expect an out-of-range score to be rejected with nothing written
    #[tokio::test]
    async fn test_upsert_score_out_of_range() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_sync_tables()
            .with_tournament(300, 200)
            .build()
            .await?;
        let repo = MatchRepository::new(&test.db);
        let mut m = row(1001, 300);
        m.team2_score = i64::MAX;

        let result = repo.upsert(&m).await;

        assert!(matches!(result, Err(Error::IdOutOfRange { .. })));
        assert!(repo.get(1001).await.unwrap().is_none());

        Ok(())
    }

    /// Expect the foreign key to reject a match whose tournament is missing
    #[tokio::test]
    async fn test_upsert_missing_tournament() -> Result<(), TestError> {
        let test = TestBuilder::new().with_sync_tables().build().await?;
        let repo = MatchRepository::new(&test.db);

        let result = repo.upsert(&row(1001, 300)).await;

        assert!(matches!(result, Err(Error::DbErr(_))));

        Ok(())
    }
}
