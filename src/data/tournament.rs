use sea_orm::{sea_query::OnConflict, ActiveValue, ConnectionTrait, EntityTrait};

use crate::{
    error::Error, model::entity::EntityKind, model::row::TournamentRow, util::id::store_int,
};

pub struct TournamentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TournamentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a tournament unless one with the same ID exists
    pub async fn upsert(&self, row: &TournamentRow) -> Result<bool, Error> {
        let tournament = entity::tournament::ActiveModel {
            id: ActiveValue::Set(store_int(EntityKind::Tournament, row.id)?),
            slug: ActiveValue::Set(row.slug.clone()),
            game_id: ActiveValue::Set(store_int(EntityKind::Game, row.game_id)?),
            series_id: ActiveValue::Set(store_int(EntityKind::Series, row.series_id)?),
            league_id: ActiveValue::Set(store_int(EntityKind::League, row.league_id)?),
            tier: ActiveValue::Set(row.tier),
            name: ActiveValue::Set(row.name.clone()),
        };

        let inserted = entity::prelude::Tournament::insert(tournament)
            .on_conflict(
                OnConflict::column(entity::tournament::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(inserted > 0)
    }

    pub async fn get(&self, id: i64) -> Result<Option<entity::tournament::Model>, Error> {
        let id = store_int(EntityKind::Tournament, id)?;

        Ok(entity::prelude::Tournament::find_by_id(id)
            .one(self.db)
            .await?)
    }
}
