use sea_orm::{sea_query::OnConflict, ActiveValue, ConnectionTrait, EntityTrait};

use crate::{error::Error, model::entity::EntityKind, model::row::SeriesRow, util::id::store_int};

pub struct SeriesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeriesRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a series unless one with the same ID exists
    pub async fn upsert(&self, row: &SeriesRow) -> Result<bool, Error> {
        let series = entity::series::ActiveModel {
            id: ActiveValue::Set(store_int(EntityKind::Series, row.id)?),
            slug: ActiveValue::Set(row.slug.clone()),
            game_id: ActiveValue::Set(store_int(EntityKind::Game, row.game_id)?),
            league_id: ActiveValue::Set(store_int(EntityKind::League, row.league_id)?),
            name: ActiveValue::Set(row.name.clone()),
        };

        let inserted = entity::prelude::Series::insert(series)
            .on_conflict(
                OnConflict::column(entity::series::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(inserted > 0)
    }

    pub async fn get(&self, id: i64) -> Result<Option<entity::series::Model>, Error> {
        let id = store_int(EntityKind::Series, id)?;

        Ok(entity::prelude::Series::find_by_id(id).one(self.db).await?)
    }
}
