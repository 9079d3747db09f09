use sea_orm::{sea_query::OnConflict, ActiveValue, ConnectionTrait, EntityTrait};

use crate::{error::Error, model::entity::EntityKind, model::row::GameRow, util::id::store_int};

pub struct GameRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a game unless one with the same ID exists, returning whether a row was written
    pub async fn upsert(&self, row: &GameRow) -> Result<bool, Error> {
        let game = entity::game::ActiveModel {
            id: ActiveValue::Set(store_int(EntityKind::Game, row.id)?),
            slug: ActiveValue::Set(row.slug.clone()),
            name: ActiveValue::Set(row.name.clone()),
        };

        let inserted = entity::prelude::Game::insert(game)
            .on_conflict(
                OnConflict::column(entity::game::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(inserted > 0)
    }

    pub async fn get(&self, id: i64) -> Result<Option<entity::game::Model>, Error> {
        let id = store_int(EntityKind::Game, id)?;

        Ok(entity::prelude::Game::find_by_id(id).one(self.db).await?)
    }
}
