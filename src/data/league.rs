use sea_orm::{sea_query::OnConflict, ActiveValue, ConnectionTrait, EntityTrait};

use crate::{error::Error, model::entity::EntityKind, model::row::LeagueRow, util::id::store_int};

pub struct LeagueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LeagueRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a league unless one with the same ID exists
    ///
    /// The league's game must already be stored; the foreign key rejects the insert otherwise.
    pub async fn upsert(&self, row: &LeagueRow) -> Result<bool, Error> {
        let league = entity::league::ActiveModel {
            id: ActiveValue::Set(store_int(EntityKind::League, row.id)?),
            slug: ActiveValue::Set(row.slug.clone()),
            game_id: ActiveValue::Set(store_int(EntityKind::Game, row.game_id)?),
            name: ActiveValue::Set(row.name.clone()),
            image_link: ActiveValue::Set(row.image_link.clone()),
        };

        let inserted = entity::prelude::League::insert(league)
            .on_conflict(
                OnConflict::column(entity::league::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(inserted > 0)
    }

    pub async fn get(&self, id: i64) -> Result<Option<entity::league::Model>, Error> {
        let id = store_int(EntityKind::League, id)?;

        Ok(entity::prelude::League::find_by_id(id).one(self.db).await?)
    }
}
