use sea_orm::{sea_query::OnConflict, ActiveValue, ConnectionTrait, EntityTrait};

use crate::{error::Error, model::entity::EntityKind, model::row::TeamRow, util::id::store_int};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a team unless one with the same ID exists
    pub async fn upsert(&self, row: &TeamRow) -> Result<bool, Error> {
        let team = entity::team::ActiveModel {
            id: ActiveValue::Set(store_int(EntityKind::Team, row.id)?),
            game_id: ActiveValue::Set(store_int(EntityKind::Game, row.game_id)?),
            name: ActiveValue::Set(row.name.clone()),
            acronym: ActiveValue::Set(row.acronym.clone()),
            slug: ActiveValue::Set(row.slug.clone()),
            image_link: ActiveValue::Set(row.image_link.clone()),
        };

        let inserted = entity::prelude::Team::insert(team)
            .on_conflict(
                OnConflict::column(entity::team::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(inserted > 0)
    }

    pub async fn get(&self, id: i64) -> Result<Option<entity::team::Model>, Error> {
        let id = store_int(EntityKind::Team, id)?;

        Ok(entity::prelude::Team::find_by_id(id).one(self.db).await?)
    }
}
