use futures::future::BoxFuture;
use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::{
    data::{existence::ExistenceOracle, upsert_row},
    error::Error,
    model::entity::PandaEntity,
    pandascore::PandaClient,
};

/// Ensures every ancestor of an entity is stored before the entity itself.
pub struct DependencyResolver<'a> {
    db: &'a DatabaseConnection,
    panda_client: &'a PandaClient,
}

impl<'a> DependencyResolver<'a> {
    /// Creates a new instance of [`DependencyResolver`]
    pub fn new(db: &'a DatabaseConnection, panda_client: &'a PandaClient) -> Self {
        Self { db, panda_client }
    }

    /// Makes sure the entity's parent row exists, fetching and storing it when missing
    ///
    /// A missing parent is fetched by ID, its own parent is resolved the same way, and then
    /// it is persisted, so missing ancestors are written root-most first. Resolution stops at
    /// the first ancestor that is already stored, or at a game.
    ///
    /// # Returns
    /// - `Ok(())` - The parent exists, or the entity has no parent
    /// - `Err(Error)` - The first lookup, fetch, decode or persist failure; nothing below the
    ///   failing ancestor is written
    pub fn ensure_dependency<'b>(
        &'b self,
        entity: &'b PandaEntity,
    ) -> BoxFuture<'b, Result<(), Error>> {
        Box::pin(async move {
            let Some(dependency) = entity.dependency() else {
                return Ok(());
            };

            let oracle = ExistenceOracle::new(self.db);
            if oracle.exists(dependency.kind, dependency.id).await? {
                return Ok(());
            }

            debug!(
                kind = %entity.kind(),
                id = entity.id(),
                parent_kind = %dependency.kind,
                parent_id = dependency.id,
                "Fetching missing parent"
            );

            let parent = self
                .panda_client
                .fetch_one(dependency.kind, dependency.id)
                .await?;

            self.ensure_dependency(&parent).await?;
            upsert_row(self.db, &parent.to_row()).await?;

            debug!(
                kind = %dependency.kind,
                id = dependency.id,
                name = parent.name(),
                "Stored missing parent"
            );

            Ok(())
        })
    }

    /// Resolves the entity's ancestors then stores the entity itself
    ///
    /// The entity's own row is range-checked first, so an unstorable entity triggers no
    /// request and no ancestor write.
    ///
    /// # Returns
    /// - `Ok(true)` - The entity was inserted
    /// - `Ok(false)` - The entity was already stored
    /// - `Err(Error)` - Resolution or the entity's own insert failed
    pub async fn persist_with_dependencies(&self, entity: &PandaEntity) -> Result<bool, Error> {
        let row = entity.to_row();
        row.check_range()?;

        self.ensure_dependency(entity).await?;

        upsert_row(self.db, &row).await
    }
}
