use sea_orm::DatabaseConnection;

use crate::{config::SyncConfig, pandascore::PandaClient};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub panda_client: PandaClient,
    pub sync: SyncConfig,
}
