use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, error::Error, pandascore::PandaClient};

/// Build the PandaScore client with the configured base URL and token
pub fn build_panda_client(config: &Config) -> Result<PandaClient, Error> {
    let panda_client = PandaClient::new(&config.pandascore_url, &config.pandascore_secret)?;

    Ok(panda_client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
