use stalka::{
    config::Config,
    model::app::AppState,
    scheduler::Scheduler,
    service::sync::{SyncMode, SyncService},
    startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), stalka::error::Error> {
    let panda_client = startup::build_panda_client(&config)?;
    let db = startup::connect_to_database(&config).await?;

    let state = AppState {
        db,
        panda_client,
        sync: config.sync,
    };

    tracing::info!("Running startup backfill");

    {
        let panda_client = state.panda_client.cycle();
        let service = SyncService::new(&state.db, &panda_client, state.sync);

        if let Err(e) = service.full_backfill(SyncMode::Backfill).await {
            tracing::error!("Startup backfill failed: {}", e);
        }
    }

    Scheduler::new(state.clone()).await?.start().await?;

    tracing::info!("Scheduler started");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
    state.panda_client.cancel();

    Ok(())
}
