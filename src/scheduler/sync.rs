use tracing::info;

use crate::{
    error::Error,
    model::app::AppState,
    service::{
        matches::MatchSyncService,
        sync::{SyncMode, SyncService},
    },
};

/// Runs the bulk match sync over `MATCH_PAGES` pages
///
/// Each run gets its own cycle of the shared client, so a shutdown cancels it mid-flight.
///
/// # Returns
/// - `Ok(usize)` - Number of matches stored or already present
/// - `Err(Error)` - The run was cancelled
pub async fn run_match_sync(state: AppState) -> Result<usize, Error> {
    let panda_client = state.panda_client.cycle();

    let report = MatchSyncService::new(&state.db, &panda_client)
        .sync_matches(state.sync.match_pages)
        .await?;

    info!(
        requests = panda_client.request_count(),
        "Done with match run"
    );

    Ok(report.matches_persisted)
}

/// Runs every list sync followed by the match sync, reading one page per kind
///
/// # Returns
/// - `Ok(usize)` - Rows written across all kinds
/// - `Err(Error)` - The first step that failed
pub async fn run_full_sync(state: AppState) -> Result<usize, Error> {
    let panda_client = state.panda_client.cycle();

    let report = SyncService::new(&state.db, &panda_client, state.sync)
        .full_backfill(SyncMode::Incremental)
        .await?;

    info!(
        requests = panda_client.request_count(),
        "Done with full sync"
    );

    Ok(report.total())
}
