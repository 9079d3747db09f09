//! Cron scheduler for the periodic sync runs.
//!
//! Two jobs are registered: the bulk match sync every hour and a full sync of every kind
//! once a day. A failed run is logged and the next tick tries again.

use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::Error, model::app::AppState};

pub mod config;
pub mod sync;

use self::config::{full_sync as full_sync_config, matches as matches_config};
use self::sync::{run_full_sync, run_match_sync};

/// Job scheduler for the periodic sync runs.
pub struct Scheduler {
    state: AppState,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Arguments
    /// - `state` - Database connection, PandaScore client and page counts handed to every job
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(state: AppState) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { state, sched })
    }

    /// Registers the sync jobs and starts the scheduler.
    ///
    /// # Returns
    /// - `Ok(())` - All jobs registered and scheduler started
    /// - `Err(Error)` - Failed to register a job or start the scheduler
    pub async fn start(mut self) -> Result<(), Error> {
        self.schedule_job(matches_config::CRON_EXPRESSION, "match", run_match_sync)
            .await?;

        self.schedule_job(full_sync_config::CRON_EXPRESSION, "full", run_full_sync)
            .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// On execution, the job logs the number of rows written (on success) or the error that
    /// ended the run.
    ///
    /// # Arguments
    /// - `cron` - Cron expression defining when the job should run (e.g., "0 0 * * * *" for hourly)
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `function` - Async function running one sync, returning the count of rows written
    ///
    /// # Returns
    /// - `Ok(())` - Job successfully registered with the scheduler
    /// - `Err(Error)` - Invalid cron expression or scheduler error
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(AppState) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<usize, Error>> + Send + 'static,
    {
        let state = self.state.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let state = state.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    tracing::info!("Running {} sync", name);

                    match function(state).await {
                        Ok(count) => tracing::info!("Finished {} sync with {} row(s)", name, count),
                        Err(e) => tracing::error!("Error running {} sync: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}
