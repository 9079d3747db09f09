//! Error types for the stalka sync service.
//!
//! This module aggregates the domain-specific error types (configuration, PandaScore fetch
//! client) and external library errors into a single [`Error`] using `thiserror`'s `#[from]`
//! conversions, so every layer can propagate failures with `?`.
//!
//! A row that does not exist is never represented here: existence checks return
//! `Ok(false)` and reserve `Err` for lookups that could not be answered.

pub mod config;
pub mod panda;

use thiserror::Error;

use crate::{
    error::{config::ConfigError, panda::PandaError},
    model::entity::EntityKind,
};

/// Main error type for the sync service.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - PandaScore errors (transport, non-success status, malformed payloads, cancellation)
/// - Integer range errors (an external ID that does not fit the store's integer columns)
/// - Database errors (connection failures, constraint violations other than PK conflicts)
/// - Scheduler errors (job registration, scheduler startup)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// PandaScore request failed or returned an unusable payload.
    #[error(transparent)]
    PandaError(#[from] PandaError),
    /// An integer from the API does not fit the store's 32-bit column.
    ///
    /// Raised before any query is issued so the value is never truncated or wrapped.
    #[error("{kind} value {value} does not fit the store's 32-bit integer range")]
    IdOutOfRange { kind: EntityKind, value: i64 },
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}
