//! Sync services.
//!
//! - [`dependency`] - resolves and stores missing ancestors before an entity is written
//! - [`matches`] - the concurrent bulk match sync
//! - [`sync`] - per-kind list syncs and the full backfill

pub mod dependency;
pub mod matches;
pub mod sync;
