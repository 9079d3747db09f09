//! Synchronizes esports metadata from the PandaScore API into a relational store.
//!
//! Games, leagues, series, tournaments, matches and teams are mirrored keyed by their
//! PandaScore IDs. Any entity whose parent is not stored yet has that parent fetched and
//! stored first, so foreign keys always point at existing rows.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod pandascore;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
