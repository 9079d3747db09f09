//! Domain model shared by the data, service and scheduler layers.
//!
//! - [`entity`] - the closed set of entity kinds and the fetched-entity variants
//! - [`row`] - normalized, persistence-ready projections of fetched entities
//! - [`app`] - the state handed to scheduled jobs

pub mod app;
pub mod entity;
pub mod row;
