//! PandaScore REST API access.
//!
//! [`PandaClient`] issues authenticated GET requests and decodes the payloads defined in
//! [`model`] into [`PandaEntity`](crate::model::entity::PandaEntity) variants.

pub mod client;
pub mod model;

pub use client::{MatchListing, PandaClient, PAGE_SIZE};
