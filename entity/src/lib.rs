//! SeaORM entity definitions for the esports schema.
//!
//! One table per PandaScore entity kind. Primary keys are the external PandaScore IDs, so
//! none of the tables use auto-increment keys.

pub mod game;
pub mod league;
pub mod matches;
pub mod prelude;
pub mod series;
pub mod team;
pub mod tournament;
