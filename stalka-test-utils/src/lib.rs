//! Shared test tooling for the stalka workspace.
//!
//! Tests declare what they need through [`TestBuilder`] (tables, stored rows, PandaScore
//! endpoints), then run against the returned [`TestSetup`]: an in-memory SQLite database
//! and a `mockito` server standing in for the PandaScore API.

pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::TEST_PANDASCORE_TOKEN, fixtures::factory, TestBuilder, TestError, TestSetup,
    };
}
