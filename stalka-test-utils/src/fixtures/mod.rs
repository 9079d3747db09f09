//! Test fixtures for stored rows, PandaScore payloads and mock endpoints.
//!
//! - `data` - rows inserted straight into the test database, parents created as needed
//! - `factory` - JSON payloads shaped like PandaScore responses
//! - `mockito` - mock PandaScore endpoints serving those payloads

use crate::TestSetup;

pub mod data;
pub mod factory;
pub mod mockito;

impl TestSetup {
    pub fn panda<'a>(&'a mut self) -> PandaFixtures<'a> {
        PandaFixtures { setup: self }
    }
}

pub struct PandaFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
