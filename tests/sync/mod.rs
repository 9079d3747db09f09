use stalka::pandascore::PandaClient;
use stalka_test_utils::prelude::*;

mod backfill;
mod dependency;
mod matches;

/// Build a client pointed at the test's mock PandaScore server
fn panda_client(test: &TestSetup) -> PandaClient {
    PandaClient::new(test.panda_url(), TEST_PANDASCORE_TOKEN).unwrap()
}
