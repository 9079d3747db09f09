use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment returned by [`TestBuilder::build`](crate::TestBuilder::build).
///
/// ```ignore
/// let mut test = TestBuilder::new().with_sync_tables().build().await?;
///
/// let client = PandaClient::new(test.panda_url(), TEST_PANDASCORE_TOKEN)?;
/// test.panda().insert_game(1).await?;
///
/// test.assert_mocks();
/// ```
pub struct TestSetup {
    /// Mock HTTP server standing in for the PandaScore API
    pub server: ServerGuard,
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// Mock endpoints created by the builder, kept alive for the length of the test
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    /// Create a new test setup with an empty database and no mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Mock server started and database connected
    /// - `Err(TestError::DbErr)` - In-memory database connection failed
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            server,
            db,
            mocks: Vec::new(),
        })
    }

    /// Base URL to configure the PandaScore client with.
    pub fn panda_url(&self) -> String {
        self.server.url()
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
