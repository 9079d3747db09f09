//! PandaScore mock endpoint creation.
//!
//! Every endpoint answers regardless of the query string unless it is a page endpoint, which
//! only answers for its own `page` value. Each mock verifies it was called exactly
//! `expected_requests` times when the test calls `assert_mocks`.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::fixtures::PandaFixtures;

impl<'a> PandaFixtures<'a> {
    /// Create a mock endpoint for a single entity.
    ///
    /// # Arguments
    /// - `path` - Collection path such as `videogames` or `leagues`
    /// - `id` - Entity ID appended to the path
    /// - `body` - Payload to return
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn create_entity_endpoint(
        &mut self,
        path: &str,
        id: i64,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/{}/{}", path, id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for one page of a collection.
    ///
    /// # Arguments
    /// - `path` - Collection path such as `leagues` or `matches/past`
    /// - `page` - Value of the `page` query parameter this mock answers
    /// - `items` - Payloads returned as the page's JSON array
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn create_page_endpoint(
        &mut self,
        path: &str,
        page: usize,
        items: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/{}", path);

        self.setup
            .server
            .mock("GET", url.as_str())
            .match_query(Matcher::UrlEncoded("page".into(), page.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Value::Array(items).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for a collection requested without a page parameter.
    pub fn create_list_endpoint(
        &mut self,
        path: &str,
        items: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/{}", path);

        self.setup
            .server
            .mock("GET", url.as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Value::Array(items).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint that fails with `status`.
    ///
    /// # Arguments
    /// - `path` - Full request path such as `/videogames/42`
    /// - `page` - When set, only requests for this page fail
    /// - `status` - HTTP status code to return
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn create_error_endpoint(
        &mut self,
        path: &str,
        page: Option<usize>,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let query = match page {
            Some(page) => Matcher::UrlEncoded("page".into(), page.to_string()),
            None => Matcher::Any,
        };

        self.setup
            .server
            .mock("GET", path)
            .match_query(query)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"Internal Server Error"}"#)
            .expect(expected_requests)
            .create()
    }
}
