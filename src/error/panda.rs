//! Errors raised by the PandaScore fetch client.
//!
//! Every variant is fatal to the single request that produced it. Nothing is retried at
//! this layer; the caller decides whether to skip the entity, the page or the cycle.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PandaError {
    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build PandaScore HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// Connection, TLS or body transfer failure.
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// PandaScore answered with a non-success status code.
    #[error("Request to {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    /// The response body did not match the expected payload shape.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// The sync cycle owning this request was cancelled.
    #[error("Request to {url} was cancelled")]
    Cancelled { url: String },
}
