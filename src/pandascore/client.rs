use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use reqwest::header::ACCEPT;
use tokio_util::sync::CancellationToken;

use crate::{
    error::panda::PandaError,
    model::entity::{EntityKind, PandaEntity},
    pandascore::model::matches::Match,
};

/// Fixed number of items requested per collection page.
pub const PAGE_SIZE: usize = 100;

/// Sort order applied to every paginated request, most recently modified first.
pub const SORT_BY_MODIFIED: &str = "-modified_at";

const USER_AGENT: &str = concat!("stalka/", env!("CARGO_PKG_VERSION"));

/// One of the two match collections the bulk sync pages through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchListing {
    Upcoming,
    Past,
}

impl MatchListing {
    pub fn path(self) -> &'static str {
        match self {
            MatchListing::Upcoming => "upcoming",
            MatchListing::Past => "past",
        }
    }

    /// Maps a page task index to the listing and page it fetches.
    ///
    /// Even indices read `upcoming`, odd indices read `past`, and both advance one page
    /// every two indices.
    pub fn for_index(index: usize) -> (MatchListing, usize) {
        let listing = if index % 2 == 0 {
            MatchListing::Upcoming
        } else {
            MatchListing::Past
        };

        (listing, index / 2)
    }
}

struct Inner {
    http: reqwest::Client,
    base_url: String,
    token: String,
    requests: AtomicUsize,
}

/// Authenticated PandaScore client.
///
/// Cheap to clone; clones share the HTTP connection pool and the request counter. Every
/// request races the client's cancellation token and fails with
/// [`PandaError::Cancelled`] once it fires.
#[derive(Clone)]
pub struct PandaClient {
    inner: Arc<Inner>,
    cancel: CancellationToken,
}

impl PandaClient {
    /// Creates a new instance of [`PandaClient`]
    ///
    /// # Arguments
    /// - `base_url` - API root such as `https://api.pandascore.co`, a trailing slash is ignored
    /// - `token` - PandaScore access token sent as a bearer token
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, PandaError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(PandaError::Client)?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url,
                token: token.into(),
                requests: AtomicUsize::new(0),
            }),
            cancel: CancellationToken::new(),
        })
    }

    /// Returns a client for one sync cycle.
    ///
    /// Its token is a child of this client's token: cancelling the cycle leaves this client
    /// usable, cancelling this client cancels the cycle.
    pub fn cycle(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            cancel: self.cancel.child_token(),
        }
    }

    /// Cancels in-flight and future requests made through this client and its cycles.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Number of requests issued since the client was created, across all cycles.
    pub fn request_count(&self) -> usize {
        self.inner.requests.load(Ordering::Relaxed)
    }

    /// Fetches a single entity by its PandaScore ID.
    pub async fn fetch_one(&self, kind: EntityKind, id: i64) -> Result<PandaEntity, PandaError> {
        let url = format!("{}/{}/{}", self.inner.base_url, kind.path(), id);
        let body = self.get(&url, &[]).await?;

        kind.decode_one(&body)
            .map_err(|source| PandaError::Decode { url, source })
    }

    /// Fetches one page of a collection.
    ///
    /// `per_page` is always sent; `params` carries the caller's `sort`, `page` and filters.
    pub async fn fetch_page(
        &self,
        kind: EntityKind,
        params: &[(&str, String)],
    ) -> Result<Vec<PandaEntity>, PandaError> {
        let url = format!("{}/{}", self.inner.base_url, kind.path());
        let body = self.get(&url, params).await?;

        kind.decode_list(&body)
            .map_err(|source| PandaError::Decode { url, source })
    }

    /// Fetches one page of `matches/upcoming` or `matches/past`, most recently modified first.
    pub async fn fetch_match_page(
        &self,
        listing: MatchListing,
        page: usize,
    ) -> Result<Vec<Match>, PandaError> {
        let url = format!(
            "{}/{}/{}",
            self.inner.base_url,
            EntityKind::Match.path(),
            listing.path()
        );
        let params = [
            ("sort", SORT_BY_MODIFIED.to_string()),
            ("page", page.to_string()),
        ];
        let body = self.get(&url, &params).await?;

        serde_json::from_slice(&body).map_err(|source| PandaError::Decode { url, source })
    }

    async fn get(&self, url: &str, params: &[(&str, String)]) -> Result<Vec<u8>, PandaError> {
        if self.cancel.is_cancelled() {
            return Err(PandaError::Cancelled {
                url: url.to_string(),
            });
        }

        self.inner.requests.fetch_add(1, Ordering::Relaxed);

        let request = async {
            let response = self
                .inner
                .http
                .get(url)
                .bearer_auth(&self.inner.token)
                .header(ACCEPT, "application/json")
                .query(&[("per_page", PAGE_SIZE)])
                .query(params)
                .send()
                .await
                .map_err(|source| PandaError::Request {
                    url: url.to_string(),
                    source,
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(PandaError::Status {
                    url: url.to_string(),
                    status,
                });
            }

            let body = response
                .bytes()
                .await
                .map_err(|source| PandaError::Request {
                    url: url.to_string(),
                    source,
                })?;

            Ok(body.to_vec())
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(PandaError::Cancelled { url: url.to_string() }),
            result = request => result,
        }
    }
}
