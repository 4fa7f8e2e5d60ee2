//! Page sources
//!
//! A page source answers one pagination request. The local source runs
//! the engine in-process; the HTTP source asks a running server.

use crate::error::{Error, Result};
use crate::pagination::{
    ErrorResponse, PageResponse, PagedResult, Paginator, PolicyKind, RawPaginationArgs,
};
use crate::store::Collection;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Something that can answer a pagination request
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch one page
    async fn fetch(&self, args: &RawPaginationArgs) -> Result<PagedResult>;
}

// ============================================================================
// Local Source
// ============================================================================

/// In-process source over a shared collection
#[derive(Debug)]
pub struct LocalSource {
    collection: Arc<Collection>,
    paginator: Paginator,
}

impl LocalSource {
    /// Create a local source
    pub fn new(collection: Arc<Collection>, policy: PolicyKind) -> Self {
        Self {
            collection,
            paginator: Paginator::for_kind(policy),
        }
    }
}

#[async_trait]
impl PageSource for LocalSource {
    async fn fetch(&self, args: &RawPaginationArgs) -> Result<PagedResult> {
        self.paginator.paginate(&self.collection, args)
    }
}

// ============================================================================
// HTTP Source
// ============================================================================

/// Configuration for the HTTP source
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("relay-pager/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Source that queries a running server endpoint
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    endpoint: Url,
}

impl HttpSource {
    /// Create a source for `base_url` + `path` with default settings
    pub fn new(base_url: &str, path: &str) -> Result<Self> {
        Self::with_config(base_url, path, HttpSourceConfig::default())
    }

    /// Create a source with explicit settings
    pub fn with_config(base_url: &str, path: &str, config: HttpSourceConfig) -> Result<Self> {
        let endpoint = Url::parse(base_url)?.join(path)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// Create a source for the endpoint serving a policy
    pub fn for_policy(base_url: &str, policy: PolicyKind) -> Result<Self> {
        Self::new(base_url, endpoint_path(policy))
    }

    /// Endpoint URL
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Server path that serves a policy
pub fn endpoint_path(policy: PolicyKind) -> &'static str {
    match policy {
        PolicyKind::Strict => "/api/projects",
        PolicyKind::BestEffort => "/api/projects-error",
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch(&self, args: &RawPaginationArgs) -> Result<PagedResult> {
        debug!("GET {} {:?}", self.endpoint, args.query_pairs());

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&args.query_pairs())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            let page: PageResponse = serde_json::from_str(&body)?;
            return Ok(page.data);
        }

        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.error)
            .unwrap_or(body);
        Err(Error::api(status.as_u16(), message))
    }
}
