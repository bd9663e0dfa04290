use async_trait::async_trait;
use reqwest::{Client, Url};
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::normalize;
use crate::config::Config;
use crate::model::Product;

pub mod model;

use model::{ListResponse, RawProduct};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach content API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("content API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid content API response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid content API URL: {0}")]
    InvalidUrl(String),
}

/// Read-only access to the product catalog.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Every product, all pages concatenated in API order.
    async fn list_products(&self) -> Result<Vec<Product>, FetchError>;

    /// Products whose `field` contains `value` (server-side `$contains`).
    async fn list_products_where_contains(
        &self,
        field: &str,
        value: &str,
    ) -> Result<Vec<Product>, FetchError>;

    /// The product with the given slug; `Ok(None)` when nothing matches.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, FetchError>;
}

/// Tri-state signal rendered by the listing views.
///
/// The HTTP handlers await the fetch before rendering, so they only ever
/// produce `Ready` or `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Only for callers that render a page before the fetch has finished,
    /// e.g. a shell streamed ahead of the catalog.
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> From<Result<T, FetchError>> for LoadState<T> {
    fn from(res: Result<T, FetchError>) -> Self {
        match res {
            Ok(v) => LoadState::Ready(v),
            Err(err) => LoadState::Failed(err.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct CmsClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
    page_size: u32,
}

impl fmt::Debug for CmsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CmsClient")
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl CmsClient {
    pub fn new(
        mut base_url: Url,
        token: Option<String>,
        page_size: u32,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        // `Url::join` drops the last segment unless the path ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http = Client::builder()
            .user_agent(concat!("atelier/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url,
            token,
            page_size: page_size.max(1),
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self, FetchError> {
        let base_url = Url::parse(&cfg.cms.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", cfg.cms.base_url, e)))?;
        Self::new(
            base_url,
            cfg.cms.token.clone(),
            cfg.cms.page_size,
            Duration::from_secs(cfg.cms.timeout_secs),
        )
    }

    /// `products?filters[..]=..&populate=Images&pagination[..]=..`
    pub fn products_url(&self, filter: Option<(&str, &str, &str)>, page: u32) -> Result<Url, FetchError> {
        let mut url = self
            .base_url
            .join("products")
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        {
            let mut q = url.query_pairs_mut();
            if let Some((field, op, value)) = filter {
                q.append_pair(&format!("filters[{}][{}]", field, op), value);
            }
            q.append_pair("populate", "Images");
            q.append_pair("pagination[page]", &page.to_string());
            q.append_pair("pagination[pageSize]", &self.page_size.to_string());
        }
        Ok(url)
    }

    async fn get_page(&self, url: Url) -> Result<ListResponse, FetchError> {
        debug!(url = %url, "fetching products");
        let mut req = self.http.get(url.clone());
        if let Some(token) = self.token.as_deref() {
            req = req.bearer_auth(token);
        }
        let res = req.send().await?;
        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            warn!(status, url = %url, "content API error");
            return Err(FetchError::Status { status, body });
        }
        let body = res.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Walk `meta.pagination` until every page has been read. One request at a time.
    async fn fetch_all(&self, filter: Option<(&str, &str, &str)>) -> Result<Vec<RawProduct>, FetchError> {
        let mut page = 1;
        let mut out = Vec::new();
        loop {
            let url = self.products_url(filter, page)?;
            let resp = self.get_page(url).await?;
            out.extend(resp.data);
            let page_count = resp.meta.pagination.map(|p| p.page_count).unwrap_or(1);
            if page >= page_count {
                break;
            }
            page += 1;
        }
        debug!(count = out.len(), pages = page, "fetched products");
        Ok(out)
    }
}

#[async_trait]
impl ContentSource for CmsClient {
    async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        let raw = self.fetch_all(None).await?;
        Ok(raw.into_iter().map(normalize).collect())
    }

    async fn list_products_where_contains(
        &self,
        field: &str,
        value: &str,
    ) -> Result<Vec<Product>, FetchError> {
        let raw = self.fetch_all(Some((field, "$contains", value))).await?;
        Ok(raw.into_iter().map(normalize).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, FetchError> {
        let url = self.products_url(Some(("slug", "$eq", slug)), 1)?;
        let resp = self.get_page(url).await?;
        Ok(resp.data.into_iter().next().map(normalize))
    }
}
