//! HTTP front end: routes, query parsing and handlers.

use std::path::Path;
use std::sync::Arc;

use axum::extract::{OriginalUri, Path as UrlPath, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{instrument, warn};

use crate::catalog::{SortKey, ALL_CATEGORIES};
use crate::cms::{ContentSource, LoadState};
use crate::config::Config;
use crate::error::StoreError;
use crate::gallery::GalleryCursor;
use crate::render::{self, style::DEFAULT_STYLE, Selection, Site};

/// Shared state for all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<Site>,
    pub source: Arc<dyn ContentSource>,
    /// Field the collection pages match with `$contains`.
    pub collection_field: Arc<str>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("site", &self.site.brand)
            .field("source", &"<ContentSource>")
            .field("collection_field", &self.collection_field)
            .finish()
    }
}

impl AppState {
    pub fn new(cfg: &Config, source: Arc<dyn ContentSource>) -> Self {
        Self {
            site: Arc::new(Site::from_config(cfg)),
            source,
            collection_field: Arc::from(cfg.cms.collection_field.as_str()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub category: Option<String>,
    pub sort: Option<String>,
}

impl ListingQuery {
    pub fn selection(&self) -> Selection {
        Selection {
            category: self
                .category
                .clone()
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| ALL_CATEGORIES.to_string()),
            sort: SortKey::parse(self.sort.as_deref().unwrap_or_default()),
        }
    }
}

/// Gallery cursor as carried in the detail page URL. Values are parsed
/// leniently; garbage falls back to the initial state.
#[derive(Debug, Default, Deserialize)]
pub struct GalleryQuery {
    pub image: Option<String>,
    pub thumbs: Option<String>,
    pub wishlist: Option<String>,
}

impl GalleryQuery {
    pub fn cursor(&self) -> GalleryCursor {
        let index = |v: &Option<String>| v.as_deref().and_then(|s| s.trim().parse().ok()).unwrap_or(0);
        GalleryCursor {
            current_index: index(&self.image),
            thumbnail_start: index(&self.thumbs),
            wishlisted: matches!(self.wishlist.as_deref(), Some("true" | "1" | "on")),
        }
    }
}

/// Build the storefront router. Files under `public_dir` are served at `/static`.
pub fn router(state: AppState, public_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/", get(home))
        .route("/products", get(products))
        .route("/products/:slug", get(product_detail))
        .route("/collection/:category", get(collection))
        .route("/assets/style.css", get(stylesheet))
        .route("/healthz", get(|| async { "ok" }));

    let router = match public_dir {
        Some(dir) => router.nest_service("/static", ServeDir::new(dir)),
        None => router,
    };

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home(State(state): State<AppState>) -> Html<String> {
    Html(render::home_page(&state.site))
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], DEFAULT_STYLE)
}

#[instrument(skip(state))]
async fn products(State(state): State<AppState>, Query(q): Query<ListingQuery>) -> Response {
    let load: LoadState<_> = state.source.list_products().await.into();
    listing_response(&load, render::products_page(&state.site, &load, &q.selection()))
}

#[instrument(skip(state))]
async fn collection(
    State(state): State<AppState>,
    UrlPath(category): UrlPath<String>,
    Query(q): Query<ListingQuery>,
) -> Response {
    let load: LoadState<_> = state
        .source
        .list_products_where_contains(&state.collection_field, &category)
        .await
        .into();
    let sort = SortKey::parse(q.sort.as_deref().unwrap_or_default());
    listing_response(&load, render::collection_page(&state.site, &category, &load, sort))
}

fn listing_response<T>(load: &LoadState<T>, html: String) -> Response {
    let status = match load {
        LoadState::Failed(msg) => {
            warn!(error = %msg, "product list unavailable");
            StatusCode::BAD_GATEWAY
        }
        _ => StatusCode::OK,
    };
    (status, Html(html)).into_response()
}

#[instrument(skip(state))]
async fn product_detail(
    State(state): State<AppState>,
    UrlPath(slug): UrlPath<String>,
    Query(q): Query<GalleryQuery>,
) -> Response {
    match state.source.find_by_slug(&slug).await {
        Ok(Some(product)) => Html(render::detail_page(&state.site, &product, q.cursor())).into_response(),
        Ok(None) => StoreError::MissingProduct(slug).respond(&state.site),
        Err(err) => {
            warn!(?err, "product lookup failed");
            StoreError::from(err).respond(&state.site)
        }
    }
}

async fn not_found(State(state): State<AppState>, uri: OriginalUri) -> Response {
    StoreError::NotFound(uri.0.path().to_string()).respond(&state.site)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_query_defaults() {
        let sel = ListingQuery::default().selection();
        assert_eq!(sel.category, "all");
        assert_eq!(sel.sort, SortKey::DateDesc);

        let q = ListingQuery { category: Some("  ".into()), sort: Some("name-asc".into()) };
        let sel = q.selection();
        assert_eq!(sel.category, "all");
        assert_eq!(sel.sort, SortKey::NameAsc);
    }

    #[test]
    fn gallery_query_is_lenient() {
        let q = GalleryQuery {
            image: Some("3".into()),
            thumbs: Some("oops".into()),
            wishlist: Some("1".into()),
        };
        assert_eq!(
            q.cursor(),
            GalleryCursor { current_index: 3, thumbnail_start: 0, wishlisted: true }
        );
        assert_eq!(GalleryQuery::default().cursor(), GalleryCursor::default());
    }
}
