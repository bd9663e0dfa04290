use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use atelier::cms::{ContentSource, FetchError};
use atelier::config::{self, Config};
use atelier::model::{Image, Product};
use atelier::server::{router, AppState};

#[derive(Clone, Default)]
struct StubSource {
    products: Vec<Product>,
    fail: bool,
}

#[async_trait]
impl ContentSource for StubSource {
    async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        if self.fail {
            return Err(FetchError::Status { status: 500, body: "down".into() });
        }
        Ok(self.products.clone())
    }

    async fn list_products_where_contains(
        &self,
        _field: &str,
        value: &str,
    ) -> Result<Vec<Product>, FetchError> {
        let all = self.list_products().await?;
        Ok(all
            .into_iter()
            .filter(|p| p.slug.as_deref().map_or(false, |s| s.contains(value)))
            .collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, FetchError> {
        let all = self.list_products().await?;
        Ok(all.into_iter().find(|p| p.slug.as_deref() == Some(slug)))
    }
}

fn product(id: i64, name: &str, slug: &str, category: &str, price: f64, images: usize) -> Product {
    Product {
        id,
        name: Some(name.into()),
        slug: Some(slug.into()),
        price,
        category: Some(category.into()),
        description: Some(format!("{} description", name)),
        created_at: None,
        images: (0..images)
            .map(|i| Image::original(format!("/uploads/{}-{}.jpg", slug, i)))
            .collect(),
    }
}

fn app(source: StubSource) -> Router {
    let cfg: Config = serde_yaml::from_str(config::example()).unwrap();
    router(AppState::new(&cfg, Arc::new(source)), None)
}

fn catalog() -> StubSource {
    StubSource {
        products: vec![
            product(1, "Noor", "fx-noor", "formals", 45000.0, 3),
            product(2, "Zara", "sg-zara", "signature", 30000.0, 1),
        ],
        fail: false,
    }
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let res = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn home_page_lists_collections() {
    let (status, body) = get(app(catalog()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("href=\"/collection/fx\""));
}

#[tokio::test]
async fn listing_filters_by_category() {
    let (status, body) = get(app(catalog()), "/products?category=fx").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/products/fx-noor"));
    assert!(!body.contains("/products/sg-zara"));

    let (_, body) = get(app(catalog()), "/products").await;
    assert!(body.contains("/products/fx-noor"));
    assert!(body.contains("/products/sg-zara"));
}

#[tokio::test]
async fn listing_sorts_by_price() {
    let (_, body) = get(app(catalog()), "/products?sort=price-asc").await;
    let zara = body.find("/products/sg-zara").unwrap();
    let noor = body.find("/products/fx-noor").unwrap();
    assert!(zara < noor);
}

#[tokio::test]
async fn listing_failure_is_bad_gateway() {
    let source = StubSource { fail: true, ..Default::default() };
    let (status, body) = get(app(source), "/products").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("Try Again"));
}

#[tokio::test]
async fn collection_uses_contains_lookup() {
    let (status, body) = get(app(catalog()), "/collection/sg").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/products/sg-zara"));
    assert!(!body.contains("/products/fx-noor"));
}

#[tokio::test]
async fn detail_restores_gallery_cursor() {
    let (status, body) = get(app(catalog()), "/products/fx-noor?image=2&wishlist=true").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<span class=\"counter\">3 / 3</span>"));
    assert!(body.contains("&hearts; Wishlisted"));
    assert!(body.contains("<title>Noor - MARIA.B</title>"));
}

#[tokio::test]
async fn detail_ignores_malformed_cursor() {
    let (status, body) = get(app(catalog()), "/products/fx-noor?image=abc&thumbs=-1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<span class=\"counter\">1 / 3</span>"));
}

#[tokio::test]
async fn missing_product_is_not_found() {
    let (status, body) = get(app(catalog()), "/products/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Product not found"));
}

#[tokio::test]
async fn detail_fetch_failure_is_bad_gateway() {
    let source = StubSource { fail: true, ..Default::default() };
    let (status, body) = get(app(source), "/products/fx-noor").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("Error loading product"));
}

#[tokio::test]
async fn unknown_route_renders_404_page() {
    let (status, body) = get(app(catalog()), "/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page Not Found"));
}

#[tokio::test]
async fn stylesheet_and_health() {
    let res = app(catalog())
        .oneshot(Request::builder().uri("/assets/style.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "text/css; charset=utf-8");

    let (status, body) = get(app(catalog()), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}
