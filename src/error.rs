//! Errors surfaced to shoppers as pages.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::cms::FetchError;
use crate::render::{not_found_page, product_error_page, product_not_found_page, Site};

#[derive(Debug, Error)]
pub enum StoreError {
    /// The content API could not be reached or answered badly.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// A detail lookup by slug matched nothing.
    #[error("no product with slug '{0}'")]
    MissingProduct(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl StoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            StoreError::Fetch(_) => StatusCode::BAD_GATEWAY,
            StoreError::MissingProduct(_) | StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn page(&self, site: &Site) -> String {
        match self {
            StoreError::Fetch(_) => product_error_page(site),
            StoreError::MissingProduct(_) => product_not_found_page(site),
            StoreError::NotFound(_) => not_found_page(site),
        }
    }

    pub fn respond(&self, site: &Site) -> Response {
        (self.status(), Html(self.page(site))).into_response()
    }
}
