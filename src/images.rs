//! Image URL resolution against the asset origin.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Image, ImageSize, Product};

static ABSOLUTE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i)https?://").expect("valid absolute URL regex"));

/// Which card image to show in the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridVariant {
    Primary,
    Hover,
}

/// Turns CMS asset paths into absolute URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    origin: String,
}

impl AssetResolver {
    pub fn new(origin: impl Into<String>) -> Self {
        let origin: String = origin.into();
        Self {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Absolute URLs pass through; anything else is appended to the origin.
    pub fn absolutize(&self, url: &str) -> String {
        if ABSOLUTE_URL.is_match(url) {
            url.to_string()
        } else if url.starts_with('/') {
            format!("{}{}", self.origin, url)
        } else {
            format!("{}/{}", self.origin, url)
        }
    }

    /// Resolve `image` at `size`, falling back through a fixed preference
    /// order that always ends at the original upload.
    pub fn resolve_url(&self, image: Option<&Image>, size: ImageSize) -> Option<String> {
        let image = image?;
        preference(size)
            .iter()
            .find_map(|s| image.variant(*s))
            .or_else(|| image.original_url())
            .map(|u| self.absolutize(u))
    }

    /// Card image for the product grid: `Hover` uses the second image when
    /// there is one. Only the large rendition or the original is considered.
    pub fn grid_image_url(&self, product: &Product, variant: GridVariant) -> Option<String> {
        let index = match variant {
            GridVariant::Hover if product.images.len() > 1 => 1,
            _ => 0,
        };
        let image = product.images.get(index)?;
        image
            .variant(ImageSize::Large)
            .or_else(|| image.original_url())
            .map(|u| self.absolutize(u))
    }

    /// Hover image for a card, or `None` when it would show the same picture.
    pub fn distinct_hover_url(&self, product: &Product) -> Option<String> {
        let primary = self.grid_image_url(product, GridVariant::Primary);
        let hover = self.grid_image_url(product, GridVariant::Hover)?;
        (primary.as_deref() != Some(hover.as_str())).then_some(hover)
    }
}

fn preference(size: ImageSize) -> &'static [ImageSize] {
    match size {
        ImageSize::Medium => &[ImageSize::Medium, ImageSize::Large],
        ImageSize::Large => &[ImageSize::Large, ImageSize::Medium],
        ImageSize::Small => &[ImageSize::Small, ImageSize::Medium],
    }
}
