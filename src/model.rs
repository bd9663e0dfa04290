use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single pre-rendered rendition of an image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ImageFormat {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ImageFormats {
    #[serde(default)]
    pub large: Option<ImageFormat>,
    #[serde(default)]
    pub medium: Option<ImageFormat>,
    #[serde(default)]
    pub small: Option<ImageFormat>,
}

/// A remotely hosted asset plus whatever resized variants the CMS generated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Image {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub formats: Option<ImageFormats>,
}

impl Image {
    pub fn original(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            formats: None,
        }
    }

    /// URL of the requested variant, if the CMS produced one.
    pub fn variant(&self, size: ImageSize) -> Option<&str> {
        let formats = self.formats.as_ref()?;
        let format = match size {
            ImageSize::Large => formats.large.as_ref(),
            ImageSize::Medium => formats.medium.as_ref(),
            ImageSize::Small => formats.small.as_ref(),
        }?;
        format.url.as_deref().filter(|u| !u.is_empty())
    }

    pub fn original_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Large,
    Medium,
    Small,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Large => "large",
            ImageSize::Medium => "medium",
            ImageSize::Small => "small",
        }
    }
}

/// Read-only snapshot of a catalog entry as served by the content API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub images: Vec<Image>,
}

impl Product {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// A browsable category as configured for the storefront menus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Short key used in URLs, e.g. `fx`.
    pub id: String,
    /// Value compared against `Product::category`.
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub blurb: Option<String>,
    #[serde(default)]
    pub tile_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_ignores_empty_urls() {
        let image = Image {
            url: Some("/uploads/a.jpg".into()),
            formats: Some(ImageFormats {
                large: Some(ImageFormat { url: Some(String::new()) }),
                medium: Some(ImageFormat { url: Some("/uploads/medium_a.jpg".into()) }),
                small: None,
            }),
        };
        assert_eq!(image.variant(ImageSize::Large), None);
        assert_eq!(image.variant(ImageSize::Medium), Some("/uploads/medium_a.jpg"));
        assert_eq!(image.variant(ImageSize::Small), None);
    }

    #[test]
    fn image_deserializes_cms_shape() {
        let image: Image = serde_json::from_value(serde_json::json!({
            "url": "/uploads/a.jpg",
            "formats": { "small": { "url": "/uploads/small_a.jpg", "width": 300 } }
        }))
        .unwrap();
        assert_eq!(image.original_url(), Some("/uploads/a.jpg"));
        assert_eq!(image.variant(ImageSize::Small), Some("/uploads/small_a.jpg"));
    }
}
