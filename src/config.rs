//! Configuration loader and validator for the storefront.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::model::Category;

/// Environment variable that overrides `cms.token` when set.
pub const TOKEN_ENV: &str = "ATELIER_CMS_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Root configuration struct mirroring the YAML schema exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub app: App,
    pub cms: Cms,
    pub catalog: Catalog,
    pub home: Home,
}

/// App-level settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct App {
    pub bind_addr: String,
    pub public_dir: String,
    pub out_dir: String,
    pub brand: String,
    pub currency: String,
}

/// Headless content API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cms {
    /// API root, e.g. `https://cms.example.com/api/`.
    pub base_url: String,
    /// Origin prepended to relative asset URLs.
    pub asset_origin: String,
    #[serde(default)]
    pub token: Option<String>,
    /// Field matched with `$contains` by the collection pages.
    pub collection_field: String,
    pub page_size: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

/// Static copy shown on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Home {
    pub banner_image: String,
    pub blurb: String,
    #[serde(default)]
    pub contact: Vec<String>,
    /// Optional bridal feature block between the collections and contact.
    #[serde(default)]
    pub weddings: Option<Weddings>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Weddings {
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Config {
    /// Apply environment overrides (currently only the CMS token).
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            if !token.trim().is_empty() {
                self.cms.token = Some(token);
            }
        }
    }
}

/// Load configuration from a YAML file and validate it.
/// - If `path` is None, uses `config.yaml` in the current working directory.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or_else(|| Path::new("config.yaml"));
    let content = fs::read_to_string(path)?;
    let mut cfg: Config = serde_yaml::from_str(&content)?;
    cfg.apply_env();
    validate(&cfg)?;
    Ok(cfg)
}

/// Validate a configuration instance.
pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.app.bind_addr.trim().is_empty() {
        return Err(ConfigError::Invalid("app.bind_addr must be non-empty"));
    }
    if cfg.app.brand.trim().is_empty() {
        return Err(ConfigError::Invalid("app.brand must be non-empty"));
    }

    if reqwest::Url::parse(&cfg.cms.base_url).is_err() {
        return Err(ConfigError::Invalid("cms.base_url must be an absolute URL"));
    }
    if reqwest::Url::parse(&cfg.cms.asset_origin).is_err() {
        return Err(ConfigError::Invalid("cms.asset_origin must be an absolute URL"));
    }
    if cfg.cms.collection_field.trim().is_empty() {
        return Err(ConfigError::Invalid("cms.collection_field must be non-empty"));
    }
    if cfg.cms.page_size == 0 {
        return Err(ConfigError::Invalid("cms.page_size must be > 0"));
    }
    if cfg.cms.timeout_secs == 0 {
        return Err(ConfigError::Invalid("cms.timeout_secs must be > 0"));
    }

    for cat in &cfg.catalog.categories {
        if cat.id.trim().is_empty() {
            return Err(ConfigError::Invalid("catalog.categories[].id must be non-empty"));
        }
        if cat.name.trim().is_empty() {
            return Err(ConfigError::Invalid("catalog.categories[].name must be non-empty"));
        }
        if cat.id.eq_ignore_ascii_case(crate::catalog::ALL_CATEGORIES) {
            return Err(ConfigError::Invalid("catalog.categories[].id must not be \"all\""));
        }
    }

    Ok(())
}

/// Returns a complete example configuration.
pub fn example() -> &'static str {
    r#"app:
  bind_addr: "127.0.0.1:3000"
  public_dir: "./public"
  out_dir: "./dist"
  brand: "MARIA.B"
  currency: "Rs."

cms:
  base_url: "https://graceful-surprise-a16adfb07c.strapiapp.com/api/"
  asset_origin: "https://graceful-surprise-a16adfb07c.strapiapp.com"
  collection_field: "prod_id"
  page_size: 100
  timeout_secs: 10

catalog:
  categories:
    - id: "fx"
      name: "formals"
      label: "Formals"
      blurb: "Step into a realm where dreams are stitched into reality with the Formal Collection."
      tile_image: "/static/formal_tile.webp"
    - id: "sg"
      name: "signature"
      label: "Signature"
      blurb: "Radiating a blend of sophistication and heritage, the Signature Collection narrates a saga of timeless elegance."
      tile_image: "/static/signature_tile.webp"

home:
  banner_image: "/static/banner.webp"
  blurb: "Transforming rhythmic designs into timeless creations with artistic compositions glistened with delicate details."
  contact:
    - "WHATSAPP: +92 332 4122262"
    - "EMAIL: ORDERS@MARIAB.PK"
  weddings:
    title: "MARIA.B INSPIRED WEDDINGS"
    text: "From flowy gown sets to lehenga sets for the mehndi, baraat & walima, the possibilities of a Maria-inspired wedding are countless."
    images:
      - "/static/weddings_gown.webp"
      - "/static/weddings_bride.webp"
"#
}
