//! Server-side HTML rendering for the storefront pages.
//!
//! Pages are plain `String`s built with `format!`; every piece of CMS text
//! goes through [`html_escape`] or [`html_attr`] before it is interpolated.
use once_cell::sync::Lazy;
use reqwest::Url;

use crate::catalog::ALL_CATEGORIES;
use crate::config::{Config, Home};
use crate::images::AssetResolver;
use crate::model::Category;

mod detail;
mod home;
mod listing;
pub mod style;

pub use detail::{detail_page, product_error_page, product_not_found_page};
pub use home::home_page;
pub use listing::{collection_page, products_page, Selection};

/// Everything the views need that does not come from the content API.
#[derive(Debug, Clone)]
pub struct Site {
    pub brand: String,
    pub currency: String,
    pub assets: AssetResolver,
    pub categories: Vec<Category>,
    pub home: Home,
}

impl Site {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            brand: cfg.app.brand.clone(),
            currency: cfg.app.currency.clone(),
            assets: AssetResolver::new(cfg.cms.asset_origin.clone()),
            categories: cfg.catalog.categories.clone(),
            home: cfg.home.clone(),
        }
    }

    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(key))
            .or_else(|| self.categories.iter().find(|c| c.name.eq_ignore_ascii_case(key)))
    }

    /// Value handed to the projector for a `category` query parameter.
    pub fn category_filter(&self, key: &str) -> String {
        if key.is_empty() || key.eq_ignore_ascii_case(ALL_CATEGORIES) {
            return ALL_CATEGORIES.to_string();
        }
        match self.category(key) {
            Some(c) => c.name.clone(),
            None => key.to_string(),
        }
    }

    pub fn price(&self, amount: f64) -> String {
        format!("{} {}", self.currency, format_amount(amount))
    }
}

/// Page metadata rendered into `<head>`.
#[derive(Debug, Clone, Default)]
pub struct Meta {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn html_attr(s: &str) -> String {
    html_escape(s).replace('"', "&quot;")
}

static QUERY_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("http://localhost/").expect("valid query base URL"));

/// Absolute path built from percent-encoded segments, e.g. `["products", slug]`.
pub fn path(segments: &[&str]) -> String {
    let mut url = QUERY_BASE.clone();
    if let Ok(mut parts) = url.path_segments_mut() {
        parts.clear().extend(segments);
    }
    url.path().to_string()
}

/// `path?k=v&...` with form encoding; empty pairs yield the bare path.
pub fn href(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let mut url = QUERY_BASE.clone();
    url.query_pairs_mut()
        .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
    format!("{}?{}", path, url.query().unwrap_or_default())
}

/// Thousands-separated amount with at most three fraction digits.
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && (int_part != "0" || !frac.is_empty()) { "-" } else { "" };
    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac)
    }
}

/// Wrap `body` in the shared document shell with the navigation bar.
pub fn layout(site: &Site, meta: &Meta, body: &str) -> String {
    let mut head = String::new();
    if let Some(desc) = &meta.description {
        head.push_str(&format!(
            "\n    <meta name=\"description\" content=\"{}\">",
            html_attr(desc)
        ));
        head.push_str(&format!(
            "\n    <meta property=\"og:description\" content=\"{}\">",
            html_attr(desc)
        ));
    }
    if let Some(img) = &meta.image {
        head.push_str(&format!(
            "\n    <meta property=\"og:image\" content=\"{}\">",
            html_attr(img)
        ));
    }

    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <meta property="og:title" content="{og_title}">{head}
    <link rel="stylesheet" href="/assets/style.css">
  </head>
  <body>
    <nav class="navbar">
      <a class="logo" href="/">{brand}</a>
      <div class="links">
        <a href="/">HOME</a>
        <a href="/products">PRODUCTS</a>
      </div>
    </nav>
    <main>
{body}
    </main>
  </body>
</html>"#,
        title = html_escape(&meta.title),
        og_title = html_attr(&meta.title),
        head = head,
        brand = html_escape(&site.brand),
        body = body,
    )
}

/// The 404 page for unknown routes.
pub fn not_found_page(site: &Site) -> String {
    let meta = Meta {
        title: format!("Page Not Found - {}", site.brand),
        description: Some("The page you're looking for doesn't exist.".into()),
        image: None,
    };
    let body = r#"      <section class="notice dark">
        <h1 class="huge">404</h1>
        <h2>Page Not Found</h2>
        <p class="muted">The page you're looking for doesn't exist.</p>
        <a class="button light" href="/">Return Home</a>
      </section>"#;
    layout(site, &meta, body)
}
