//! Catalog projection: normalization of content API records and the
//! filter/sort pipeline behind the listing pages.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::cms::model::RawProduct;
use crate::model::Product;

/// Category sentinel meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
    DateAsc,
    #[default]
    DateDesc,
}

impl SortKey {
    /// Menu order.
    pub const ALL: [SortKey; 6] = [
        SortKey::DateDesc,
        SortKey::DateAsc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::NameAsc,
        SortKey::NameDesc,
    ];

    /// Total parse: anything unrecognized sorts newest first.
    pub fn parse(s: &str) -> SortKey {
        match s {
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            "name-asc" => SortKey::NameAsc,
            "name-desc" => SortKey::NameDesc,
            "date-asc" => SortKey::DateAsc,
            _ => SortKey::DateDesc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::DateAsc => "date-asc",
            SortKey::DateDesc => "date-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "Date, new to old",
            SortKey::DateAsc => "Date, old to new",
            SortKey::PriceAsc => "Price, low to high",
            SortKey::PriceDesc => "Price, high to low",
            SortKey::NameAsc => "Name, A to Z",
            SortKey::NameDesc => "Name, Z to A",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::PriceAsc => a.price.total_cmp(&b.price),
            SortKey::PriceDesc => b.price.total_cmp(&a.price),
            SortKey::NameAsc => collate(a.display_name(), b.display_name()),
            SortKey::NameDesc => collate(b.display_name(), a.display_name()),
            SortKey::DateAsc => a.created_at.cmp(&b.created_at),
            SortKey::DateDesc => b.created_at.cmp(&a.created_at),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a content API record onto the internal product shape.
pub fn normalize(raw: RawProduct) -> Product {
    Product {
        id: raw.id,
        name: raw.product_name,
        slug: raw.slug,
        price: raw.price,
        category: raw.category,
        description: raw.description,
        created_at: raw.created_at.as_deref().and_then(parse_timestamp),
        images: raw.images.unwrap_or_default(),
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Filter `source` by category and stable-sort it by `sort`.
///
/// `category` is compared case-insensitively; [`ALL_CATEGORIES`] keeps
/// everything and products without a category never match a specific one.
/// The input is left untouched and ties keep their input order.
pub fn project<'a>(source: &'a [Product], category: &str, sort: SortKey) -> Vec<&'a Product> {
    let mut view: Vec<&Product> = if category == ALL_CATEGORIES {
        source.iter().collect()
    } else {
        let wanted = category.to_lowercase();
        source
            .iter()
            .filter(|p| {
                p.category
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase() == wanted)
            })
            .collect()
    };
    // `sort_by` is stable.
    view.sort_by(|a, b| sort.compare(a, b));
    view
}

/// Dictionary-style ordering for display names.
///
/// Letters compare by their base form first (case and accents ignored), so
/// "Émile" sits between "anna" and "Zara". Remaining ties go unaccented
/// before accented, then lowercase before uppercase, then raw order.
pub fn collate(a: &str, b: &str) -> Ordering {
    let base = |s: &str| {
        s.nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect::<Vec<_>>()
    };
    let accented = |s: &str| s.nfd().flat_map(char::to_lowercase).collect::<Vec<_>>();
    base(a)
        .cmp(&base(b))
        .then_with(|| accented(a).cmp(&accented(b)))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Two products per row.
pub fn mobile_rows<T>(items: &[T]) -> Vec<&[T]> {
    items.chunks(2).collect()
}

/// Rows alternate between three and two products.
pub fn desktop_rows<T>(items: &[T]) -> Vec<&[T]> {
    let mut rows = Vec::new();
    let mut start = 0;
    while start < items.len() {
        let width = if rows.len() % 2 == 0 { 3 } else { 2 };
        let end = (start + width).min(items.len());
        rows.push(&items[start..end]);
        start = end;
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, price: f64, category: Option<&str>, created: &str) -> Product {
        Product {
            id,
            name: Some(name.into()),
            slug: Some(format!("p-{}", id)),
            price,
            category: category.map(Into::into),
            description: None,
            created_at: parse_timestamp(created),
            images: vec![],
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Zarina", 500.0, Some("formals"), "2024-03-01T00:00:00Z"),
            product(2, "amal", 100.0, Some("Signature"), "2024-01-01T00:00:00Z"),
            product(3, "Bano", 300.0, None, "2024-02-01T00:00:00Z"),
            product(4, "Cyra", 100.0, Some("FORMALS"), "2024-04-01T00:00:00Z"),
        ]
    }

    fn ids(view: &[&Product]) -> Vec<i64> {
        view.iter().map(|p| p.id).collect()
    }

    #[test]
    fn all_keeps_everything() {
        let src = sample();
        assert_eq!(project(&src, ALL_CATEGORIES, SortKey::DateAsc).len(), 4);
    }

    #[test]
    fn category_filter_is_case_insensitive_and_skips_missing() {
        let src = sample();
        let view = project(&src, "Formals", SortKey::DateAsc);
        assert_eq!(ids(&view), vec![1, 4]);
        let view = project(&src, "signature", SortKey::DateAsc);
        assert_eq!(ids(&view), vec![2]);
        assert!(project(&src, "bridal", SortKey::DateAsc).is_empty());
    }

    #[test]
    fn price_ascending() {
        let src = vec![
            product(1, "a", 500.0, None, "2024-01-01T00:00:00Z"),
            product(2, "b", 100.0, None, "2024-01-01T00:00:00Z"),
            product(3, "c", 300.0, None, "2024-01-01T00:00:00Z"),
        ];
        let prices: Vec<f64> = project(&src, ALL_CATEGORIES, SortKey::PriceAsc)
            .iter()
            .map(|p| p.price)
            .collect();
        assert_eq!(prices, vec![100.0, 300.0, 500.0]);
    }

    #[test]
    fn ties_keep_input_order() {
        let src = sample();
        // ids 2 and 4 share price 100
        assert_eq!(ids(&project(&src, ALL_CATEGORIES, SortKey::PriceAsc)), vec![2, 4, 3, 1]);
        assert_eq!(ids(&project(&src, ALL_CATEGORIES, SortKey::PriceDesc)), vec![1, 3, 2, 4]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let src = sample();
        assert_eq!(ids(&project(&src, ALL_CATEGORIES, SortKey::NameAsc)), vec![2, 3, 4, 1]);
        assert_eq!(ids(&project(&src, ALL_CATEGORIES, SortKey::NameDesc)), vec![1, 4, 3, 2]);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        assert_eq!(collate("Émile", "Zara"), Ordering::Less);
        assert_eq!(collate("anna", "Émile"), Ordering::Less);
        assert_eq!(collate("e", "é"), Ordering::Less);
        assert_eq!(collate("Zoë", "Zoe"), Ordering::Greater);

        let src = vec![
            product(1, "Zara", 1.0, None, "2024-01-01T00:00:00Z"),
            product(2, "Émile", 1.0, None, "2024-01-01T00:00:00Z"),
            product(3, "anna", 1.0, None, "2024-01-01T00:00:00Z"),
            product(4, "Ödön", 1.0, None, "2024-01-01T00:00:00Z"),
        ];
        assert_eq!(ids(&project(&src, ALL_CATEGORIES, SortKey::NameAsc)), vec![3, 2, 4, 1]);
    }

    #[test]
    fn date_sorts() {
        let src = sample();
        assert_eq!(ids(&project(&src, ALL_CATEGORIES, SortKey::DateAsc)), vec![2, 3, 1, 4]);
        assert_eq!(ids(&project(&src, ALL_CATEGORIES, SortKey::DateDesc)), vec![4, 1, 3, 2]);
    }

    #[test]
    fn unknown_sort_key_is_newest_first() {
        assert_eq!(SortKey::parse("bogus"), SortKey::DateDesc);
        assert_eq!(SortKey::parse(""), SortKey::DateDesc);
        let src = sample();
        assert_eq!(
            project(&src, ALL_CATEGORIES, SortKey::parse("bogus")),
            project(&src, ALL_CATEGORIES, SortKey::DateDesc)
        );
    }

    #[test]
    fn sort_keys_round_trip_through_strings() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), key);
        }
    }

    #[test]
    fn projection_is_pure() {
        let src = sample();
        let before = src.clone();
        let first: Vec<Product> = project(&src, "formals", SortKey::PriceDesc).into_iter().cloned().collect();
        let second: Vec<Product> = project(&src, "formals", SortKey::PriceDesc).into_iter().cloned().collect();
        assert_eq!(src, before);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_source_yields_empty_view() {
        assert!(project(&[], ALL_CATEGORIES, SortKey::DateDesc).is_empty());
    }

    #[test]
    fn normalize_maps_fields_and_keeps_absent_ones_absent() {
        let raw: RawProduct = serde_json::from_value(serde_json::json!({
            "id": 7,
            "productName": "Noor",
            "slug": "noor",
            "price": 12500,
            "createdAt": "2024-05-06T07:08:09.000Z",
            "Images": [{ "url": "/uploads/noor.jpg" }]
        }))
        .unwrap();
        let p = normalize(raw);
        assert_eq!(p.id, 7);
        assert_eq!(p.name.as_deref(), Some("Noor"));
        assert_eq!(p.price, 12500.0);
        assert!(p.category.is_none());
        assert!(p.description.is_none());
        assert_eq!(p.created_at.map(|d| d.timestamp()), Some(1714979289));
        assert_eq!(p.images.len(), 1);
    }

    #[test]
    fn normalize_tolerates_bad_timestamp_and_missing_images() {
        let raw: RawProduct = serde_json::from_value(serde_json::json!({
            "id": 8, "price": 1, "createdAt": "yesterday", "description": "soft"
        }))
        .unwrap();
        let p = normalize(raw);
        assert!(p.created_at.is_none());
        assert!(p.images.is_empty());
        assert_eq!(p.description.as_deref(), Some("soft"));
    }

    #[test]
    fn collate_orders_lowercase_first() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("Same", "Same"), Ordering::Equal);
    }

    #[test]
    fn grid_rows() {
        let items: Vec<u8> = (0..8).collect();
        let desktop: Vec<usize> = desktop_rows(&items).iter().map(|r| r.len()).collect();
        assert_eq!(desktop, vec![3, 2, 3]);
        let mobile: Vec<usize> = mobile_rows(&items[..5]).iter().map(|r| r.len()).collect();
        assert_eq!(mobile, vec![2, 2, 1]);
        assert!(desktop_rows::<u8>(&[]).is_empty());
    }
}
