use serde::Deserialize;

use crate::model::Image;

/// Product record exactly as the content API serializes it.
#[derive(Deserialize, Debug, Clone)]
pub struct RawProduct {
    pub id: i64,
    #[serde(rename = "productName", default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "Description", alias = "description", default)]
    pub description: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "Images", default)]
    pub images: Option<Vec<Image>>,
}

#[derive(Deserialize, Debug, Clone, Copy, Default)]
pub struct Pagination {
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "pageCount")]
    pub page_count: u32,
    pub total: u64,
}

#[derive(Deserialize, Debug, Default)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// `{ data: [...], meta: {...} }` envelope returned by collection queries.
#[derive(Deserialize, Debug)]
pub struct ListResponse {
    #[serde(default)]
    pub data: Vec<RawProduct>,
    #[serde(default)]
    pub meta: Meta,
}
