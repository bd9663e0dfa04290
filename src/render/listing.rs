use crate::catalog::{desktop_rows, mobile_rows, project, SortKey, ALL_CATEGORIES};
use crate::cms::LoadState;
use crate::images::GridVariant;
use crate::model::Product;

use super::{href, html_attr, html_escape, layout, path, Meta, Site};

/// Listing-page state carried in the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Raw `category` parameter: a category id, a category name, or `all`.
    pub category: String,
    pub sort: SortKey,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            sort: SortKey::default(),
        }
    }
}

impl Selection {
    pub fn is_filtered(&self) -> bool {
        !(self.category.is_empty() || self.category.eq_ignore_ascii_case(ALL_CATEGORIES))
    }

    fn link(&self, category: &str, sort: SortKey) -> String {
        let mut pairs = Vec::new();
        if !category.eq_ignore_ascii_case(ALL_CATEGORIES) {
            pairs.push(("category", category.to_string()));
        }
        if sort != SortKey::default() {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        href("/products", &pairs)
    }
}

/// `/products`: filter and sort menus over the whole catalog.
pub fn products_page(site: &Site, state: &LoadState<Vec<Product>>, sel: &Selection) -> String {
    let meta = Meta {
        title: format!("Products - {}", site.brand),
        description: Some(format!("Premium fashion collection by {}", site.brand)),
        image: None,
    };
    let body = match state {
        LoadState::Loading => loading_block(),
        LoadState::Failed(msg) => error_block(msg, &sel.link(&sel.category, sel.sort)),
        LoadState::Ready(products) => {
            let filter = site.category_filter(&sel.category);
            let view = project(products, &filter, sel.sort);
            let mut out = filter_bar(site, sel);
            out.push_str(&product_grid(site, &view, "No products to display", None));
            out
        }
    };
    layout(site, &meta, &body)
}

/// `/collection/<category>`: products the CMS matched for the collection.
pub fn collection_page(
    site: &Site,
    category_key: &str,
    state: &LoadState<Vec<Product>>,
    sort: SortKey,
) -> String {
    let label = site
        .category(category_key)
        .map(|c| c.label.clone())
        .unwrap_or_else(|| category_key.to_string());
    let meta = Meta {
        title: format!("{} - {}", label, site.brand),
        description: Some(format!("{} collection by {}", label, site.brand)),
        image: None,
    };
    let self_link = |s: SortKey| {
        let base = path(&["collection", category_key]);
        if s == SortKey::default() {
            href(&base, &[])
        } else {
            href(&base, &[("sort", s.as_str().to_string())])
        }
    };
    let body = match state {
        LoadState::Loading => loading_block(),
        LoadState::Failed(msg) => error_block(msg, &self_link(sort)),
        LoadState::Ready(products) => {
            let view = project(products, ALL_CATEGORIES, sort);
            let mut out = format!(
                "      <section class=\"filters\">\n        <h1>{}</h1>\n{}      </section>\n",
                html_escape(&label),
                sort_menu(sort, self_link)
            );
            out.push_str(&product_grid(
                site,
                &view,
                "No products found",
                Some("Try browsing other categories"),
            ));
            out
        }
    };
    layout(site, &meta, &body)
}

fn loading_block() -> String {
    r#"      <section class="notice">
        <div class="spinner"></div>
        <p class="muted">Loading products...</p>
      </section>"#
        .to_string()
}

fn error_block(msg: &str, retry: &str) -> String {
    format!(
        r#"      <section class="notice">
        <p class="error">Error: {}</p>
        <a class="button" href="{}">Try Again</a>
      </section>"#,
        html_escape(msg),
        html_attr(retry)
    )
}

fn filter_bar(site: &Site, sel: &Selection) -> String {
    let mut out = String::from("      <section class=\"filters\">\n");
    out.push_str("        <details class=\"menu\"><summary>Filter</summary><div class=\"menu-items\">\n");
    out.push_str("          <div class=\"menu-heading\">Categories</div>\n");
    out.push_str(&format!(
        "          <a class=\"{}\" href=\"{}\">All Categories</a>\n",
        if sel.is_filtered() { "" } else { "active" },
        html_attr(&sel.link(ALL_CATEGORIES, sel.sort))
    ));
    let selected = site.category(&sel.category).map(|c| c.id.as_str());
    for cat in &site.categories {
        out.push_str(&format!(
            "          <a class=\"{}\" href=\"{}\">{}</a>\n",
            if selected == Some(cat.id.as_str()) { "active" } else { "" },
            html_attr(&sel.link(&cat.id, sel.sort)),
            html_escape(&cat.label)
        ));
    }
    out.push_str("        </div></details>\n");
    out.push_str(&sort_menu(sel.sort, |s| sel.link(&sel.category, s)));

    if sel.is_filtered() {
        let label = site
            .category(&sel.category)
            .map(|c| c.label.clone())
            .unwrap_or_else(|| sel.category.clone());
        out.push_str(&format!(
            "        <div class=\"active-filters\"><span class=\"muted\">Active filters:</span><span class=\"chip\">{}<a href=\"{}\" aria-label=\"Clear filter\">&times;</a></span></div>\n",
            html_escape(&label),
            html_attr(&sel.link(ALL_CATEGORIES, sel.sort))
        ));
    }
    out.push_str("      </section>\n");
    out
}

fn sort_menu(current: SortKey, link: impl Fn(SortKey) -> String) -> String {
    let mut out = format!(
        "        <details class=\"menu right\"><summary>{}</summary><div class=\"menu-items\">\n",
        html_escape(current.label())
    );
    for key in SortKey::ALL {
        out.push_str(&format!(
            "          <a class=\"{}\" href=\"{}\">{}</a>\n",
            if key == current { "active" } else { "" },
            html_attr(&link(key)),
            html_escape(key.label())
        ));
    }
    out.push_str("        </div></details>\n");
    out
}

fn product_grid(site: &Site, view: &[&Product], empty: &str, hint: Option<&str>) -> String {
    if view.is_empty() {
        let hint = hint
            .map(|h| format!("\n        <p class=\"muted\">{}</p>", html_escape(h)))
            .unwrap_or_default();
        return format!(
            "      <section class=\"notice\">\n        <p class=\"empty\">{}</p>{}\n      </section>\n",
            html_escape(empty),
            hint
        );
    }

    let mut out = String::from("      <section class=\"grid mobile\">\n");
    for (row_index, row) in mobile_rows(view).into_iter().enumerate() {
        out.push_str("        <div class=\"row cols-2\">\n");
        for product in row {
            out.push_str(&product_card(site, product, row_index < 2, false));
        }
        out.push_str("        </div>\n");
    }
    out.push_str("      </section>\n      <section class=\"grid desktop\">\n");
    for (row_index, row) in desktop_rows(view).into_iter().enumerate() {
        let class = if row_index % 2 == 0 { "cols-3" } else { "cols-2 narrow" };
        out.push_str(&format!("        <div class=\"row {}\">\n", class));
        for product in row {
            out.push_str(&product_card(site, product, row_index < 2, true));
        }
        out.push_str("        </div>\n");
    }
    out.push_str("      </section>\n");
    out
}

fn product_card(site: &Site, product: &Product, eager: bool, with_hover: bool) -> String {
    let name = product.display_name();
    let link = match product.slug.as_deref() {
        Some(slug) => path(&["products", slug]),
        None => "/products".to_string(),
    };
    let loading = if eager { "eager" } else { "lazy" };
    let media = match site.assets.grid_image_url(product, GridVariant::Primary) {
        Some(primary) => {
            let hover = if with_hover {
                site.assets
                    .distinct_hover_url(product)
                    .map(|url| {
                        format!(
                            "<img class=\"hover\" src=\"{}\" alt=\"{} - Close up\" loading=\"lazy\">",
                            html_attr(&url),
                            html_attr(name)
                        )
                    })
                    .unwrap_or_default()
            } else {
                String::new()
            };
            format!(
                "<div class=\"media\"><img class=\"primary\" src=\"{}\" alt=\"{}\" loading=\"{}\">{}</div>",
                html_attr(&primary),
                html_attr(name),
                loading,
                hover
            )
        }
        None => "<div class=\"media placeholder\"><span>No Image</span></div>".to_string(),
    };
    format!(
        "          <a class=\"card\" href=\"{}\">{}<span class=\"cta\">View Details</span><div class=\"card-footer\"><h3>{}</h3><p class=\"price\">{}</p></div></a>\n",
        html_attr(&link),
        media,
        html_escape(name),
        html_escape(&site.price(product.price))
    )
}
