use crate::gallery::{GalleryCursor, GalleryNavigator};
use crate::model::{ImageSize, Product};

use super::{href, html_attr, html_escape, layout, path, Meta, Site};

/// Link to the detail page showing `cursor`; default fields are omitted.
pub fn cursor_href(slug: &str, cursor: GalleryCursor) -> String {
    let mut pairs = Vec::new();
    if cursor.current_index != 0 {
        pairs.push(("image", cursor.current_index.to_string()));
    }
    if cursor.thumbnail_start != 0 {
        pairs.push(("thumbs", cursor.thumbnail_start.to_string()));
    }
    if cursor.wishlisted {
        pairs.push(("wishlist", "true".to_string()));
    }
    href(&path(&["products", slug]), &pairs)
}

/// `/products/<slug>`: gallery plus product information.
pub fn detail_page(site: &Site, product: &Product, cursor: GalleryCursor) -> String {
    let name = product.display_name();
    let slug = product.slug.as_deref().unwrap_or_default();
    let nav = GalleryNavigator::restore(&product.images, cursor);
    let link = |c: GalleryCursor| html_attr(&cursor_href(slug, c));

    let mut body = format!(
        r#"      <nav class="breadcrumb"><a href="/">Home</a><span>/</span><a href="/products">Products</a><span>/</span><span>{}</span></nav>
      <div class="detail">
        <div class="gallery">
"#,
        html_escape(name)
    );

    if nav.image_count() == 0 {
        body.push_str("          <div class=\"main-image placeholder\"><span>No images available</span></div>\n");
    } else {
        let main = site
            .assets
            .resolve_url(nav.current_image(), ImageSize::Large)
            .unwrap_or_else(|| "/static/placeholder.svg".to_string());
        body.push_str(&format!(
            "          <div class=\"main-image\"><img src=\"{}\" alt=\"{}\">",
            html_attr(&main),
            html_attr(name)
        ));
        if nav.image_count() > 1 {
            body.push_str(&format!(
                "<a class=\"arrow prev\" href=\"{}\" aria-label=\"Previous image\">&lsaquo;</a><a class=\"arrow next\" href=\"{}\" aria-label=\"Next image\">&rsaquo;</a><span class=\"counter\">{} / {}</span>",
                link(nav.peek(|n| n.previous())),
                link(nav.peek(|n| n.next())),
                nav.cursor().current_index + 1,
                nav.image_count()
            ));
        }
        body.push_str("</div>\n");

        if nav.image_count() > 1 {
            body.push_str(&thumbnail_strip(site, &nav, name, &link));
        }
    }
    body.push_str("        </div>\n");

    body.push_str(&format!(
        "        <div class=\"info\">\n          <h1>{}</h1>\n",
        html_escape(name)
    ));
    if let Some(cat) = &product.category {
        body.push_str(&format!("          <p class=\"category\">{}</p>\n", html_escape(cat)));
    }
    body.push_str(&format!(
        "          <div class=\"price big\">{}</div>\n",
        html_escape(&site.price(product.price))
    ));
    if let Some(desc) = &product.description {
        body.push_str(&format!(
            "          <div class=\"description\"><h3>Description</h3><p>{}</p></div>\n",
            html_escape(desc)
        ));
    }

    let wishlisted = nav.cursor().wishlisted;
    body.push_str(&format!(
        r#"          <a class="button block" href="/#contact">Contact for Purchase</a>
          <a class="button outline{}" href="{}">{}</a>
          <div class="card details">
            <h3>Product Details</h3>
            <div class="kv"><span class="muted">Product ID:</span><span>{}</span></div>
"#,
        if wishlisted { " wishlisted" } else { "" },
        link(nav.peek(|n| n.toggle_wishlist())),
        if wishlisted { "&hearts; Wishlisted" } else { "&#9825; Add to Wishlist" },
        product.id
    ));
    if let Some(cat) = &product.category {
        body.push_str(&format!(
            "            <div class=\"kv\"><span class=\"muted\">Category:</span><span class=\"category\">{}</span></div>\n",
            html_escape(cat)
        ));
    }
    body.push_str(
        r#"            <div class="kv"><span class="muted">Availability:</span><span class="available">Contact for Availability</span></div>
          </div>
        </div>
      </div>"#,
    );

    let description = product
        .description
        .clone()
        .unwrap_or_else(|| format!("{} - Premium fashion collection by {}", name, site.brand));
    let meta = Meta {
        title: format!("{} - {}", name, site.brand),
        description: Some(description),
        image: product
            .images
            .first()
            .and_then(|img| img.original_url())
            .map(|u| site.assets.absolutize(u)),
    };
    layout(site, &meta, &body)
}

fn thumbnail_strip(
    site: &Site,
    nav: &GalleryNavigator<'_>,
    name: &str,
    link: &dyn Fn(GalleryCursor) -> String,
) -> String {
    let paged = nav.is_paged();
    let mut out = format!("          <div class=\"thumbs{}\">\n", if paged { " paged" } else { "" });

    if paged {
        out.push_str(&paging_control(
            "prev",
            nav.can_page_backward(),
            &link(nav.peek(|n| n.page_thumbnails_backward())),
            "&lsaquo;",
        ));
    }

    let columns = nav.image_count().min(nav.window_size());
    out.push_str(&format!(
        "            <div class=\"strip\" style=\"grid-template-columns: repeat({}, 1fr)\">\n",
        columns
    ));
    for (index, image) in nav.visible_thumbnails() {
        let src = site
            .assets
            .resolve_url(Some(image), ImageSize::Small)
            .unwrap_or_else(|| "/static/placeholder.svg".to_string());
        out.push_str(&format!(
            "              <a class=\"thumb{}\" href=\"{}\"><img src=\"{}\" alt=\"{} {}\"></a>\n",
            if index == nav.cursor().current_index { " current" } else { "" },
            link(nav.peek(|n| {
                n.select_index(index);
            })),
            html_attr(&src),
            html_attr(name),
            index + 1
        ));
    }
    out.push_str("            </div>\n");

    if paged {
        out.push_str(&paging_control(
            "next",
            nav.can_page_forward(),
            &link(nav.peek(|n| n.page_thumbnails_forward())),
            "&rsaquo;",
        ));
        let indicator = nav.page_indicator();
        out.push_str("            <div class=\"dots\">");
        for i in 0..indicator.count {
            out.push_str(if i == indicator.active {
                "<span class=\"dot active\"></span>"
            } else {
                "<span class=\"dot\"></span>"
            });
        }
        out.push_str("</div>\n");
    }
    out.push_str("          </div>\n");
    out
}

fn paging_control(class: &str, enabled: bool, target: &str, glyph: &str) -> String {
    if enabled {
        format!(
            "            <a class=\"page {}\" href=\"{}\">{}</a>\n",
            class, target, glyph
        )
    } else {
        format!(
            "            <span class=\"page {} disabled\" aria-disabled=\"true\">{}</span>\n",
            class, glyph
        )
    }
}

/// Detail lookup matched nothing.
pub fn product_not_found_page(site: &Site) -> String {
    let meta = Meta {
        title: format!("Product Not Found - {}", site.brand),
        description: Some("The requested product could not be found.".into()),
        image: None,
    };
    let body = r#"      <section class="notice">
        <h1>Product not found</h1>
        <p class="muted">The product you're looking for doesn't exist or has been removed.</p>
        <a class="button" href="/products">Browse All Products</a>
      </section>"#;
    layout(site, &meta, body)
}

/// Detail fetch failed.
pub fn product_error_page(site: &Site) -> String {
    let meta = Meta {
        title: format!("Product - {}", site.brand),
        description: Some(format!("Premium fashion collection by {}", site.brand)),
        image: None,
    };
    let body = r#"      <section class="notice">
        <h1>Error loading product</h1>
        <p class="muted">There was an error loading the product. Please try again later.</p>
        <a class="button" href="/products">Browse All Products</a>
        <a class="button secondary" href="/">Go Home</a>
      </section>"#;
    layout(site, &meta, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::Image;

    fn site() -> Site {
        let cfg: Config = serde_yaml::from_str(crate::config::example()).unwrap();
        Site::from_config(&cfg)
    }

    fn product(images: usize) -> Product {
        Product {
            id: 42,
            name: Some("Noor".into()),
            slug: Some("noor".into()),
            price: 45000.0,
            category: Some("formals".into()),
            description: None,
            created_at: None,
            images: (0..images).map(|i| Image::original(format!("/uploads/{}.jpg", i))).collect(),
        }
    }

    #[test]
    fn cursor_href_omits_defaults() {
        assert_eq!(cursor_href("noor", GalleryCursor::default()), "/products/noor");
        let c = GalleryCursor { current_index: 2, thumbnail_start: 1, wishlisted: true };
        assert_eq!(cursor_href("noor", c), "/products/noor?image=2&thumbs=1&wishlist=true");
        assert_eq!(cursor_href("a?b c", c), "/products/a%3Fb%20c?image=2&thumbs=1&wishlist=true");
    }

    #[test]
    fn single_image_has_no_controls() {
        let html = detail_page(&site(), &product(1), GalleryCursor::default());
        assert!(!html.contains("class=\"arrow prev\""));
        assert!(!html.contains("class=\"thumbs"));
        assert!(html.contains("<title>Noor - MARIA.B</title>"));
        assert!(html.contains("Noor - Premium fashion collection by MARIA.B"));
        assert!(html.contains("og:image\" content=\"https://graceful-surprise-a16adfb07c.strapiapp.com/uploads/0.jpg\""));
    }

    #[test]
    fn arrows_wrap_around() {
        let html = detail_page(&site(), &product(3), GalleryCursor::default());
        assert!(html.contains("<a class=\"arrow prev\" href=\"/products/noor?image=2\""));
        assert!(html.contains("<a class=\"arrow next\" href=\"/products/noor?image=1\""));
        assert!(html.contains("1 / 3"));
        // three images fit in the window: no paging controls
        assert!(!html.contains("class=\"dots\""));
    }

    #[test]
    fn paged_strip_at_end_disables_forward() {
        let cursor = GalleryCursor { current_index: 0, thumbnail_start: 7, wishlisted: false };
        let html = detail_page(&site(), &product(12), cursor);
        assert!(html.contains("page next disabled"));
        assert!(html.contains("<a class=\"page prev\" href=\"/products/noor?thumbs=6\""));
        assert_eq!(html.matches("<span class=\"dot").count(), 3);
        assert!(html.contains("<span class=\"dot active\"></span>"));
        assert!(html.contains("alt=\"Noor 8\""));
        assert!(!html.contains("alt=\"Noor 7\""));
    }

    #[test]
    fn wishlist_toggle_link() {
        let html = detail_page(&site(), &product(1), GalleryCursor::default());
        assert!(html.contains("href=\"/products/noor?wishlist=true\">&#9825; Add to Wishlist"));
        let wished = GalleryCursor { wishlisted: true, ..Default::default() };
        let html = detail_page(&site(), &product(1), wished);
        assert!(html.contains("href=\"/products/noor\">&hearts; Wishlisted"));
    }

    #[test]
    fn no_images_placeholder() {
        let html = detail_page(&site(), &product(0), GalleryCursor { current_index: 3, ..Default::default() });
        assert!(html.contains("No images available"));
    }
}
