use super::{html_attr, html_escape, layout, path, Meta, Site};

/// Landing page: banner, brand blurb, one tile per collection, contact block.
pub fn home_page(site: &Site) -> String {
    let mut body = String::new();
    body.push_str(&format!(
        r#"      <section class="hero"><img src="{}" alt="{} banner"></section>
      <section class="brand dark">
        <p class="lead">{}</p>
        <h1>{}</h1>
      </section>
"#,
        html_attr(&site.home.banner_image),
        html_attr(&site.brand),
        html_escape(&site.home.blurb),
        html_escape(&site.brand),
    ));

    for (i, cat) in site.categories.iter().enumerate() {
        let text = format!(
            r#"<div class="tile-text"><h2>{}</h2>{}<a class="button light" href="{}">View Collection</a></div>"#,
            html_escape(&cat.label.to_uppercase()),
            cat.blurb
                .as_deref()
                .map(|b| format!("<p>{}</p>", html_escape(b)))
                .unwrap_or_default(),
            html_attr(&path(&["collection", cat.id.as_str()])),
        );
        let image = cat
            .tile_image
            .as_deref()
            .map(|src| {
                format!(
                    r#"<div class="tile-image"><img src="{}" alt="{} collection"></div>"#,
                    html_attr(src),
                    html_attr(&cat.label)
                )
            })
            .unwrap_or_default();
        // Alternate image side per tile.
        let (first, second) = if i % 2 == 0 { (text, image) } else { (image, text) };
        body.push_str(&format!(
            "      <section class=\"tile dark\">{}{}</section>\n",
            first, second
        ));
    }

    if let Some(weddings) = &site.home.weddings {
        body.push_str(&format!(
            "      <section class=\"weddings dark\">\n        <h2>{}</h2>\n",
            html_escape(&weddings.title)
        ));
        for src in &weddings.images {
            body.push_str(&format!(
                "        <img src=\"{}\" alt=\"{}\">\n",
                html_attr(src),
                html_attr(&weddings.title)
            ));
        }
        body.push_str(&format!(
            "        <p>{}</p>\n        <a class=\"button outline-light\" href=\"#contact\">ENQUIRE NOW</a>\n      </section>\n",
            html_escape(&weddings.text)
        ));
    }

    if !site.home.contact.is_empty() {
        body.push_str("      <section id=\"contact\" class=\"contact dark\">\n        <h3>BOOK A STORE APPOINTMENT</h3>\n");
        for line in &site.home.contact {
            body.push_str(&format!("        <p>{}</p>\n", html_escape(line)));
        }
        body.push_str("      </section>");
    }

    let meta = Meta {
        title: site.brand.clone(),
        description: Some(site.home.blurb.clone()),
        image: None,
    };
    layout(site, &meta, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn home_links_every_collection() {
        let cfg: Config = serde_yaml::from_str(crate::config::example()).unwrap();
        let html = home_page(&Site::from_config(&cfg));
        assert!(html.contains("href=\"/collection/fx\""));
        assert!(html.contains("href=\"/collection/sg\""));
        assert!(html.contains("FORMALS"));
        assert!(html.contains("BOOK A STORE APPOINTMENT"));
    }

    #[test]
    fn weddings_block_is_optional() {
        let cfg: Config = serde_yaml::from_str(crate::config::example()).unwrap();
        let mut site = Site::from_config(&cfg);
        let html = home_page(&site);
        assert!(html.contains("<h2>MARIA.B INSPIRED WEDDINGS</h2>"));
        assert!(html.contains("href=\"#contact\">ENQUIRE NOW</a>"));
        assert!(html.contains("baraat &amp; walima"));

        site.home.weddings = None;
        assert!(!home_page(&site).contains("ENQUIRE NOW"));
    }
}
