use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use atelier::catalog::{project, SortKey};
use atelier::cms::{CmsClient, ContentSource};
use atelier::config;
use atelier::images::GridVariant;
use atelier::model::ImageSize;
use atelier::render::Site;

/// Print the catalog as the listing page would order it.
#[derive(Parser, Debug)]
struct Args {
    /// Path to YAML config
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Category id, name or `all`
    #[arg(long, default_value = "all")]
    category: String,

    /// Sort key, e.g. `price-asc` or `name-desc`
    #[arg(long, default_value = "date-desc")]
    sort: String,

    /// Also print resolved image URLs
    #[arg(long)]
    images: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let cfg = config::load(Some(&args.config))?;
    let site = Site::from_config(&cfg);
    let client = CmsClient::from_config(&cfg)?;

    let products = client.list_products().await?;
    let filter = site.category_filter(&args.category);
    let sort = SortKey::parse(&args.sort);
    let shown = project(&products, &filter, sort);

    println!("Products: {} of {} (category={}, sort={})", shown.len(), products.len(), filter, sort);
    for p in shown {
        println!(
            "  #{} {} -> {{ slug: {}, category: {}, price: {}, images: {} }}",
            p.id,
            p.display_name(),
            p.slug.as_deref().unwrap_or("-"),
            p.category.as_deref().unwrap_or("-"),
            site.price(p.price),
            p.images.len(),
        );
        if args.images {
            let grid = site.assets.grid_image_url(p, GridVariant::Primary);
            println!("      grid: {}", grid.as_deref().unwrap_or("-"));
            for img in &p.images {
                let url = site.assets.resolve_url(Some(img), ImageSize::Large);
                println!("      large: {}", url.as_deref().unwrap_or("-"));
            }
        }
    }
    Ok(())
}
