use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use futures::future::try_join_all;
use tracing::{info, warn};

use atelier::catalog::SortKey;
use atelier::cms::{CmsClient, ContentSource, LoadState};
use atelier::config::{self, Config};
use atelier::render::{self, style::DEFAULT_STYLE, Selection, Site};

#[derive(Debug, Parser)]
#[command(
    about = "Render the storefront to static HTML. Gallery navigation falls back to the first image since query strings are not served."
)]
struct Args {
    /// Path to YAML config file
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Output directory, overrides `app.out_dir`
    #[arg(long)]
    out: Option<PathBuf>,
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
    let out_dir = args.out.unwrap_or_else(|| PathBuf::from(&cfg.app.out_dir));
    let client = CmsClient::from_config(&cfg)?;
    let written = run(&cfg, &client, &out_dir).await?;

    println!("Wrote {} files", written);
    println!("================================");
    println!("Index full path: {}", absolute_path(&out_dir.join("index.html")).display());
    Ok(())
}

/// Render every page reachable from the navigation into `out_dir`.
/// Returns the number of files written.
async fn run(cfg: &Config, source: &dyn ContentSource, out_dir: &Path) -> Result<usize> {
    let site = Site::from_config(cfg);
    let products = source
        .list_products()
        .await
        .context("failed to fetch products")?;
    info!(count = products.len(), "fetched catalog");

    let mut pages: Vec<(PathBuf, String)> = Vec::new();
    pages.push(("index.html".into(), render::home_page(&site)));

    let all = LoadState::Ready(products);
    pages.push((
        "products/index.html".into(),
        render::products_page(&site, &all, &Selection::default()),
    ));

    let collections = try_join_all(site.categories.iter().map(|cat| async move {
        source
            .list_products_where_contains(&cfg.cms.collection_field, &cat.id)
            .await
            .map(|items| (cat.id.clone(), items))
            .with_context(|| format!("failed to fetch collection '{}'", cat.id))
    }))
    .await?;
    for (id, items) in collections {
        let html = render::collection_page(&site, &id, &LoadState::Ready(items), SortKey::default());
        pages.push((PathBuf::from("collection").join(&id).join("index.html"), html));
    }

    if let LoadState::Ready(products) = &all {
        for product in products {
            let Some(slug) = product.slug.as_deref().filter(|s| is_safe_segment(s)) else {
                warn!(id = product.id, "skipping product without a usable slug");
                continue;
            };
            let html = render::detail_page(&site, product, Default::default());
            pages.push((PathBuf::from("products").join(slug).join("index.html"), html));
        }
    }

    pages.push(("assets/style.css".into(), DEFAULT_STYLE.to_string()));

    let count = pages.len();
    try_join_all(pages.into_iter().map(|(rel, body)| write_file(out_dir.join(rel), body))).await?;
    Ok(count)
}

async fn write_file(path: PathBuf, body: String) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tokio::fs::write(&path, body)
        .await
        .with_context(|| format!("failed to write {}", path.display()))
}

fn is_safe_segment(s: &str) -> bool {
    !s.is_empty() && s != "." && s != ".." && !s.contains(['/', '\\'])
}

fn absolute_path(p: &Path) -> PathBuf {
    std::fs::canonicalize(p).unwrap_or_else(|_| p.to_path_buf())
}
