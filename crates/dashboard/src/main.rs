//! Headless inventory dashboard.
//!
//! Seeds a product store, applies the requested mutations and filter, and
//! prints the current page plus a per-category summary of that page.

mod render;

use anyhow::{Context, Result};
use clap::Parser;

use stockboard_core::ProductId;
use stockboard_products::{
    Category, CategorySummary, Page, Product, ProductAction, ProductFilter, ProductStore, StoreConfig, summary,
};

/// Print one page of the seeded inventory.
#[derive(Debug, Parser)]
#[command(name = "stockboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Only show products in this category (exact match)
    #[arg(long)]
    category: Option<String>,

    /// Only show products with stock > 0
    #[arg(long)]
    in_stock: bool,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Delete these product ids before rendering
    #[arg(long = "delete", value_name = "ID")]
    delete: Vec<ProductId>,

    /// Print the page as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn filter(&self) -> ProductFilter {
        ProductFilter::new(self.category.as_deref().map(Category::from), self.in_stock)
    }
}

fn main() -> Result<()> {
    stockboard_observability::init();

    let cli = Cli::parse();
    let config = StoreConfig::from_env().context("invalid stockboard configuration")?;
    let mut store = ProductStore::seeded(config).context("failed to load seed products")?;
    let updates = store.subscribe();

    if !cli.delete.is_empty() {
        store.dispatch(ProductAction::Delete(cli.delete.iter().copied().collect()));
    }
    let filter = cli.filter();
    select_page(&mut store, &filter, cli.page)?;

    for change in updates.drain() {
        tracing::debug!(event = ?change.event, products = change.snapshot.len(), "store changed");
    }

    let (page, totals) = view(&store, &filter);

    if cli.json {
        let out = render::JsonPage::new(&page, &totals);
        println!("{}", serde_json::to_string_pretty(&out).context("failed to encode page")?);
    } else {
        print!("{}", render::Table::new(&page, store.config()));
        print!("{}", render::Summary(&totals));
    }

    Ok(())
}

/// Move the cursor to `page`, which must exist in the filtered view.
fn select_page(store: &mut ProductStore, filter: &ProductFilter, page: usize) -> Result<()> {
    if page == store.state().current_page() {
        return Ok(());
    }
    let total_pages = store.page(filter).total_pages;
    if page == 0 || page > total_pages {
        anyhow::bail!("page {page} is out of range (1..={total_pages})");
    }
    store.dispatch(ProductAction::SetPage(page));
    Ok(())
}

/// The filtered page and the category totals of its rows.
fn view(store: &ProductStore, filter: &ProductFilter) -> (Page<Product>, Vec<CategorySummary>) {
    let page = store.page(filter);
    let totals = summary::summarize(&page.items);
    (page, totals)
}
