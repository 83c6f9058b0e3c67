//! Plain-text and JSON rendering of a product page.

use std::fmt;

use serde::Serialize;

use stockboard_products::format::format_currency;
use stockboard_products::{CategorySummary, Page, Product, StoreConfig};

/// Table with a serial-number column; low-stock rows are marked with `!`.
pub struct Table<'a> {
    page: &'a Page<Product>,
    config: &'a StoreConfig,
}

impl<'a> Table<'a> {
    pub fn new(page: &'a Page<Product>, config: &'a StoreConfig) -> Self {
        Self { page, config }
    }
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.page;
        writeln!(
            f,
            "  {:>4}  {:<24} {:<12} {:>6} {:>12}",
            "#", "Product Name", "Category", "Stock", "Price"
        )?;

        if page.is_empty() {
            writeln!(f, "  (no products)")?;
        }

        for (index, product) in page.items.iter().enumerate() {
            let marker = if self.config.is_low_stock(product.stock) { '!' } else { ' ' };
            writeln!(
                f,
                "{marker} {:>4}  {:<24} {:<12} {:>6} {:>12}",
                page.serial_number(index),
                product.name,
                product.category.label(),
                product.stock,
                format_currency(product.price),
            )?;
        }

        writeln!(
            f,
            "page {}/{} ({} products){}{}",
            page.page,
            page.total_pages,
            page.total_items,
            if page.has_prev() { "  [prev]" } else { "" },
            if page.has_next() { "  [next]" } else { "" },
        )
    }
}

/// One line per category.
pub struct Summary<'a>(pub &'a [CategorySummary]);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0 {
            writeln!(
                f,
                "{:<12} {:>3} products {:>6} units {:>14}",
                row.category.label(),
                row.product_count,
                row.total_stock,
                format_currency(row.inventory_value),
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct JsonPage<'a> {
    page: usize,
    total_pages: usize,
    total_items: usize,
    products: &'a [Product],
    categories: Vec<JsonCategory<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonCategory<'a> {
    category: &'a str,
    product_count: usize,
    total_stock: i64,
    inventory_value: String,
}

impl<'a> JsonPage<'a> {
    pub fn new(page: &'a Page<Product>, totals: &'a [CategorySummary]) -> Self {
        Self {
            page: page.page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            products: &page.items,
            categories: totals
                .iter()
                .map(|row| JsonCategory {
                    category: row.category.label(),
                    product_count: row.product_count,
                    total_stock: row.total_stock,
                    inventory_value: format_currency(row.inventory_value),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::num::NonZeroUsize;
    use stockboard_products::summary::summarize;
    use stockboard_products::{Category, NewProduct, Price, ProductId};

    fn page_of(products: Vec<Product>, page: usize) -> Page<Product> {
        Page::slice(products, page, NonZeroUsize::new(2).unwrap())
    }

    fn product(name: &str, stock: i64) -> Product {
        NewProduct::new(name, Category::Food, stock, Price::from_cents(1250)).with_id(ProductId::new())
    }

    #[test]
    fn table_marks_low_stock_and_numbers_rows_across_pages() {
        let products = vec![product("a", 50), product("b", 50), product("Tea", 3)];
        let out = Table::new(&page_of(products, 2), &StoreConfig::default()).to_string();

        let row = out.lines().find(|l| l.contains("Tea")).unwrap();
        assert!(row.starts_with('!'));
        assert!(row.contains("   3  "));
        assert!(row.contains("$12.50"));
        assert!(out.contains("page 2/2 (3 products)  [prev]"));
        assert!(!out.contains("[next]"));
    }

    #[test]
    fn empty_page_says_so() {
        let out = Table::new(&page_of(Vec::new(), 1), &StoreConfig::default()).to_string();
        assert!(out.contains("(no products)"));
        assert!(out.contains("page 1/1 (0 products)"));
    }

    #[test]
    fn summary_lists_each_category() {
        let products = vec![product("Tea", 4), product("Coffee", 2)];
        let out = Summary(&summarize(&products)).to_string();

        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("Food"));
        assert!(out.contains("  2 products"));
        assert!(out.contains("$75.00"));
    }

    #[test]
    fn json_page_carries_products_and_category_totals() {
        let products = vec![product("Tea", 4)];
        let page = page_of(products.clone(), 1);
        let totals = summarize(&products);

        let value = serde_json::to_value(JsonPage::new(&page, &totals)).unwrap();
        assert_eq!(value["total_items"], 1);
        assert_eq!(value["products"][0]["name"], "Tea");
        assert_eq!(value["products"][0]["category"], "Food");
        assert_eq!(value["categories"][0]["inventory_value"], "$50.00");
    }
}
