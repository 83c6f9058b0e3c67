//! Per-category totals backing the dashboard chart.

use crate::product::{Category, Price, Product};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: Category,
    pub product_count: usize,
    pub total_stock: i64,
    pub inventory_value: Price,
}

/// Group `products` by category, ordered by each category's first appearance.
pub fn summarize<'a, I>(products: I) -> Vec<CategorySummary>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut out: Vec<CategorySummary> = Vec::new();

    for product in products {
        let idx = match out.iter().position(|s| s.category == product.category) {
            Some(idx) => idx,
            None => {
                out.push(CategorySummary {
                    category: product.category.clone(),
                    product_count: 0,
                    total_stock: 0,
                    inventory_value: Price::default(),
                });
                out.len() - 1
            }
        };

        let entry = &mut out[idx];
        entry.product_count += 1;
        entry.total_stock = entry.total_stock.saturating_add(product.stock);
        entry.inventory_value = Price::from_cents(
            entry
                .inventory_value
                .cents()
                .saturating_add(product.inventory_value().cents()),
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::NewProduct;
    use stockboard_core::ProductId;

    fn product(category: Category, stock: i64, cents: u64) -> Product {
        NewProduct::new("item", category, stock, Price::from_cents(cents)).with_id(ProductId::new())
    }

    #[test]
    fn groups_in_first_seen_order() {
        let products = vec![
            product(Category::Food, 2, 300),
            product(Category::Electronics, 1, 10_000),
            product(Category::Food, 5, 100),
        ];

        let summary = summarize(&products);
        assert_eq!(summary.len(), 2);

        assert_eq!(summary[0].category, Category::Food);
        assert_eq!(summary[0].product_count, 2);
        assert_eq!(summary[0].total_stock, 7);
        assert_eq!(summary[0].inventory_value, Price::from_cents(1_100));

        assert_eq!(summary[1].category, Category::Electronics);
        assert_eq!(summary[1].inventory_value, Price::from_cents(10_000));
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(summarize(&Vec::<Product>::new()).is_empty());
    }
}
