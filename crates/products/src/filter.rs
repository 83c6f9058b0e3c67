//! Product list filtering.
//!
//! Filters are not store state. They run over the full collection before any
//! page is sliced, so page boundaries are computed over the filtered set.

use crate::product::{Category, Product};

/// Active list filter. The default matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Exact category match when set.
    pub category: Option<Category>,
    /// Only products with `stock > 0`.
    pub in_stock_only: bool,
}

impl ProductFilter {
    pub fn new(category: Option<Category>, in_stock_only: bool) -> Self {
        Self {
            category,
            in_stock_only,
        }
    }

    /// Category-only filter, as set by the dashboard's category select (which
    /// resets the in-stock checkbox).
    pub fn by_category(category: Category) -> Self {
        Self::new(Some(category), false)
    }

    /// In-stock-only filter, as set by the dashboard's checkbox (which resets
    /// the category select).
    pub fn in_stock() -> Self {
        Self::new(None, true)
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && !self.in_stock_only
    }

    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .as_ref()
            .is_none_or(|category| &product.category == category);
        let stock_ok = !self.in_stock_only || product.in_stock();
        category_ok && stock_ok
    }

    /// Matching products, in collection order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{NewProduct, Price};
    use stockboard_core::ProductId;

    fn product(name: &str, category: Category, stock: i64) -> Product {
        NewProduct::new(name, category, stock, Price::from_cents(100)).with_id(ProductId::new())
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("Laptop", Category::Electronics, 3),
            product("Bread", Category::Food, 0),
            product("Apples", Category::Food, 12),
            product("Scarf", Category::Apparel, 0),
        ]
    }

    #[test]
    fn empty_filter_matches_everything() {
        let products = catalog();
        let filter = ProductFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&products).len(), products.len());
    }

    #[test]
    fn category_filter_is_exact() {
        let products = catalog();
        let names: Vec<_> = ProductFilter::by_category(Category::Food)
            .apply(&products)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Bread", "Apples"]);
    }

    #[test]
    fn in_stock_filter_drops_zero_stock() {
        let products = catalog();
        let names: Vec<_> = ProductFilter::in_stock()
            .apply(&products)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Laptop", "Apples"]);
    }

    #[test]
    fn combined_filter_requires_both_predicates() {
        let products = catalog();
        let filter = ProductFilter::new(Some(Category::Food), true);
        let matched = filter.apply(&products);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Apples");
    }
}
