//! Fixed dataset the store is seeded with at startup.

use std::collections::HashSet;

use thiserror::Error;

use stockboard_core::ProductId;

use crate::product::Product;

const SEED_JSON: &str = include_str!("../data/products.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to parse seed products: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate product id in seed data: {0}")]
    DuplicateId(ProductId),
}

/// Products bundled with the crate.
pub fn load() -> Result<Vec<Product>, SeedError> {
    parse(SEED_JSON)
}

/// Parse a JSON array of products, rejecting duplicate ids.
pub fn parse(json: &str) -> Result<Vec<Product>, SeedError> {
    let products: Vec<Product> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(products.len());
    for product in &products {
        if !seen.insert(product.id) {
            return Err(SeedError::DuplicateId(product.id));
        }
    }

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Category;

    #[test]
    fn bundled_seed_loads() {
        let products = load().unwrap();
        assert_eq!(products.len(), 12);
        assert!(products.iter().all(|p| !p.name.is_empty() && p.price.is_positive()));
        for category in Category::BUILT_IN {
            assert!(products.iter().any(|p| p.category == category));
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            { "id": "01908c2e-5a10-7c3e-9b21-4f6a0d1e0001", "name": "A", "category": "Food", "stock": 1, "price": 100 },
            { "id": "01908c2e-5a10-7c3e-9b21-4f6a0d1e0001", "name": "B", "category": "Food", "stock": 1, "price": 100 }
        ]"#;
        match parse(json) {
            Err(SeedError::DuplicateId(id)) => {
                assert_eq!(id.to_string(), "01908c2e-5a10-7c3e-9b21-4f6a0d1e0001")
            }
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(parse("[{ \"id\": 1 }]"), Err(SeedError::Parse(_))));
    }
}
