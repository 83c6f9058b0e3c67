use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockboard_core::{DomainError, Entity, ProductId, ValueObject};

/// Product category.
///
/// The dashboard only offers the three built-in categories, but any other
/// label round-trips through `Other` unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Electronics,
    Apparel,
    Food,
    Other(String),
}

impl Category {
    /// Categories offered by the dashboard's select boxes, in display order.
    pub const BUILT_IN: [Category; 3] = [Category::Electronics, Category::Apparel, Category::Food];

    pub fn label(&self) -> &str {
        match self {
            Category::Electronics => "Electronics",
            Category::Apparel => "Apparel",
            Category::Food => "Food",
            Category::Other(label) => label,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Electronics" => Category::Electronics,
            "Apparel" => Category::Apparel,
            "Food" => Category::Food,
            _ => Category::Other(value),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Other(label) => label,
            other => other.label().to_string(),
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl ValueObject for Category {}

/// Price in the smallest currency unit (e.g. cents). Currency-agnostic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Price of `quantity` units; negative quantities count as zero.
    pub fn times(&self, quantity: i64) -> Price {
        let quantity = u64::try_from(quantity).unwrap_or(0);
        Price(self.0.saturating_mul(quantity))
    }
}

impl ValueObject for Price {}

/// Parses decimal input such as `"12"`, `"12.5"` or `"1299.99"`.
impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || DomainError::validation(format!("invalid price: {s:?}"));

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if fraction.len() > 2 || !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().map_err(|_| invalid())? };
        let cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Price)
            .ok_or_else(invalid)
    }
}

/// One inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub stock: i64,
    pub price: Price,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Stock value at the current price.
    pub fn inventory_value(&self) -> Price {
        self.price.times(self.stock)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A product that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: Category,
    pub stock: i64,
    pub price: Price,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, category: Category, stock: i64, price: Price) -> Self {
        Self {
            name: name.into(),
            category,
            stock,
            price,
        }
    }

    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            stock: self.stock,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_categories_round_trip_through_labels() {
        for category in Category::BUILT_IN {
            assert_eq!(Category::from(category.label()), category);
        }
    }

    #[test]
    fn unknown_category_is_kept_verbatim() {
        let category = Category::from("Toys");
        assert_eq!(category, Category::Other("Toys".to_string()));
        assert_eq!(category.to_string(), "Toys");
    }

    #[test]
    fn category_serializes_as_plain_label() {
        let json = serde_json::to_string(&Category::Food).unwrap();
        assert_eq!(json, "\"Food\"");
        let back: Category = serde_json::from_str("\"Apparel\"").unwrap();
        assert_eq!(back, Category::Apparel);
    }

    #[test]
    fn price_parses_decimal_input() {
        assert_eq!("12".parse::<Price>().unwrap(), Price::from_cents(1200));
        assert_eq!("12.5".parse::<Price>().unwrap(), Price::from_cents(1250));
        assert_eq!(" 1299.99 ".parse::<Price>().unwrap(), Price::from_cents(129_999));
        assert_eq!(".75".parse::<Price>().unwrap(), Price::from_cents(75));
    }

    #[test]
    fn price_rejects_malformed_input() {
        for input in ["", ".", "-5", "1.234", "abc", "1,50", "1.2.3"] {
            let err = input.parse::<Price>().unwrap_err();
            assert!(err.is_validation(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn inventory_value_ignores_negative_stock() {
        let price = Price::from_cents(250);
        assert_eq!(price.times(4), Price::from_cents(1000));
        assert_eq!(price.times(-3), Price::from_cents(0));
    }

    #[test]
    fn new_product_keeps_fields_when_given_an_id() {
        let id = ProductId::new();
        let product = NewProduct::new("Mug", Category::Food, 10, Price::from_cents(500)).with_id(id);
        assert_eq!(product.id, id);
        assert_eq!(product.name, "Mug");
        assert_eq!(product.category, Category::Food);
        assert_eq!(product.stock, 10);
        assert_eq!(product.price, Price::from_cents(500));
        assert!(product.has_id(&id));
    }
}
