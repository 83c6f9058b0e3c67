//! Add/edit form validation.
//!
//! The store trusts its callers; this is where submitted fields are checked
//! before an add or update is dispatched.

use stockboard_core::{DomainError, DomainResult, ProductId};

use crate::product::{Category, NewProduct, Price, Product};
use crate::store::ProductCollectionState;

/// Message shown next to the form when any field is rejected.
pub const FORM_ERROR: &str = "all fields are required and stock/price must be greater than 0";

/// Raw form state. `None` means the field was left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub category: Option<Category>,
    pub stock: Option<i64>,
    pub price: Option<Price>,
}

impl ProductForm {
    /// Pre-fill the form for editing an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: Some(product.category.clone()),
            stock: Some(product.stock),
            price: Some(product.price),
        }
    }

    /// Pre-fill the form for the product `id` held in `state`.
    pub fn for_edit(state: &ProductCollectionState, id: &ProductId) -> DomainResult<Self> {
        state.get(id).map(Self::from_product).ok_or_else(DomainError::not_found)
    }

    /// Build a form from text inputs. Blank inputs become `None`; non-blank
    /// inputs that do not parse are rejected.
    pub fn from_inputs(name: &str, category: &str, stock: &str, price: &str) -> DomainResult<Self> {
        let category = non_blank(category).map(Category::from);
        let stock = non_blank(stock)
            .map(|s| s.parse::<i64>().map_err(|_| DomainError::validation(FORM_ERROR)))
            .transpose()?;
        let price = non_blank(price)
            .map(|s| s.parse::<Price>().map_err(|_| DomainError::validation(FORM_ERROR)))
            .transpose()?;

        Ok(Self {
            name: name.trim().to_string(),
            category,
            stock,
            price,
        })
    }

    /// Check every field and produce the add payload.
    pub fn validate(&self) -> DomainResult<NewProduct> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation(FORM_ERROR));
        }

        let (Some(category), Some(stock), Some(price)) = (&self.category, self.stock, self.price) else {
            return Err(DomainError::validation(FORM_ERROR));
        };

        if stock <= 0 || !price.is_positive() {
            return Err(DomainError::validation(FORM_ERROR));
        }

        Ok(NewProduct::new(name, category.clone(), stock, price))
    }

    /// Check every field and produce the update payload for `id`.
    pub fn validate_for(&self, id: ProductId) -> DomainResult<Product> {
        self.validate().map(|p| p.with_id(id))
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}
