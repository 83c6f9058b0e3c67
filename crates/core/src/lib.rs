//! `stockboard-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the product store
//! and its collaborators (no IO, no UI concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use value_object::ValueObject;
