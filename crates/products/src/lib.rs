//! Products domain module: the in-memory product store and the pure helpers
//! its UI collaborators use.
//!
//! All logic here is synchronous and deterministic (no IO apart from reading
//! configuration from the environment).

pub mod config;
pub mod filter;
pub mod format;
pub mod pagination;
pub mod product;
pub mod seed;
pub mod selection;
pub mod store;
pub mod summary;
pub mod validation;

pub use config::{ConfigError, StoreConfig};
pub use filter::ProductFilter;
pub use pagination::Page;
pub use product::{Category, NewProduct, Price, Product};
pub use seed::SeedError;
pub use selection::Selection;
pub use store::{ProductAction, ProductCollectionState, ProductStore, ProductStoreEvent, StateChanged};
pub use summary::CategorySummary;
pub use validation::ProductForm;

pub use stockboard_core::ProductId;
