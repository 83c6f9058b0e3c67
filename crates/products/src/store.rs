//! The product store: single source of truth for the product collection and
//! the pagination cursor.
//!
//! Mutations are synchronous and take `&mut self`. Each effective mutation
//! swaps in a new state snapshot (copy-on-write through `Arc`) and publishes
//! it to subscribers together with a [`ProductStoreEvent`]. Readers holding an
//! older snapshot keep seeing the state they were handed.

use core::num::NonZeroUsize;
use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use stockboard_core::{Entity, ProductId};
use stockboard_events::{Event, InMemorySnapshotBus, SnapshotBus, Subscription};

use crate::config::StoreConfig;
use crate::filter::ProductFilter;
use crate::pagination::{self, Page};
use crate::product::{NewProduct, Product};
use crate::seed::{self, SeedError};

/// Full store state, as handed out in snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCollectionState {
    products: Vec<Product>,
    current_page: usize,
    items_per_page: NonZeroUsize,
    total_pages: usize,
}

impl ProductCollectionState {
    /// State over `products` with the cursor on page 1. Repeated ids keep
    /// their first occurrence.
    pub fn new(products: Vec<Product>, items_per_page: NonZeroUsize) -> Self {
        let products = dedup_by_id(products);
        let total_pages = pagination::total_pages(products.len(), items_per_page);
        Self {
            products,
            current_page: 1,
            items_per_page,
            total_pages,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> NonZeroUsize {
        self.items_per_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.has_id(id))
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Products on the current page of the unfiltered collection.
    pub fn list_page(&self) -> Vec<Product> {
        self.page(&ProductFilter::default()).items
    }

    /// Current page of the collection after applying `filter` to all of it.
    pub fn page(&self, filter: &ProductFilter) -> Page<Product> {
        let matching = self.products.iter().filter(|p| filter.matches(p)).cloned();
        Page::slice(matching, self.current_page, self.items_per_page)
    }

    fn recompute_total_pages(&mut self) {
        self.total_pages = pagination::total_pages(self.products.len(), self.items_per_page);
    }

    fn clamp_current_page(&mut self) {
        self.current_page = pagination::clamp_page(self.current_page, self.total_pages);
    }
}

/// Drop every product whose id already appeared earlier in `products`.
fn dedup_by_id(products: Vec<Product>) -> Vec<Product> {
    let mut seen = HashSet::with_capacity(products.len());
    let before = products.len();
    let unique: Vec<Product> = products.into_iter().filter(|p| seen.insert(p.id)).collect();

    if unique.len() != before {
        tracing::warn!(
            dropped = before - unique.len(),
            kept = unique.len(),
            "duplicate product ids dropped"
        );
    }
    unique
}

/// Intents a UI collaborator can dispatch into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductAction {
    Add(NewProduct),
    Update(Product),
    Delete(HashSet<ProductId>),
    SetProducts(Vec<Product>),
    SetPage(usize),
}

/// What a mutation did. Published alongside the resulting snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProductStoreEvent {
    ProductAdded {
        product_id: ProductId,
        occurred_at: DateTime<Utc>,
    },
    ProductUpdated {
        product_id: ProductId,
        occurred_at: DateTime<Utc>,
    },
    ProductsDeleted {
        product_ids: Vec<ProductId>,
        occurred_at: DateTime<Utc>,
    },
    ProductsReplaced {
        count: usize,
        occurred_at: DateTime<Utc>,
    },
    PageChanged {
        page: usize,
        occurred_at: DateTime<Utc>,
    },
}

impl Event for ProductStoreEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ProductStoreEvent::ProductAdded { .. } => "products.product.added",
            ProductStoreEvent::ProductUpdated { .. } => "products.product.updated",
            ProductStoreEvent::ProductsDeleted { .. } => "products.products.deleted",
            ProductStoreEvent::ProductsReplaced { .. } => "products.products.replaced",
            ProductStoreEvent::PageChanged { .. } => "products.page.changed",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ProductStoreEvent::ProductAdded { occurred_at, .. }
            | ProductStoreEvent::ProductUpdated { occurred_at, .. }
            | ProductStoreEvent::ProductsDeleted { occurred_at, .. }
            | ProductStoreEvent::ProductsReplaced { occurred_at, .. }
            | ProductStoreEvent::PageChanged { occurred_at, .. } => *occurred_at,
        }
    }
}

/// Message delivered to subscribers after every effective mutation.
#[derive(Debug, Clone)]
pub struct StateChanged {
    pub event: ProductStoreEvent,
    pub snapshot: Arc<ProductCollectionState>,
}

/// In-memory product store.
#[derive(Debug)]
pub struct ProductStore<B = InMemorySnapshotBus<StateChanged>> {
    state: Arc<ProductCollectionState>,
    config: StoreConfig,
    bus: B,
}

impl ProductStore {
    /// Empty store.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_products(config, Vec::new())
    }

    /// Store holding `products` (ids must already be unique), cursor on page 1.
    pub fn with_products(config: StoreConfig, products: Vec<Product>) -> Self {
        Self::with_bus(config, products, InMemorySnapshotBus::new())
    }

    /// Store seeded from the bundled dataset.
    pub fn seeded(config: StoreConfig) -> Result<Self, SeedError> {
        let products = seed::load()?;
        tracing::info!(count = products.len(), "seeded product store");
        Ok(Self::with_products(config, products))
    }
}

impl<B> ProductStore<B>
where
    B: SnapshotBus<StateChanged>,
{
    pub fn with_bus(config: StoreConfig, products: Vec<Product>, bus: B) -> Self {
        Self {
            state: Arc::new(ProductCollectionState::new(products, config.items_per_page)),
            config,
            bus,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Current immutable snapshot.
    pub fn snapshot(&self) -> Arc<ProductCollectionState> {
        Arc::clone(&self.state)
    }

    /// Subscribe to every snapshot published from now on.
    pub fn subscribe(&self) -> Subscription<StateChanged> {
        self.bus.subscribe()
    }

    pub fn state(&self) -> &ProductCollectionState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.state.get(id)
    }

    /// Apply one dispatched intent. Returns the created product for `Add`.
    pub fn dispatch(&mut self, action: ProductAction) -> Option<Product> {
        match action {
            ProductAction::Add(input) => return Some(self.add_product(input)),
            ProductAction::Update(product) => self.update_product(product),
            ProductAction::Delete(ids) => self.delete_products(ids),
            ProductAction::SetProducts(products) => self.set_products(products),
            ProductAction::SetPage(page) => self.set_current_page(page),
        }
        None
    }

    /// Append a new product under a freshly generated id.
    pub fn add_product(&mut self, input: NewProduct) -> Product {
        let id = self.fresh_id();
        let product = input.with_id(id);

        let state = self.state_mut();
        state.products.push(product.clone());
        state.recompute_total_pages();

        tracing::info!(product_id = %id, name = %product.name, "product added");
        self.publish(ProductStoreEvent::ProductAdded {
            product_id: id,
            occurred_at: Utc::now(),
        });
        product
    }

    /// Replace the entry with the same id, keeping its position.
    ///
    /// Unknown ids are ignored: nothing changes and nothing is published.
    pub fn update_product(&mut self, product: Product) {
        let Some(index) = self.state.products.iter().position(|p| p.has_id(&product.id)) else {
            tracing::debug!(product_id = %product.id, "update ignored: unknown product id");
            return;
        };

        let product_id = product.id;
        self.state_mut().products[index] = product;

        tracing::debug!(product_id = %product_id, "product updated");
        self.publish(ProductStoreEvent::ProductUpdated {
            product_id,
            occurred_at: Utc::now(),
        });
    }

    /// Remove every product whose id is in `ids`, keeping the order of the
    /// rest. The cursor is pulled back onto the last page if it would
    /// otherwise point past it.
    pub fn delete_products<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ProductId>,
    {
        let ids: HashSet<ProductId> = ids.into_iter().collect();
        let removed: Vec<ProductId> = self
            .state
            .products
            .iter()
            .filter(|p| ids.contains(&p.id))
            .map(|p| p.id)
            .collect();

        let page_in_range = pagination::clamp_page(self.state.current_page, self.state.total_pages)
            == self.state.current_page;
        if removed.is_empty() && page_in_range {
            return;
        }

        let state = self.state_mut();
        state.products.retain(|p| !ids.contains(&p.id));
        state.recompute_total_pages();
        state.clamp_current_page();

        tracing::info!(
            removed = removed.len(),
            total_pages = self.state.total_pages,
            current_page = self.state.current_page,
            "products deleted"
        );
        self.publish(ProductStoreEvent::ProductsDeleted {
            product_ids: removed,
            occurred_at: Utc::now(),
        });
    }

    /// Replace the whole collection. Repeated ids keep their first
    /// occurrence.
    pub fn set_products(&mut self, products: Vec<Product>) {
        let products = dedup_by_id(products);
        let count = products.len();

        let state = self.state_mut();
        state.products = products;
        state.recompute_total_pages();
        state.clamp_current_page();

        tracing::info!(count, "products replaced");
        self.publish(ProductStoreEvent::ProductsReplaced {
            count,
            occurred_at: Utc::now(),
        });
    }

    /// Move the cursor. Not clamped: callers keep `page` within
    /// `[1, total_pages]`.
    pub fn set_current_page(&mut self, page: usize) {
        if page == self.state.current_page {
            return;
        }
        self.state_mut().current_page = page;

        tracing::debug!(page, total_pages = self.state.total_pages, "page changed");
        self.publish(ProductStoreEvent::PageChanged {
            page,
            occurred_at: Utc::now(),
        });
    }

    /// Products on the current page of the unfiltered collection.
    pub fn list_page(&self) -> Vec<Product> {
        self.state.list_page()
    }

    /// Products on the current page after filtering the whole collection.
    pub fn list_page_filtered(&self, filter: &ProductFilter) -> Vec<Product> {
        self.state.page(filter).items
    }

    /// Current page after filtering, with pager context.
    pub fn page(&self, filter: &ProductFilter) -> Page<Product> {
        self.state.page(filter)
    }

    fn fresh_id(&self) -> ProductId {
        loop {
            let id = ProductId::new();
            if !self.state.contains(&id) {
                return id;
            }
        }
    }

    fn state_mut(&mut self) -> &mut ProductCollectionState {
        Arc::make_mut(&mut self.state)
    }

    fn publish(&self, event: ProductStoreEvent) {
        let event_type = event.event_type();
        let message = StateChanged {
            event,
            snapshot: self.snapshot(),
        };
        if let Err(err) = self.bus.publish(message) {
            tracing::warn!(event_type, error = ?err, "failed to publish store snapshot");
        }
    }
}
