//! Row selection for bulk delete.

use std::collections::HashSet;

use stockboard_core::ProductId;

use crate::product::Product;

/// Selected product ids, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<ProductId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Select `id`, or deselect it if already selected.
    pub fn toggle(&mut self, id: ProductId) {
        if let Some(pos) = self.ids.iter().position(|s| *s == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    /// Whether every visible row is selected. An empty page is never "all
    /// selected".
    pub fn is_all_selected(&self, visible: &[Product]) -> bool {
        !visible.is_empty() && visible.iter().all(|p| self.contains(&p.id))
    }

    /// Header checkbox: clear when every visible row is selected, otherwise
    /// select exactly the visible rows.
    pub fn toggle_all(&mut self, visible: &[Product]) {
        if self.is_all_selected(visible) {
            self.ids.clear();
        } else {
            self.ids = visible.iter().map(|p| p.id).collect();
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop ids that no longer exist (e.g. after a delete).
    pub fn retain_existing(&mut self, products: &[Product]) {
        let live: HashSet<ProductId> = products.iter().map(|p| p.id).collect();
        self.ids.retain(|id| live.contains(id));
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    /// Hand the selection over for a bulk delete, leaving it empty.
    pub fn take(&mut self) -> HashSet<ProductId> {
        self.ids.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Category, NewProduct, Price};

    fn rows(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| {
                NewProduct::new(format!("p{i}"), Category::Apparel, 1, Price::from_cents(100))
                    .with_id(ProductId::new())
            })
            .collect()
    }

    #[test]
    fn toggle_selects_then_deselects() {
        let id = ProductId::new();
        let mut selection = Selection::new();
        selection.toggle(id);
        assert!(selection.contains(&id));
        selection.toggle(id);
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_all_selects_visible_rows_then_clears() {
        let visible = rows(3);
        let mut selection = Selection::new();
        selection.toggle(visible[0].id);

        selection.toggle_all(&visible);
        assert!(selection.is_all_selected(&visible));
        assert_eq!(selection.len(), 3);

        selection.toggle_all(&visible);
        assert!(selection.is_empty());
    }

    #[test]
    fn empty_page_is_never_all_selected() {
        assert!(!Selection::new().is_all_selected(&[]));
    }

    #[test]
    fn retain_existing_drops_deleted_ids() {
        let visible = rows(3);
        let mut selection = Selection::new();
        selection.toggle_all(&visible);

        selection.retain_existing(&visible[1..]);
        assert_eq!(selection.ids(), &[visible[1].id, visible[2].id]);
    }

    #[test]
    fn take_empties_the_selection() {
        let visible = rows(2);
        let mut selection = Selection::new();
        selection.toggle_all(&visible);

        let ids = selection.take();
        assert_eq!(ids.len(), 2);
        assert!(selection.is_empty());
    }
}
