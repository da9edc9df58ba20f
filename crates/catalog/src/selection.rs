//! Selection bookkeeping for bulk operations.
//!
//! The selection set deliberately persists across filter changes even when a
//! selected row becomes hidden; that mirrors the portal's observed behavior
//! and is flagged to product owners rather than silently corrected here.

use std::collections::HashSet;

use partnerdesk_core::ProductId;

/// Set of product ids currently checked for bulk operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: HashSet<ProductId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select-all semantics: checked selects exactly the ids passed in (the
    /// currently-filtered set, never the unfiltered universe); unchecked
    /// empties the selection.
    pub fn select_all<I>(&mut self, filtered_ids: I, checked: bool)
    where
        I: IntoIterator<Item = ProductId>,
    {
        if checked {
            self.selected = filtered_ids.into_iter().collect();
        } else {
            self.selected.clear();
        }
    }

    /// Add or remove a single id.
    pub fn toggle(&mut self, id: ProductId, checked: bool) {
        if checked {
            self.selected.insert(id);
        } else {
            self.selected.remove(&id);
        }
    }

    pub fn is_selected(&self, id: &ProductId) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Selected ids in sorted order, for deterministic gateway dispatch.
    pub fn ids(&self) -> Vec<ProductId> {
        let mut ids: Vec<ProductId> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }
}
