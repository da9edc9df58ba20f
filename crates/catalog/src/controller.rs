//! Product list controller: one owner for the whole screen state.
//!
//! The controller is single-threaded and synchronous. Every input runs to
//! completion and replaces state by whole value; nothing here blocks,
//! suspends or performs IO. Effectful bulk actions are delegated through
//! [`ProductMutationGateway`].

use partnerdesk_core::ProductId;

use crate::gateway::{BulkUpdate, GatewayError, ProductMutationGateway};
use crate::product::Product;
use crate::query::{self, CategoryFilter, ProductQuery, QueryOutcome, SortKey, SortOrder, StatusFilter};
use crate::segment::Segment;
use crate::selection::SelectionState;

/// Row-navigation key: `j` moves forward, `k` moves back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Prev,
}

/// Where a key event came from. Navigation is ignored while the user types
/// in a text input or holds a modifier key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    pub in_text_input: bool,
    pub modifier_held: bool,
}

impl KeyContext {
    fn suppresses_navigation(self) -> bool {
        self.in_text_input || self.modifier_held
    }
}

/// Inputs the screen can feed the controller. Pure state transitions; the
/// bulk-action methods on [`ProductListController`] are separate because they
/// touch the gateway.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryInput {
    SetSearch(String),
    SetStatusFilter(StatusFilter),
    SetCategoryFilter(CategoryFilter),
    SetSegment(Segment),
    SetSort(SortKey, SortOrder),
    SetPage(usize),
    SelectAll(bool),
    Toggle(ProductId, bool),
    Key(NavKey, KeyContext),
}

/// Owns the product slice and all query-relative state of the list screen.
#[derive(Debug, Clone)]
pub struct ProductListController {
    products: Vec<Product>,
    query: ProductQuery,
    selection: SelectionState,
    /// Focused row index into the *filtered* list; `None` means no focus
    /// (the portal's `-1`).
    focused: Option<usize>,
}

impl ProductListController {
    /// The product collection is supplied wholesale at construction and never
    /// mutated by the controller.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            query: ProductQuery::default(),
            selection: SelectionState::new(),
            focused: None,
        }
    }

    pub fn query(&self) -> &ProductQuery {
        &self.query
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn focused_row(&self) -> Option<usize> {
        self.focused
    }

    /// The filtered rows, in input order (before sorting/paging).
    pub fn filtered(&self) -> Vec<&Product> {
        query::filter(&self.products, &self.query)
    }

    /// The page the user currently sees.
    pub fn visible_page(&self) -> QueryOutcome<'_> {
        query::run(&self.products, &self.query)
    }

    /// Apply one input and settle into the next state.
    pub fn apply(&mut self, input: QueryInput) {
        match input {
            QueryInput::SetSearch(term) => {
                self.query.search_term = term;
                self.reset_cursor();
            }
            QueryInput::SetStatusFilter(filter) => {
                self.query.status_filter = filter;
                self.reset_cursor();
            }
            QueryInput::SetCategoryFilter(filter) => {
                self.query.category_filter = filter;
                self.reset_cursor();
            }
            QueryInput::SetSegment(segment) => {
                self.query.segment = segment;
                self.reset_cursor();
            }
            QueryInput::SetSort(key, order) => {
                self.query.sort_key = key;
                self.query.sort_order = order;
            }
            QueryInput::SetPage(page) => {
                self.query.page = page;
            }
            QueryInput::SelectAll(checked) => {
                let filtered_ids: Vec<ProductId> =
                    self.filtered().iter().map(|p| p.id.clone()).collect();
                self.selection.select_all(filtered_ids, checked);
            }
            QueryInput::Toggle(id, checked) => {
                self.selection.toggle(id, checked);
            }
            QueryInput::Key(key, ctx) => {
                self.move_focus(key, ctx);
            }
        }
        tracing::debug!(
            filtered = self.filtered().len(),
            selected = self.selection.len(),
            focused = ?self.focused,
            "query state settled"
        );
    }

    /// Any filter change resets page and keyboard focus to their initial
    /// values. The selection set is intentionally left alone, even when
    /// selected rows just became hidden.
    fn reset_cursor(&mut self) {
        self.query.page = 0;
        self.focused = None;
    }

    fn move_focus(&mut self, key: NavKey, ctx: KeyContext) {
        if ctx.suppresses_navigation() {
            return;
        }
        let count = self.filtered().len();
        if count == 0 {
            return;
        }
        let last = count - 1;
        self.focused = Some(match (self.focused, key) {
            // From no focus, both keys land on the first row.
            (None, _) => 0,
            (Some(i), NavKey::Next) => i.saturating_add(1).min(last),
            (Some(i), NavKey::Prev) => i.saturating_sub(1),
        });
    }

    fn selected_ids(&self) -> Vec<ProductId> {
        self.selection.ids()
    }

    /// Delete the selected products through the gateway; the selection is
    /// cleared only once the gateway accepted the request.
    pub fn bulk_delete<G: ProductMutationGateway>(
        &mut self,
        gateway: &G,
    ) -> Result<(), GatewayError> {
        let ids = self.selected_ids();
        gateway.bulk_delete(&ids)?;
        self.selection.clear();
        Ok(())
    }

    pub fn bulk_edit<G: ProductMutationGateway>(
        &self,
        gateway: &G,
        update: &BulkUpdate,
    ) -> Result<(), GatewayError> {
        gateway.bulk_edit(&self.selected_ids(), update)
    }

    pub fn bulk_export<G: ProductMutationGateway>(&self, gateway: &G) -> Result<(), GatewayError> {
        gateway.bulk_export(&self.selected_ids())
    }

    pub fn bulk_toggle_visibility<G: ProductMutationGateway>(
        &self,
        gateway: &G,
        visible: bool,
    ) -> Result<(), GatewayError> {
        gateway.bulk_toggle_visibility(&self.selected_ids(), visible)
    }

    /// Duplicate the selected products; clears the selection on success so
    /// the screen lands on an unselected list containing the copies.
    pub fn duplicate<G: ProductMutationGateway>(
        &mut self,
        gateway: &G,
    ) -> Result<(), GatewayError> {
        let ids = self.selected_ids();
        gateway.duplicate(&ids)?;
        self.selection.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use chrono::{TimeZone, Utc};

    use crate::product::ProductStatus;

    fn product(id: &str, name: &str, category: &str, status: ProductStatus) -> Product {
        Product {
            id: id.parse().unwrap(),
            name: name.to_string(),
            category: category.to_string(),
            status,
            price: 1000,
            inventory: 5,
            views: 0,
            sales: 0,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn controller() -> ProductListController {
        ProductListController::new(vec![
            product("p1", "Alpine Jacket", "Outdoor", ProductStatus::Active),
            product("p2", "Trail Shoes", "Outdoor", ProductStatus::Draft),
            product("p3", "Espresso Grinder", "Kitchen", ProductStatus::Active),
        ])
    }

    /// Records every gateway call; can be told to fail.
    #[derive(Default)]
    struct RecordingGateway {
        calls: RefCell<Vec<String>>,
        fail: bool,
    }

    impl RecordingGateway {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn record(&self, call: String) -> Result<(), GatewayError> {
            if self.fail {
                return Err(GatewayError::Failed("gateway down".to_string()));
            }
            self.calls.borrow_mut().push(call);
            Ok(())
        }
    }

    impl ProductMutationGateway for RecordingGateway {
        fn bulk_delete(&self, ids: &[ProductId]) -> Result<(), GatewayError> {
            self.record(format!("delete:{}", ids.len()))
        }

        fn bulk_edit(&self, ids: &[ProductId], update: &BulkUpdate) -> Result<(), GatewayError> {
            self.record(format!("edit:{}:{:?}", ids.len(), update.status))
        }

        fn bulk_export(&self, ids: &[ProductId]) -> Result<(), GatewayError> {
            self.record(format!("export:{}", ids.len()))
        }

        fn bulk_toggle_visibility(
            &self,
            ids: &[ProductId],
            visible: bool,
        ) -> Result<(), GatewayError> {
            self.record(format!("visibility:{}:{visible}", ids.len()))
        }

        fn duplicate(&self, ids: &[ProductId]) -> Result<(), GatewayError> {
            self.record(format!("duplicate:{}", ids.len()))
        }
    }

    #[test]
    fn select_all_covers_only_the_filtered_set() {
        let mut c = controller();
        c.apply(QueryInput::SetCategoryFilter(CategoryFilter::Only(
            "Outdoor".to_string(),
        )));
        c.apply(QueryInput::SelectAll(true));

        assert_eq!(c.selection().len(), 2);
        assert!(!c.selection().is_selected(&"p3".parse().unwrap()));
    }

    #[test]
    fn select_all_false_empties_regardless_of_filter() {
        let mut c = controller();
        c.apply(QueryInput::SelectAll(true));
        c.apply(QueryInput::SetSegment(Segment::Draft));
        c.apply(QueryInput::SelectAll(false));
        assert!(c.selection().is_empty());
    }

    #[test]
    fn filter_change_keeps_selection_but_resets_cursor() {
        let mut c = controller();
        c.apply(QueryInput::SetPage(3));
        c.apply(QueryInput::Key(NavKey::Next, KeyContext::default()));
        c.apply(QueryInput::Toggle("p1".parse().unwrap(), true));

        // p1 becomes hidden by this filter; its selection survives anyway.
        c.apply(QueryInput::SetSearch("Espresso".to_string()));

        assert_eq!(c.query().page, 0);
        assert_eq!(c.focused_row(), None);
        assert!(c.selection().is_selected(&"p1".parse().unwrap()));
    }

    #[test]
    fn focus_advances_and_clamps_at_last_row() {
        let mut c = controller();
        c.apply(QueryInput::SetCategoryFilter(CategoryFilter::Only(
            "Outdoor".to_string(),
        )));
        // 2 filtered rows; three presses clamp at index 1, not 2.
        for _ in 0..3 {
            c.apply(QueryInput::Key(NavKey::Next, KeyContext::default()));
        }
        assert_eq!(c.focused_row(), Some(1));
    }

    #[test]
    fn focus_retreats_and_clamps_at_zero() {
        let mut c = controller();
        c.apply(QueryInput::Key(NavKey::Next, KeyContext::default()));
        c.apply(QueryInput::Key(NavKey::Prev, KeyContext::default()));
        c.apply(QueryInput::Key(NavKey::Prev, KeyContext::default()));
        assert_eq!(c.focused_row(), Some(0));
    }

    #[test]
    fn navigation_ignored_in_text_input_or_with_modifier() {
        let mut c = controller();
        c.apply(QueryInput::Key(
            NavKey::Next,
            KeyContext {
                in_text_input: true,
                modifier_held: false,
            },
        ));
        assert_eq!(c.focused_row(), None);

        c.apply(QueryInput::Key(
            NavKey::Next,
            KeyContext {
                in_text_input: false,
                modifier_held: true,
            },
        ));
        assert_eq!(c.focused_row(), None);
    }

    #[test]
    fn navigation_noop_with_zero_filtered_rows() {
        let mut c = controller();
        c.apply(QueryInput::SetSearch("nonexistent-string-xyz".to_string()));
        c.apply(QueryInput::Key(NavKey::Next, KeyContext::default()));
        assert_eq!(c.focused_row(), None);
        assert!(c.visible_page().items.is_empty());
    }

    #[test]
    fn sort_change_does_not_reset_focus() {
        let mut c = controller();
        c.apply(QueryInput::Key(NavKey::Next, KeyContext::default()));
        c.apply(QueryInput::SetSort(SortKey::Price, SortOrder::Desc));
        assert_eq!(c.focused_row(), Some(0));
    }

    #[test]
    fn bulk_delete_dispatches_sorted_ids_and_clears_selection() {
        let mut c = controller();
        c.apply(QueryInput::Toggle("p3".parse().unwrap(), true));
        c.apply(QueryInput::Toggle("p1".parse().unwrap(), true));

        let gateway = RecordingGateway::default();
        c.bulk_delete(&gateway).unwrap();

        assert_eq!(*gateway.calls.borrow(), vec!["delete:2".to_string()]);
        assert!(c.selection().is_empty());
    }

    #[test]
    fn failed_delete_keeps_selection() {
        let mut c = controller();
        c.apply(QueryInput::Toggle("p1".parse().unwrap(), true));

        let gateway = RecordingGateway::failing();
        let err = c.bulk_delete(&gateway).unwrap_err();
        assert!(matches!(err, GatewayError::Failed(_)));
        assert_eq!(c.selection().len(), 1);
    }

    #[test]
    fn export_and_edit_leave_selection_alone() {
        let mut c = controller();
        c.apply(QueryInput::SelectAll(true));

        let gateway = RecordingGateway::default();
        c.bulk_export(&gateway).unwrap();
        c.bulk_edit(
            &gateway,
            &BulkUpdate {
                status: Some(ProductStatus::Inactive),
                ..BulkUpdate::default()
            },
        )
        .unwrap();
        c.bulk_toggle_visibility(&gateway, false).unwrap();

        assert_eq!(c.selection().len(), 3);
        assert_eq!(gateway.calls.borrow().len(), 3);
    }

    #[test]
    fn duplicate_clears_selection_on_success() {
        let mut c = controller();
        c.apply(QueryInput::Toggle("p2".parse().unwrap(), true));

        let gateway = RecordingGateway::default();
        c.duplicate(&gateway).unwrap();
        assert_eq!(*gateway.calls.borrow(), vec!["duplicate:1".to_string()]);
        assert!(c.selection().is_empty());
    }
}
