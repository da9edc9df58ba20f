//! The product list query pipeline: staged filtering, stable sorting and
//! pagination.
//!
//! Every function here is a total, pure function over in-memory slices. There
//! are no error conditions: malformed inputs (unknown sort field, out-of-range
//! page) degrade to a safe default instead of failing.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::product::{Product, ProductStatus};
use crate::segment::Segment;

/// Rows per page in the product list.
pub const PAGE_SIZE: usize = 20;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a direction label, falling back to ascending.
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// Field the filtered result is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Name,
    Category,
    Price,
    Inventory,
    Views,
    Sales,
    CreatedAt,
}

impl SortKey {
    /// Parse a field name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Some(SortKey::Name),
            "category" => Some(SortKey::Category),
            "price" => Some(SortKey::Price),
            "inventory" => Some(SortKey::Inventory),
            "views" => Some(SortKey::Views),
            "sales" => Some(SortKey::Sales),
            "created_at" => Some(SortKey::CreatedAt),
            _ => None,
        }
    }

    /// Parse a field name. Unknown names fail soft to [`SortKey::Name`]
    /// rather than erroring, matching the portal's behavior.
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

/// Parse a sort field/direction pair.
///
/// An unrecognized field falls back to name **ascending** as a pair; the
/// requested direction is discarded together with the field it was meant for.
pub fn parse_sort(field: &str, order: &str) -> (SortKey, SortOrder) {
    match SortKey::parse(field) {
        Some(key) => (key, SortOrder::parse_or_default(order)),
        None => (SortKey::Name, SortOrder::Asc),
    }
}

/// Status filter: either everything or one exact status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProductStatus),
}

impl StatusFilter {
    pub fn matches(self, status: ProductStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == wanted,
        }
    }
}

/// Category filter: either everything or one exact category label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == wanted,
        }
    }
}

/// The full query a product list screen holds at any moment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductQuery {
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub category_filter: CategoryFilter,
    pub segment: Segment,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub page: usize,
}

impl ProductQuery {
    /// True when the product passes every filter stage.
    ///
    /// Stage order is fixed (search, status, category, segment); each stage
    /// narrows the previous one. `&&` short-circuits in that order.
    fn matches(&self, product: &Product, search_lower: &str) -> bool {
        let search_ok = search_lower.is_empty()
            || product.name.to_lowercase().contains(search_lower)
            || product.category.to_lowercase().contains(search_lower);

        search_ok
            && self.status_filter.matches(product.status)
            && self.category_filter.matches(&product.category)
            && self.segment.matches(product.status)
    }
}

/// One page of query results plus the bookkeeping the screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome<'a> {
    /// The visible page, in sorted order.
    pub items: Vec<&'a Product>,
    /// Count of all filtered rows (across every page).
    pub total: usize,
    /// The page actually served (echoed from the query).
    pub page: usize,
    /// Number of pages the filtered set spans (0 when empty).
    pub page_count: usize,
}

/// Apply the filter stages, preserving input order.
pub fn filter<'a>(products: &'a [Product], query: &ProductQuery) -> Vec<&'a Product> {
    let search_lower = query.search_term.trim().to_lowercase();
    products
        .iter()
        .filter(|p| query.matches(p, &search_lower))
        .collect()
}

/// Order the filtered rows in place.
///
/// `sort_by` is stable, so rows with equal keys keep their input relative
/// order. String keys compare case-insensitively.
pub fn sort(rows: &mut [&Product], key: SortKey, order: SortOrder) {
    rows.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => fold(&a.name).cmp(&fold(&b.name)),
        SortKey::Category => fold(&a.category).cmp(&fold(&b.category)),
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Inventory => a.inventory.cmp(&b.inventory),
        SortKey::Views => a.views.cmp(&b.views),
        SortKey::Sales => a.sales.cmp(&b.sales),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

// Unicode lowercase stands in for a locale-aware collation.
fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Cut one page out of the sorted rows. Out-of-range pages yield an empty
/// window, never a panic.
pub fn paginate<'a>(rows: &[&'a Product], page: usize) -> Vec<&'a Product> {
    rows.iter()
        .skip(page.saturating_mul(PAGE_SIZE))
        .take(PAGE_SIZE)
        .copied()
        .collect()
}

/// Run the full pipeline: filter, sort, paginate.
pub fn run<'a>(products: &'a [Product], query: &ProductQuery) -> QueryOutcome<'a> {
    let mut rows = filter(products, query);
    sort(&mut rows, query.sort_key, query.sort_order);

    let total = rows.len();
    let items = paginate(&rows, query.page);

    QueryOutcome {
        items,
        total,
        page: query.page,
        page_count: total.div_ceil(PAGE_SIZE),
    }
}
