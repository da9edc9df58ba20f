//! Product catalog query core.
//!
//! This crate contains the product list pipeline of the partner portal,
//! implemented purely as deterministic in-memory logic (no IO, no HTTP, no
//! storage): staged filtering, stable sorting, pagination, selection
//! bookkeeping and the delegation boundary for bulk mutations.

pub mod controller;
pub mod gateway;
pub mod product;
pub mod query;
pub mod segment;
pub mod selection;

pub use controller::{KeyContext, NavKey, ProductListController, QueryInput};
pub use gateway::{BulkUpdate, GatewayError, ProductMutationGateway};
pub use product::{Product, ProductStatus};
pub use query::{
    parse_sort, CategoryFilter, ProductQuery, QueryOutcome, SortKey, SortOrder, StatusFilter,
    PAGE_SIZE,
};
pub use segment::Segment;
pub use selection::SelectionState;
