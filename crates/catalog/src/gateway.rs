//! The side-effect boundary for bulk actions.
//!
//! The query core only gathers the id set and the requested changes; the
//! actual mutation (network call, file generation, persistence) happens
//! behind this trait in an external collaborator. Keeping the seam here makes
//! the core testable without mocking network or storage.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use partnerdesk_core::ProductId;

use crate::product::ProductStatus;

/// Failure reported by a mutation gateway. How these are produced (HTTP
/// status, IO error, ...) is entirely the collaborator's concern.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("bulk action rejected: {0}")]
    Rejected(String),

    #[error("bulk action failed: {0}")]
    Failed(String),
}

/// Field changes applied to every product in a bulk edit. `None` leaves the
/// field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkUpdate {
    pub status: Option<ProductStatus>,
    pub category: Option<String>,
    pub price: Option<u64>,
}

/// External collaborator performing the effectful bulk operations.
pub trait ProductMutationGateway {
    fn bulk_delete(&self, ids: &[ProductId]) -> Result<(), GatewayError>;

    fn bulk_edit(&self, ids: &[ProductId], update: &BulkUpdate) -> Result<(), GatewayError>;

    fn bulk_export(&self, ids: &[ProductId]) -> Result<(), GatewayError>;

    fn bulk_toggle_visibility(&self, ids: &[ProductId], visible: bool) -> Result<(), GatewayError>;

    fn duplicate(&self, ids: &[ProductId]) -> Result<(), GatewayError>;
}
