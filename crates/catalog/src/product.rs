use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use partnerdesk_core::ProductId;

/// Product status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Inactive,
    Draft,
    Archived,
}

impl ProductStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
            ProductStatus::Draft => "draft",
            ProductStatus::Archived => "archived",
        }
    }

    /// Parse a status label (case-insensitive). Used at the import and HTTP
    /// boundaries; inside the query core the type is closed.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Some(ProductStatus::Active),
            "inactive" => Some(ProductStatus::Inactive),
            "draft" => Some(ProductStatus::Draft),
            "archived" => Some(ProductStatus::Archived),
            _ => None,
        }
    }
}

impl core::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product record as supplied wholesale by the data source.
///
/// The query core treats these as read-only facts: all mutation (bulk edit,
/// delete, export) is delegated through [`crate::ProductMutationGateway`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub status: ProductStatus,
    /// Price in the smallest currency unit (e.g. cents).
    pub price: u64,
    pub inventory: i64,
    pub views: u64,
    pub sales: u64,
    pub created_at: DateTime<Utc>,
}
