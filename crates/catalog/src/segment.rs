//! Tab/segment filter: the product list's tab bar maps UI labels onto status
//! values through an explicit enum, not a loose string dictionary.

use serde::{Deserialize, Serialize};

use crate::product::ProductStatus;

/// One tab of the product list's segment bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    #[default]
    All,
    Active,
    Inactive,
    Draft,
    Archived,
}

impl Segment {
    /// Map a rendered tab label to its segment. Unmapped labels fall back to
    /// [`Segment::All`] (pass-through), matching the portal's tab bar.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Aktiv" => Segment::Active,
            "Inaktiv" => Segment::Inactive,
            "Entwurf" => Segment::Draft,
            "Archiviert" => Segment::Archived,
            // "Alle" and anything unrecognized
            _ => Segment::All,
        }
    }

    /// The status this segment narrows to; `None` passes everything through.
    pub fn status(self) -> Option<ProductStatus> {
        match self {
            Segment::All => None,
            Segment::Active => Some(ProductStatus::Active),
            Segment::Inactive => Some(ProductStatus::Inactive),
            Segment::Draft => Some(ProductStatus::Draft),
            Segment::Archived => Some(ProductStatus::Archived),
        }
    }

    pub fn matches(self, status: ProductStatus) -> bool {
        match self.status() {
            None => true,
            Some(wanted) => status == wanted,
        }
    }
}
