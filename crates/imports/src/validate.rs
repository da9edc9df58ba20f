use std::io::Read;

use serde::{Deserialize, Serialize};

use partnerdesk_catalog::ProductStatus;
use partnerdesk_core::{DomainError, DomainResult};

/// Columns the upload template requires, in any order.
const REQUIRED_HEADERS: [&str; 5] = ["name", "category", "status", "price", "inventory"];

/// A row that passed validation, ready for the create flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub status: ProductStatus,
    /// Price in the smallest currency unit.
    pub price: u64,
    pub inventory: i64,
}

/// One problem found in one row. `line` is the 1-based line in the uploaded
/// file (the header is line 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowIssue {
    pub line: u64,
    pub field: String,
    pub reason: String,
}

/// Outcome of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    pub drafts: Vec<ProductDraft>,
    pub issues: Vec<RowIssue>,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate an uploaded CSV in one pass.
///
/// Per-row problems become [`RowIssue`]s and the pass continues; only a
/// malformed header (missing required columns) or an unreadable stream fails
/// the whole upload.
pub fn validate_csv<R: Read>(reader: R) -> DomainResult<ImportReport> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| DomainError::validation(format!("unreadable header row: {e}")))?
        .clone();

    let column = |name: &'static str| -> DomainResult<usize> {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::validation(format!("missing required column: {name}")))
    };

    let name_col = column("name")?;
    let category_col = column("category")?;
    let status_col = column("status")?;
    let price_col = column("price")?;
    let inventory_col = column("inventory")?;

    let mut report = ImportReport::default();

    for (index, record) in csv_reader.records().enumerate() {
        // Line 1 is the header; data rows start at 2.
        let line = (index as u64) + 2;

        let record = match record {
            Ok(r) => r,
            Err(e) => {
                report.issues.push(RowIssue {
                    line,
                    field: "row".to_string(),
                    reason: format!("unparseable row: {e}"),
                });
                continue;
            }
        };

        let field = |col: usize| record.get(col).unwrap_or("");

        let name = field(name_col).to_string();
        if name.is_empty() {
            report.issues.push(RowIssue {
                line,
                field: "name".to_string(),
                reason: "name must not be empty".to_string(),
            });
        }

        let category = field(category_col).to_string();
        if category.is_empty() {
            report.issues.push(RowIssue {
                line,
                field: "category".to_string(),
                reason: "category must not be empty".to_string(),
            });
        }

        let status = match ProductStatus::parse(field(status_col)) {
            Some(s) => Some(s),
            None => {
                report.issues.push(RowIssue {
                    line,
                    field: "status".to_string(),
                    reason: format!(
                        "unknown status {:?}; expected one of active, inactive, draft, archived",
                        field(status_col)
                    ),
                });
                None
            }
        };

        let price = match field(price_col).parse::<u64>() {
            Ok(p) => Some(p),
            Err(_) => {
                report.issues.push(RowIssue {
                    line,
                    field: "price".to_string(),
                    reason: format!("price {:?} is not a non-negative integer", field(price_col)),
                });
                None
            }
        };

        let inventory = match field(inventory_col).parse::<i64>() {
            Ok(v) => Some(v),
            Err(_) => {
                report.issues.push(RowIssue {
                    line,
                    field: "inventory".to_string(),
                    reason: format!("inventory {:?} is not an integer", field(inventory_col)),
                });
                None
            }
        };

        if let (Some(status), Some(price), Some(inventory)) = (status, price, inventory) {
            if !name.is_empty() && !category.is_empty() {
                report.drafts.push(ProductDraft {
                    name,
                    category,
                    status,
                    price,
                    inventory,
                });
            }
        }
    }

    Ok(report)
}

/// Convenience wrapper for in-memory uploads.
pub fn validate_csv_str(content: &str) -> DomainResult<ImportReport> {
    validate_csv(content.as_bytes())
}
