//! CSV bulk-upload row validation.
//!
//! A single bounded pass over the uploaded file: every row is checked
//! independently, bad rows are collected as issues instead of aborting the
//! pass, and the rows that survive become [`ProductDraft`]s ready for the
//! upstream create flow. The HTTP transport around this is not part of this
//! crate.

pub mod validate;

pub use validate::{validate_csv, validate_csv_str, ImportReport, ProductDraft, RowIssue};
