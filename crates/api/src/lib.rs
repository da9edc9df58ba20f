//! Read-only HTTP facade over the query cores.
//!
//! This crate is the "data-loading collaborator" of the portal: it holds the
//! product collection and notification feed in memory and serves the query
//! pipeline over HTTP. It carries no auth, no persistence and no upload
//! endpoint.

pub mod app;
pub mod seed;
