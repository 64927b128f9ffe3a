//! placemat-core: table data model, loader, and summary statistics.
//!
//! This crate is the tabular half of placemat. It ingests raw row mappings
//! produced by an external format reader, validates them into an immutable
//! [`Table`], and computes numeric aggregates for rendering.
//!
//! # Architecture
//!
//! ```text
//! raw rows ──► loader ──► Table ──► summary ──► SummaryStatistics
//! ```
//!
//! Everything here is a pure, synchronous transformation over caller-owned
//! values; there is no shared state between calls.

pub mod error;
pub mod loader;
pub mod summary;
pub mod types;

pub use error::{Error, Result};
pub use loader::{load, load_values, load_with, LoadOptions, Row};
pub use summary::{summarize, ColumnSummary, SummaryStatistics};
pub use types::{Column, ColumnType, Table, Value};
