//! placemat: data preparation core for dashboard front-ends.
//!
//! Two independent leaf components, both consumed by an external
//! presentation layer. This facade crate re-exports them and layers
//! file-based configuration on top so that integration tests and embedding
//! applications can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! raw rows ────► loader ────► Table ────► summary ────► SummaryStatistics
//!
//! text values ─► normalizer ─► canonical text values
//! ```
//!
//! Rendering, layout, and interaction belong to the presentation layer;
//! everything here is a pure, synchronous transformation over caller-owned
//! values.
//!
//! # Example
//!
//! ```
//! use placemat::{load, normalize_column, summarize, ColumnType, NormalForm, Row};
//!
//! let rows: Vec<Row> = vec![
//!     serde_json::from_str(r#"{"name": "caf\u00e9", "score": "10"}"#)?,
//!     serde_json::from_str(r#"{"name": "cafe\u0301", "score": "20"}"#)?,
//! ];
//!
//! let table = load(&rows)?;
//! assert_eq!(table.column("score").unwrap().ty, ColumnType::Numeric);
//!
//! // Both spellings of "café" collapse to one grouping key.
//! let name = table.column("name").unwrap();
//! let keys = normalize_column(name.values.iter().map(|v| v.as_str()), NormalForm::Composed);
//! assert_eq!(keys[0], keys[1]);
//!
//! let summary = summarize(&table);
//! let score = summary.get("score").unwrap();
//! assert_eq!((score.count, score.mean, score.min, score.max), (2, Some(15.0), Some(10.0), Some(20.0)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;

pub use placemat_core::{
    load, load_values, load_with, summarize, Column, ColumnSummary, ColumnType, Error,
    LoadOptions, Result, Row, SummaryStatistics, Table, Value,
};
pub use placemat_text::{is_normalized, normalize, normalize_column, NormalForm, UnknownFormError};
