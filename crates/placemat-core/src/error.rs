//! Error types for placemat-core.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything the ingestion pipeline can fail with.
///
/// Operations either fully succeed or return one of these; no partial
/// tables are ever handed back.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required argument was absent or of the wrong shape, e.g. a raw row
    /// that is not a JSON object.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A cell or column shape that cannot be reconciled into the schema.
    /// Row-level raggedness is reconciled by missing-value filling and does
    /// not raise this; unreconcilable cases (nested cell values, duplicate
    /// column names, length violations) do.
    #[error("schema mismatch in column {column:?}: {reason}")]
    SchemaMismatch { column: String, reason: String },

    /// Reserved kind for operations that require at least one row.
    /// `summarize` does not raise it: zero-row tables summarize to an empty
    /// mapping instead.
    #[error("table has no rows")]
    EmptyTable,
}
