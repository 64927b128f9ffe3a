//! Loader: turns raw row mappings into a validated [`Table`].
//!
//! Raw input arrives as ordered JSON object maps, one per row, typically
//! produced by an external format reader (CSV, spreadsheet, HTTP body).
//! The loader unions the key sets of all rows into a schema, fills absent
//! cells with [`Value::Missing`], infers a [`ColumnType`] per column, and
//! hands back an immutable table. It never returns a half-populated table:
//! any unreconcilable cell fails the whole load.

use crate::{Column, ColumnType, Error, Result, Table, Value};

/// A raw input row: column name to untyped scalar.
///
/// `serde_json::Map` is built with `preserve_order`, so key order is
/// insertion order and the inferred schema is deterministic.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Tuning knobs for [`load_with`]. [`load`] uses the defaults.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct LoadOptions {
    /// String cell values treated as missing-markers (e.g. `"NA"`).
    ///
    /// Empty by default: an empty string is a present text value, not a
    /// missing cell, unless the embedder opts it in here.
    #[serde(default)]
    pub missing_tokens: Vec<String>,
    /// Trim surrounding whitespace before attempting to read a string cell
    /// as a number.
    #[serde(default = "default_trim_numeric")]
    pub trim_numeric: bool,
}

fn default_trim_numeric() -> bool {
    true
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            missing_tokens: Vec::new(),
            trim_numeric: default_trim_numeric(),
        }
    }
}

/// Ingest raw rows into a [`Table`] using default [`LoadOptions`].
pub fn load(rows: &[Row]) -> Result<Table> {
    load_with(rows, &LoadOptions::default())
}

/// Ingest raw rows into a [`Table`].
///
/// The schema is the union of all column names across rows, ordered by
/// first appearance; a row lacking a key records [`Value::Missing`] for
/// that column. A column is [`ColumnType::Numeric`] only if every
/// non-missing cell is a number or a string that reads as a finite number;
/// otherwise the column is text and numeric cells are carried as their
/// display text.
pub fn load_with(rows: &[Row], opts: &LoadOptions) -> Result<Table> {
    let names = schema_union(rows);
    let mut columns = Vec::with_capacity(names.len());
    for name in &names {
        columns.push(build_column(name, rows, opts)?);
    }
    tracing::debug!(
        rows = rows.len(),
        columns = columns.len(),
        "loaded table from raw rows"
    );
    Table::new(columns, rows.len())
}

/// Ingest rows held as untyped JSON values.
///
/// Fails with [`Error::InvalidInput`] if any element is not a JSON object.
pub fn load_values(rows: &[serde_json::Value]) -> Result<Table> {
    let rows = rows
        .iter()
        .map(|value| match value {
            serde_json::Value::Object(map) => Ok(map.clone()),
            other => Err(Error::InvalidInput(format!(
                "row must be a JSON object, got {}",
                kind_of(other)
            ))),
        })
        .collect::<Result<Vec<Row>>>()?;
    load(&rows)
}

// ---------------------------------------------------------------------------
// Schema inference
// ---------------------------------------------------------------------------

/// Union of column names across all rows, in order of first appearance.
fn schema_union(rows: &[Row]) -> Vec<String> {
    let mut names = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for row in rows {
        for key in row.keys() {
            if seen.insert(key.clone()) {
                names.push(key.clone());
            }
        }
    }
    names
}

/// One raw cell after scalar coercion, before type inference.
enum Cell<'a> {
    Missing,
    Number(f64),
    Text(&'a str),
    Bool(bool),
}

fn build_column(name: &str, rows: &[Row], opts: &LoadOptions) -> Result<Column> {
    let mut cells = Vec::with_capacity(rows.len());
    for row in rows {
        cells.push(scan_cell(name, row.get(name), opts)?);
    }

    let numeric = cells.iter().all(|cell| match cell {
        Cell::Missing | Cell::Number(_) => true,
        Cell::Text(s) => parse_numeric(s, opts).is_some(),
        Cell::Bool(_) => false,
    });
    let ty = if numeric {
        ColumnType::Numeric
    } else {
        ColumnType::Text
    };

    let values = cells
        .into_iter()
        .map(|cell| materialize(cell, ty, opts))
        .collect();
    Ok(Column::new(name, ty, values))
}

/// Coerce one raw JSON value into a scalar cell.
///
/// `null` and absent keys are missing; nested arrays/objects are the
/// unreconcilable case and fail the load.
fn scan_cell<'a>(
    name: &str,
    raw: Option<&'a serde_json::Value>,
    opts: &LoadOptions,
) -> Result<Cell<'a>> {
    use serde_json::Value as Raw;

    Ok(match raw {
        None | Some(Raw::Null) => Cell::Missing,
        Some(Raw::Number(n)) => Cell::Number(n.as_f64().ok_or_else(|| Error::SchemaMismatch {
            column: name.to_string(),
            reason: format!("number {n} does not fit in an f64 cell"),
        })?),
        Some(Raw::String(s)) if opts.missing_tokens.iter().any(|t| t == s) => Cell::Missing,
        Some(Raw::String(s)) => Cell::Text(s),
        Some(Raw::Bool(b)) => Cell::Bool(*b),
        Some(other) => {
            return Err(Error::SchemaMismatch {
                column: name.to_string(),
                reason: format!("nested {} values cannot be table cells", kind_of(other)),
            })
        }
    })
}

fn materialize(cell: Cell<'_>, ty: ColumnType, opts: &LoadOptions) -> Value {
    match (ty, cell) {
        (_, Cell::Missing) => Value::Missing,
        (ColumnType::Numeric, Cell::Number(n)) => Value::Number(n),
        // Type inference already proved these strings parse; a non-parsing
        // string in a numeric column is unreachable, but stay total.
        (ColumnType::Numeric, Cell::Text(s)) => match parse_numeric(s, opts) {
            Some(n) => Value::Number(n),
            None => Value::Missing,
        },
        (ColumnType::Numeric, Cell::Bool(b)) | (ColumnType::Text, Cell::Bool(b)) => {
            Value::Text(b.to_string())
        }
        (ColumnType::Text, Cell::Number(n)) => Value::Text(n.to_string()),
        (ColumnType::Text, Cell::Text(s)) => Value::Text(s.to_string()),
    }
}

/// Read a string cell as a number.
///
/// Accepts whatever `f64::from_str` accepts, minus non-finite spellings
/// (`"inf"`, `"NaN"`): those classify as text. Empty and whitespace-only
/// strings are not numbers.
fn parse_numeric(s: &str, opts: &LoadOptions) -> Option<f64> {
    let s = if opts.trim_numeric { s.trim() } else { s };
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
