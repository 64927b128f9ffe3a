//! Core types for placemat-core.
//!
//! This module defines the fundamental data structures shared across the
//! pipeline: the cell [`Value`], the inferred [`ColumnType`], and the
//! validated, immutable [`Table`].

use serde::Serialize;

/// A single table cell.
///
/// `Missing` is a distinct marker: it is not `Number(0.0)` and not
/// `Text("")`. Downstream aggregation must never conflate "no data" with
/// "data is zero".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
    /// Absent cell. Serializes as JSON `null`.
    Missing,
}

impl Value {
    /// Numeric view of the cell, `None` for text and missing cells.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text view of the cell, `None` for numeric and missing cells.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

/// Column type inferred by the loader.
///
/// A column is `Numeric` only when every non-missing cell is numeric; a
/// single non-numeric cell demotes the whole column to `Text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Numeric,
    Text,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Numeric => write!(f, "numeric"),
            ColumnType::Text => write!(f, "text"),
        }
    }
}

/// A named, homogeneous sequence of cells.
///
/// Invariant (enforced by [`Table::new`]): a `Numeric` column holds only
/// `Number`/`Missing` cells, a `Text` column only `Text`/`Missing` cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: ColumnType, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            ty,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `value` is admissible in a column of this type.
    fn admits(&self, value: &Value) -> bool {
        match (self.ty, value) {
            (_, Value::Missing) => true,
            (ColumnType::Numeric, Value::Number(_)) => true,
            (ColumnType::Text, Value::Text(_)) => true,
            _ => false,
        }
    }
}

/// A validated, immutable table: an ordered sequence of named columns.
///
/// Invariants, checked at construction and unbreakable afterwards (fields
/// are private, all accessors borrow):
///
/// - every column has exactly `row_count` cells
/// - column names are unique
/// - cell kinds agree with the declared [`ColumnType`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Build a table from columns, validating all invariants.
    ///
    /// `row_count` is passed explicitly so that a table with zero columns
    /// (rows that carried no keys at all) still remembers how many rows it
    /// was built from.
    pub fn new(columns: Vec<Column>, row_count: usize) -> crate::Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for col in &columns {
            if !seen.insert(col.name.as_str()) {
                return Err(crate::Error::SchemaMismatch {
                    column: col.name.clone(),
                    reason: "duplicate column name".into(),
                });
            }
            if col.len() != row_count {
                return Err(crate::Error::SchemaMismatch {
                    column: col.name.clone(),
                    reason: format!(
                        "column has {} cells but the table has {} rows",
                        col.len(),
                        row_count
                    ),
                });
            }
            if let Some(bad) = col.values.iter().find(|v| !col.admits(v)) {
                return Err(crate::Error::SchemaMismatch {
                    column: col.name.clone(),
                    reason: format!("cell {bad:?} does not match declared type {}", col.ty),
                });
            }
        }
        Ok(Self { columns, row_count })
    }

    /// An empty table: zero columns, zero rows.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            row_count: 0,
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Columns in schema order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in schema order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Iterate rows as slices of cell references, in schema order.
    pub fn iter_rows(&self) -> impl Iterator<Item = Vec<&Value>> {
        (0..self.row_count).map(move |i| self.columns.iter().map(|c| &c.values[i]).collect())
    }
}
