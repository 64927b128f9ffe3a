//! Domain-specific assertion macros for placemat harnesses.
//!
//! These wrap the raw comparisons with context-rich failure messages that
//! make it clear which table or normalization invariant was violated.

use placemat::{ColumnType, Table, Value};

// ---------------------------------------------------------------------------
// Column assertions
// ---------------------------------------------------------------------------

/// Assert that a table column exists and was inferred to a type.
///
/// ```rust
/// assert_column_type!(table, "score", ColumnType::Numeric);
/// ```
#[macro_export]
macro_rules! assert_column_type {
    ($table:expr, $name:expr, $ty:expr) => {{
        let table: &placemat::Table = &$table;
        let name: &str = $name;
        let expected: placemat::ColumnType = $ty;
        match table.column(name) {
            Some(col) if col.ty == expected => {}
            Some(col) => panic!(
                "assert_column_type! failed for column {:?}:\n  expected: {}\n  actual:   {}",
                name, expected, col.ty
            ),
            None => panic!(
                "assert_column_type! failed: column {:?} not in schema.\n  Available: {:?}",
                name,
                table.column_names().collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert the exact cell value at (column, row index).
///
/// ```rust
/// assert_cell!(table, "score", 0, placemat::Value::Number(10.0));
/// ```
#[macro_export]
macro_rules! assert_cell {
    ($table:expr, $name:expr, $idx:expr, $value:expr) => {{
        let table: &placemat::Table = &$table;
        let name: &str = $name;
        let idx: usize = $idx;
        let expected: placemat::Value = $value;
        let col = table
            .column(name)
            .unwrap_or_else(|| panic!("assert_cell! failed: no column {name:?}"));
        match col.values.get(idx) {
            Some(actual) if *actual == expected => {}
            Some(actual) => panic!(
                "assert_cell! failed at ({:?}, {}):\n  expected: {:?}\n  actual:   {:?}",
                name, idx, expected, actual
            ),
            None => panic!(
                "assert_cell! failed: row {} out of bounds for column {:?} ({} rows)",
                idx,
                name,
                col.len()
            ),
        }
    }};
}

/// Assert that the cell at (column, row index) is the missing-marker.
#[macro_export]
macro_rules! assert_missing {
    ($table:expr, $name:expr, $idx:expr) => {
        $crate::assert_cell!($table, $name, $idx, placemat::Value::Missing)
    };
}

// ---------------------------------------------------------------------------
// Summary assertions
// ---------------------------------------------------------------------------

/// Assert every field of one column's summary. `mean`/`min`/`max` are
/// `Option<f64>` and compared with a small tolerance.
///
/// ```rust
/// assert_summary!(summary, "score", count = 2, missing = 0,
///                 mean = Some(15.0), min = Some(10.0), max = Some(20.0));
/// ```
#[macro_export]
macro_rules! assert_summary {
    ($summary:expr, $name:expr, count = $count:expr, missing = $missing:expr,
     mean = $mean:expr, min = $min:expr, max = $max:expr) => {{
        let summary: &placemat::SummaryStatistics = &$summary;
        let name: &str = $name;
        let col = summary.get(name).unwrap_or_else(|| {
            panic!(
                "assert_summary! failed: no summary for column {:?}.\n  Summarised: {:?}",
                name,
                summary.iter().map(|c| c.name.as_str()).collect::<Vec<_>>()
            )
        });
        pretty_assertions::assert_eq!((col.count, col.missing), ($count, $missing),
            "assert_summary! count/missing mismatch for column {:?}", name);
        $crate::common::assertions::assert_stat(name, "mean", col.mean, $mean);
        $crate::common::assertions::assert_stat(name, "min", col.min, $min);
        $crate::common::assertions::assert_stat(name, "max", col.max, $max);
    }};
}

/// Compare one optional statistic with tolerance. Used by `assert_summary!`.
pub fn assert_stat(column: &str, stat: &str, actual: Option<f64>, expected: Option<f64>) {
    match (actual, expected) {
        (None, None) => {}
        (Some(a), Some(e)) if (a - e).abs() < 1e-9 => {}
        _ => panic!(
            "summary {stat} mismatch for column {column:?}:\n  expected: {expected:?}\n  actual:   {actual:?}"
        ),
    }
}

// ---------------------------------------------------------------------------
// Structural invariant helpers
// ---------------------------------------------------------------------------

/// Assert the invariants every loaded table must satisfy: equal column
/// lengths, unique names, and cell kinds that agree with the inferred type.
pub fn assert_table_invariants(table: &Table) {
    let mut seen = std::collections::HashSet::new();
    for col in table.columns() {
        assert!(
            seen.insert(col.name.as_str()),
            "duplicate column name {:?}",
            col.name
        );
        assert_eq!(
            col.len(),
            table.row_count(),
            "column {:?} has {} cells but the table has {} rows",
            col.name,
            col.len(),
            table.row_count()
        );
        for (i, value) in col.values.iter().enumerate() {
            let ok = match (col.ty, value) {
                (_, Value::Missing) => true,
                (ColumnType::Numeric, Value::Number(_)) => true,
                (ColumnType::Text, Value::Text(_)) => true,
                _ => false,
            };
            assert!(
                ok,
                "cell ({:?}, {}) is {:?}, which a {} column must not hold",
                col.name, i, value, col.ty
            );
        }
    }
}
