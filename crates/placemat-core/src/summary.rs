//! Summary statistics over the numeric columns of a [`Table`].

use crate::{ColumnType, Table};
use serde::Serialize;

/// Aggregates for one numeric column.
///
/// `mean`, `min`, and `max` are `None` when the column has zero non-missing
/// cells: a column with no data reports undefined statistics, never zeros.
/// Invariant: `count + missing` equals the table's row count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    /// Non-missing cell count.
    pub count: usize,
    /// Missing cell count.
    pub missing: usize,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Per-column aggregates for every numeric column of a table, in schema
/// order. Text columns do not appear.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    columns: Vec<ColumnSummary>,
}

impl SummaryStatistics {
    /// Look up the summary for a column by name.
    pub fn get(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Summaries in table schema order.
    pub fn columns(&self) -> &[ColumnSummary] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnSummary> {
        self.columns.iter()
    }
}

/// Compute [`SummaryStatistics`] for every numeric column.
///
/// A zero-row or zero-column table yields an empty mapping; this is a valid
/// outcome, not an error.
pub fn summarize(table: &Table) -> SummaryStatistics {
    let columns = table
        .columns()
        .iter()
        .filter(|col| col.ty == ColumnType::Numeric)
        .map(|col| {
            let mut count = 0usize;
            let mut missing = 0usize;
            let mut sum = 0.0f64;
            let mut min: Option<f64> = None;
            let mut max: Option<f64> = None;

            for value in &col.values {
                match value.as_number() {
                    Some(n) => {
                        count += 1;
                        sum += n;
                        min = Some(min.map_or(n, |m| m.min(n)));
                        max = Some(max.map_or(n, |m| m.max(n)));
                    }
                    None => missing += 1,
                }
            }

            ColumnSummary {
                name: col.name.clone(),
                count,
                missing,
                mean: (count > 0).then(|| sum / count as f64),
                min,
                max,
            }
        })
        .collect::<Vec<_>>();

    tracing::trace!(
        numeric_columns = columns.len(),
        rows = table.row_count(),
        "summarized table"
    );
    SummaryStatistics { columns }
}
