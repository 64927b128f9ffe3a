//! Static corpora and canned row sets used across harnesses.
//!
//! Accent pairs are (precomposed, combining-marks) spellings of the same
//! word; both sides must canonicalise to a single value. All fixtures are
//! deterministic.

use crate::common::builders::{obj, RowBuilder};
use placemat::Row;
use serde_json::json;

// ---------------------------------------------------------------------------
// Normalization corpora
// ---------------------------------------------------------------------------

/// (NFC spelling, NFD spelling) pairs of the same word.
pub const CORPUS_ACCENT_PAIRS: &[(&str, &str)] = &[
    ("caf\u{e9}", "cafe\u{301}"),
    ("na\u{ef}ve", "nai\u{308}ve"),
    ("\u{c5}ngstr\u{f6}m", "A\u{30a}ngstro\u{308}m"),
    ("se\u{f1}or", "sen\u{303}or"),
    ("r\u{e9}sum\u{e9}", "re\u{301}sume\u{301}"),
];

/// (input, NFKC folding) pairs: compatibility characters that the canonical
/// forms leave alone.
pub const CORPUS_COMPAT: &[(&str, &str)] = &[
    ("\u{fb01}nd", "find"),    // fi ligature
    ("\u{2460}", "1"),         // circled digit one
    ("\u{ff21}BC", "ABC"),     // fullwidth A
];

/// Strings that are already canonical in every form.
pub const CORPUS_PLAIN: &[&str] = &["", "plain ascii", "123", "with spaces  and\ttabs"];

// ---------------------------------------------------------------------------
// Row sets
// ---------------------------------------------------------------------------

/// The two-row survey: a text `name` in both accent spellings and a numeric
/// `score` carried as strings.
pub fn survey_rows() -> Vec<Row> {
    vec![
        obj(json!({"name": "caf\u{e9}", "score": "10"})),
        obj(json!({"name": "cafe\u{301}", "score": "20"})),
    ]
}

/// Rows whose key sets differ: the schema must be the union with
/// missing-fill, ordered by first appearance (a, b, c).
pub fn ragged_rows() -> Vec<Row> {
    vec![
        obj(json!({"a": 1, "b": "x"})),
        obj(json!({"b": "y", "c": 3})),
        obj(json!({"a": 2})),
    ]
}

/// One row exercising every scalar cell kind.
pub fn scalar_kinds_row() -> Row {
    RowBuilder::new()
        .set("num", 1.5)
        .set("int", 7)
        .set("text", "hello")
        .set("flag", true)
        .null("gap")
        .build()
}

/// `rows` rows over `cols` numeric columns, for stress and bench shapes.
pub fn corpus_wide(cols: usize, rows: usize) -> Vec<Row> {
    (0..rows)
        .map(|r| {
            let mut b = RowBuilder::new();
            for c in 0..cols {
                b = b.set(format!("col_{c}"), (r * cols + c) as f64);
            }
            b.build()
        })
        .collect()
}
