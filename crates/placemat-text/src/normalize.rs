//! Unicode canonicalisation of free-form text values.
//!
//! Visually identical strings often differ at the code-point level (a
//! precomposed `é` versus `e` plus a combining acute). Grouping or comparing
//! such values without canonicalising them first silently splits groups, so
//! everything that feeds an equality check goes through [`normalize`].

use crate::form::NormalForm;
use unicode_normalization::{
    is_nfc_quick, is_nfd_quick, is_nfkc_quick, is_nfkd_quick, IsNormalized, UnicodeNormalization,
};

/// Convert `text` to the requested canonical form.
///
/// Idempotent per form: normalizing already-normalized text returns it
/// unchanged. Empty input is fine. The output may be shorter or longer than
/// the input (in chars and in bytes).
pub fn normalize(text: &str, form: NormalForm) -> String {
    match form {
        NormalForm::Composed => text.nfc().collect(),
        NormalForm::Decomposed => text.nfd().collect(),
        NormalForm::CompatComposed => text.nfkc().collect(),
        NormalForm::CompatDecomposed => text.nfkd().collect(),
    }
}

/// Normalize an ordered sequence of optional values.
///
/// Missing entries (`None`) pass through unchanged; only present entries
/// are transformed. Output order matches input order.
pub fn normalize_column<'a, I>(values: I, form: NormalForm) -> Vec<Option<String>>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values
        .into_iter()
        .map(|value| value.map(|s| normalize(s, form)))
        .collect()
}

/// Whether `text` is already in the requested form.
///
/// Uses the quick-check property first and only falls back to a full
/// normalization when the quick check is inconclusive.
pub fn is_normalized(text: &str, form: NormalForm) -> bool {
    let quick = match form {
        NormalForm::Composed => is_nfc_quick(text.chars()),
        NormalForm::Decomposed => is_nfd_quick(text.chars()),
        NormalForm::CompatComposed => is_nfkc_quick(text.chars()),
        NormalForm::CompatDecomposed => is_nfkd_quick(text.chars()),
    };
    match quick {
        IsNormalized::Yes => true,
        IsNormalized::No => false,
        IsNormalized::Maybe => normalize(text, form) == text,
    }
}
