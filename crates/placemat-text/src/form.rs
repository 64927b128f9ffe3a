//! Normalization form selection.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which Unicode Normalization Form to apply.
///
/// `Composed` (NFC) and `Decomposed` (NFD) are the canonical forms; the
/// compatibility pair additionally folds compatibility characters such as
/// ligatures and width variants. Grouping keys for display text usually
/// want `Composed`; fuzzy matching pipelines tend to want `CompatComposed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NormalForm {
    /// Canonical composition (NFC).
    #[serde(alias = "nfc")]
    Composed,
    /// Canonical decomposition (NFD).
    #[serde(alias = "nfd")]
    Decomposed,
    /// Compatibility composition (NFKC).
    #[serde(alias = "nfkc")]
    CompatComposed,
    /// Compatibility decomposition (NFKD).
    #[serde(alias = "nfkd")]
    CompatDecomposed,
}

impl NormalForm {
    pub const ALL: [NormalForm; 4] = [
        NormalForm::Composed,
        NormalForm::Decomposed,
        NormalForm::CompatComposed,
        NormalForm::CompatDecomposed,
    ];

    /// Stable kebab-case name, round-trips through [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalForm::Composed => "composed",
            NormalForm::Decomposed => "decomposed",
            NormalForm::CompatComposed => "compat-composed",
            NormalForm::CompatDecomposed => "compat-decomposed",
        }
    }
}

impl std::fmt::Display for NormalForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a configuration value names a normalization form this crate
/// does not recognise.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "unrecognised normalization form {input:?} (expected one of \
     \"composed\", \"decomposed\", \"compat-composed\", \"compat-decomposed\")"
)]
pub struct UnknownFormError {
    pub input: String,
}

impl FromStr for NormalForm {
    type Err = UnknownFormError;

    /// Parse a form name. ASCII-case-insensitive; accepts both the
    /// kebab-case names and the Unicode shorthands (`nfc`, `nfd`, `nfkc`,
    /// `nfkd`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "composed" | "nfc" => Ok(NormalForm::Composed),
            "decomposed" | "nfd" => Ok(NormalForm::Decomposed),
            "compat-composed" | "nfkc" => Ok(NormalForm::CompatComposed),
            "compat-decomposed" | "nfkd" => Ok(NormalForm::CompatDecomposed),
            _ => Err(UnknownFormError {
                input: s.to_string(),
            }),
        }
    }
}
