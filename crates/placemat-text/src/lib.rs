//! placemat-text: Unicode canonicalisation for stable grouping and
//! comparison of text values.
//!
//! The text half of placemat. It has no dependency on the tabular half;
//! callers feed it column values and get canonicalised values back.
//!
//! ```
//! use placemat_text::{normalize, NormalForm};
//!
//! let a = normalize("caf\u{e9}", NormalForm::Composed);
//! let b = normalize("cafe\u{301}", NormalForm::Composed);
//! assert_eq!(a, b);
//! ```

pub mod form;
pub mod normalize;

pub use form::{NormalForm, UnknownFormError};
pub use normalize::{is_normalized, normalize, normalize_column};
