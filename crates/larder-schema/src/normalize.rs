//! Recipe name normalization.
//!
//! Free-form handwritten names are folded into a canonical display form in
//! one pass: hyphens and underscores act as word breaks, runs of breaks
//! collapse to a single space, anything that is not an ASCII letter is
//! dropped, and each surviving word is title-cased.

use thiserror::Error;

/// Raised when nothing survives normalization.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("name contains no letters")]
pub struct InvalidName;

/// Fold a raw handwritten name into canonical `Title Case` form.
///
/// Returns [`InvalidName`] when nothing survives the fold, so callers never
/// see an empty canonical name.
///
/// ```
/// use larder_schema::normalize_name;
///
/// let name = normalize_name("Riz__au-tomate").unwrap();
/// assert_eq!(name, "Riz Au Tomate");
/// ```
pub fn normalize_name(raw: &str) -> Result<String, InvalidName> {
    let mut buf = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, ' ' | '-' | '_') {
            if !buf.is_empty() && !buf.ends_with(' ') {
                buf.push(' ');
            }
        } else if c.is_ascii_alphabetic() {
            if buf.is_empty() || buf.ends_with(' ') {
                buf.push(c.to_ascii_uppercase());
            } else {
                buf.push(c.to_ascii_lowercase());
            }
        }
        // Digits, punctuation and non-ASCII are dropped.
    }
    let folded = buf.trim_end();
    if folded.is_empty() {
        return Err(InvalidName);
    }
    Ok(folded.to_owned())
}
