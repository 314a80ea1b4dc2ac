//! Pre-flight validation and formatting normalization.
//!
//! Runs before any semantic work: reject empty input, surface structural
//! problems, and re-serialize the best-effort grid so downstream stages see
//! canonical quoting instead of whatever the export produced.

use crate::error::TallyError;
use crate::table;

#[derive(Debug, Clone)]
pub struct Validation {
    /// True iff `errors` is empty.
    pub ok: bool,
    /// Canonically quoted text for downstream stages. Empty on failure.
    pub cleaned_text: String,
    pub errors: Vec<String>,
}

/// Validate raw delimited text and normalize its formatting.
///
/// Re-validating the returned `cleaned_text` is a fixed point: the second
/// pass reproduces it byte for byte.
pub fn validate(raw: &str) -> Validation {
    let mut errors = Vec::new();

    if raw.trim().is_empty() {
        errors.push(TallyError::EmptyInput.to_string());
        return Validation {
            ok: false,
            cleaned_text: String::new(),
            errors,
        };
    }

    errors.extend(table::structural_issues(raw));

    // Parse and re-serialize even when structural issues were found; the
    // grid is best-effort and callers decide whether to trust it.
    let cleaned_text = match table::read_grid(raw).and_then(|grid| table::write_grid(&grid)) {
        Ok(text) => text,
        Err(e) => {
            errors.push(e.to_string());
            String::new()
        }
    };

    Validation {
        ok: errors.is_empty(),
        cleaned_text,
        errors,
    }
}
