//! Tally core: turns a messy delimited financial export into a typed
//! [`model::FinancialSummary`] plus advisory diagnostics.
//!
//! The pipeline is pure and synchronous: validate → grid → standardize →
//! extract. Identical input produces byte-identical output; the only shared
//! state is the read-only pattern and alias tables, so concurrent calls
//! need no coordination.

pub mod amount;
pub mod category;
pub mod classify;
pub mod error;
pub mod extract;
pub mod model;
pub mod standardize;
pub mod table;
pub mod validate;

use error::TallyError;
use model::{FinancialSummary, ParseOutcome, StandardizedTable};

/// Main API entry point: parse raw delimited text into a financial summary.
///
/// Never panics and never returns an incomplete record: fatal problems come
/// back as messages in `errors` alongside the default (all-zero) summary,
/// and missing non-fatal signals come back as `warnings` on an otherwise
/// usable summary.
pub fn parse_statement(raw: &str) -> ParseOutcome {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let validation = validate::validate(raw);
    if !validation.ok {
        errors.extend(validation.errors);
        return failed(errors, warnings);
    }

    let grid = match table::read_grid(&validation.cleaned_text) {
        Ok(grid) => grid,
        Err(e) => {
            errors.push(e.to_string());
            return failed(errors, warnings);
        }
    };

    let standardized = standardize::standardize(&grid);
    if standardized.rows.is_empty() {
        errors.push(TallyError::NoDataRows.to_string());
        return failed(errors, warnings);
    }

    let extraction = extract::extract(&standardized);

    if !extraction.income_found {
        warnings.push("no monthly income found in input".to_string());
    }
    if extraction.summary.expenses.is_empty() {
        warnings.push("no expenses found in input".to_string());
    }
    if !extraction.annual_return_found {
        warnings.push(format!(
            "using default annual return of {}% (no return rate found in input)",
            model::default_annual_return()
        ));
    }

    ParseOutcome {
        data: extraction.summary,
        errors,
        warnings,
    }
}

/// Validate and standardize only, without running extraction. This is the
/// halfway point of the pipeline, useful for inspecting what the extractor
/// would see.
pub fn standardize_statement(raw: &str) -> Result<StandardizedTable, TallyError> {
    let validation = validate::validate(raw);
    if !validation.ok {
        // First error decides the variant; EmptyInput is the common case.
        return Err(if raw.trim().is_empty() {
            TallyError::EmptyInput
        } else {
            TallyError::Structure(validation.errors.join("; "))
        });
    }
    let grid = table::read_grid(&validation.cleaned_text)?;
    Ok(standardize::standardize(&grid))
}

fn failed(errors: Vec<String>, warnings: Vec<String>) -> ParseOutcome {
    debug_assert!(!errors.is_empty());
    ParseOutcome {
        data: FinancialSummary::default(),
        errors,
        warnings,
    }
}
