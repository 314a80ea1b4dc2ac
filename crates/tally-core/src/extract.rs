//! The three extraction queries over standardized rows, plus summary
//! assembly.
//!
//! Everything here is a deterministic single pass. The only cross-row
//! coupling is one row of lookahead: a label-only row ("Monthly Net
//! Income") may carry its value on the immediately following row, so rows
//! are treated as an indexable sequence rather than a stream.

use crate::amount;
use crate::category;
use crate::classify;
use crate::model::{default_annual_return, Expense, FinancialSummary, StandardizedTable};
use rust_decimal::Decimal;

/// Extraction result with enough signal for the caller to decide which
/// warnings to emit. `income` and `annual_return` are `None` when the scan
/// found nothing — a found value that happens to equal a default is not the
/// same thing as a default.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub summary: FinancialSummary,
    pub income_found: bool,
    pub annual_return_found: bool,
}

/// Run all three queries and assemble the summary.
pub fn extract(table: &StandardizedTable) -> Extraction {
    let income = extract_income(&table.rows);
    let expenses = extract_expenses(&table.rows);
    let annual_return = extract_annual_return(&table.rows);

    let monthly_income = income.unwrap_or(Decimal::ZERO);
    // Amounts can sit at Decimal's magnitude limits; sums saturate and the
    // percentage falls back to zero rather than overflowing.
    let total_expenses = expenses
        .iter()
        .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.amount));
    let savings = monthly_income.saturating_sub(total_expenses);
    let savings_percentage = if monthly_income > Decimal::ZERO {
        savings
            .checked_div(monthly_income)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    Extraction {
        summary: FinancialSummary {
            monthly_income,
            expenses,
            total_expenses,
            savings,
            savings_percentage,
            annual_return_percent: annual_return.unwrap_or_else(default_annual_return),
        },
        income_found: income.is_some(),
        annual_return_found: annual_return.is_some(),
    }
}

/// Find the monthly income: the first income-labeled row whose own row (or
/// the immediately following row) yields a positive amount. The first hit
/// ends the scan.
pub fn extract_income(rows: &[Vec<String>]) -> Option<Decimal> {
    for (i, row) in rows.iter().enumerate() {
        for value in row {
            if !classify::is_income_label(value) {
                continue;
            }
            if let Some(found) = find_amount_in_row(row) {
                if found > Decimal::ZERO {
                    return Some(found);
                }
            }
            // Label-only row: the value often sits on the next row.
            if let Some(next) = rows.get(i + 1) {
                if let Some(found) = find_amount_in_row(next) {
                    if found > Decimal::ZERO {
                        return Some(found);
                    }
                }
            }
        }
    }
    None
}

/// Collect expenses: every expense-labeled value in every row contributes
/// one expense, paired with the first positive amount in the same row.
///
/// A row with several category-like cells contributes several expenses;
/// that mirrors the source data's semantics and is deliberate.
pub fn extract_expenses(rows: &[Vec<String>]) -> Vec<Expense> {
    let mut expenses = Vec::new();

    for row in rows {
        for value in row {
            if value.is_empty() || !classify::is_expense_label(value) {
                continue;
            }
            if let Some(found) = find_amount_in_row(row) {
                if found > Decimal::ZERO {
                    expenses.push(Expense {
                        category: category::normalize_category(value),
                        amount: found,
                    });
                }
            }
        }
    }

    expenses
}

/// Find the annual return percentage: first row carrying the annual-return
/// phrase with a positive amount in the same row.
pub fn extract_annual_return(rows: &[Vec<String>]) -> Option<Decimal> {
    for row in rows {
        for value in row {
            if !classify::is_annual_return_label(value) {
                continue;
            }
            if let Some(found) = find_amount_in_row(row) {
                if found > Decimal::ZERO {
                    return Some(found);
                }
            }
        }
    }
    None
}

/// First amount in a row, by column order: strict whole-cell matches win
/// over free-text dollar figures, and the first strict match is taken even
/// if a later cell would parse to something "better".
fn find_amount_in_row(row: &[String]) -> Option<Decimal> {
    for value in row {
        if value.is_empty() {
            continue;
        }
        if let Some(found) = amount::parse_amount(value) {
            return Some(found);
        }
    }
    for value in row {
        if value.is_empty() {
            continue;
        }
        if let Some(found) = amount::parse_embedded_amount(value) {
            return Some(found);
        }
    }
    None
}
