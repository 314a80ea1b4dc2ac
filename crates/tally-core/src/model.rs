use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A rectangular-ish grid of trimmed text cells. Rows may be ragged;
/// padding to the header width happens during projection, not here.
pub type Grid = Vec<Vec<String>>;

/// One extracted expense line. Amounts are strictly positive; rows with a
/// category label but no usable amount never produce an `Expense`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub category: String,
    pub amount: Decimal,
}

/// The engine's output record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub monthly_income: Decimal,
    /// First-seen order from the input, not sorted.
    pub expenses: Vec<Expense>,
    /// Sum of `expenses[].amount`, exact; saturates at `Decimal::MAX`.
    pub total_expenses: Decimal,
    /// May be negative when expenses exceed income.
    pub savings: Decimal,
    /// `savings / monthly_income * 100`, or 0 when income is 0 or the
    /// division overflows.
    pub savings_percentage: Decimal,
    pub annual_return_percent: Decimal,
}

/// Annual return (percent) assumed when the input carries no return figure.
pub fn default_annual_return() -> Decimal {
    Decimal::new(7, 0)
}

impl Default for FinancialSummary {
    fn default() -> Self {
        Self {
            monthly_income: Decimal::ZERO,
            expenses: Vec::new(),
            total_expenses: Decimal::ZERO,
            savings: Decimal::ZERO,
            savings_percentage: Decimal::ZERO,
            annual_return_percent: default_annual_return(),
        }
    }
}

/// Grid rows keyed by the detected header set.
///
/// Every row holds exactly `headers.len()` cells (short grid rows are padded
/// with empty strings, long ones truncated), and row order is preserved from
/// the input — the extractor relies on one-row lookahead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandardizedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Full result handed to callers: the summary plus advisory diagnostics.
///
/// Non-empty `errors` means extraction was aborted and `data` is the
/// default (all-zero) summary; callers must check `errors` before trusting
/// `data`. `warnings` flag missing signals on an otherwise usable summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseOutcome {
    pub data: FinancialSummary,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}
