//! Stateless cell predicates.
//!
//! Each predicate tests a cell's text against an ordered, case-insensitive
//! pattern list. A cell may satisfy several predicates (e.g. "Rent" is an
//! expense label but not an amount); callers query the one they need rather
//! than asking for a single winning class.

use regex::Regex;
use std::sync::LazyLock;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("static pattern table"))
        .collect()
}

static INCOME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)income",
        r"(?i)salary",
        r"(?i)wage",
        r"(?i)earnings",
        r"(?i)revenue",
        r"(?i)net income",
        r"(?i)monthly income",
        r"(?i)annual income",
        r"(?i)gross income",
        r"(?i)take home",
    ])
});

static EXPENSE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)expense",
        r"(?i)cost",
        r"(?i)spending",
        r"(?i)payment",
        r"(?i)bill",
        r"(?i)rent",
        r"(?i)utilities",
        r"(?i)groceries",
        r"(?i)food",
        r"(?i)restaurant",
        // common misspelling seen in real exports
        r"(?i)resturant",
        r"(?i)gas",
        r"(?i)auto",
        r"(?i)car",
        r"(?i)medical",
        r"(?i)health",
        r"(?i)gym",
        r"(?i)travel",
        r"(?i)shopping",
        r"(?i)entertainment",
        r"(?i)fun",
        r"(?i)misc",
        r"(?i)miscellaneous",
    ])
});

// Whole-cell matches only: an amount cell is nothing but the decorated
// number, modulo surrounding whitespace. Free-text dollar figures are the
// amount parser's fallback tier, not an amount-shaped cell.
static AMOUNT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"^\s*\$?\s*[\d,]+\.?\d*\s*$",
        r"^\s*[\d,]+\.?\d*\s*%?\s*$",
        r"^\s*\$?\s*[\d,]+\.?\d*\s*%?\s*$",
    ])
});

static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"^\d{1,2}/\d{1,2}/\d{2,4}$",
        r"^\d{4}-\d{1,2}-\d{1,2}$",
        r"^\d{1,2}-\d{1,2}-\d{2,4}$",
    ])
});

// "annual ... return" in either ordering.
static ANNUAL_RETURN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)annual.*return|return.*annual").expect("static pattern"));

/// Does this cell name an income line ("Monthly Net Income", "Salary", ...)?
pub fn is_income_label(cell: &str) -> bool {
    INCOME_PATTERNS.iter().any(|p| p.is_match(cell))
}

/// Does this cell name an expense category or a common bill type?
pub fn is_expense_label(cell: &str) -> bool {
    EXPENSE_PATTERNS.iter().any(|p| p.is_match(cell))
}

/// Is the whole cell a decorated number ("$ 3,215.00", "7%", "650")?
pub fn is_amount(cell: &str) -> bool {
    AMOUNT_PATTERNS.iter().any(|p| p.is_match(cell))
}

/// Is the whole cell a date (`MM/DD/YY[YY]`, `YYYY-MM-DD`, `MM-DD-YY[YY]`)?
pub fn is_date(cell: &str) -> bool {
    DATE_PATTERNS.iter().any(|p| p.is_match(cell))
}

/// Does this cell carry the annual-return phrase, in either word order?
pub fn is_annual_return_label(cell: &str) -> bool {
    ANNUAL_RETURN_PATTERN.is_match(cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn income_labels() {
        assert!(is_income_label("Monthly Net Income"));
        assert!(is_income_label("SALARY"));
        assert!(is_income_label("Take Home pay"));
        assert!(!is_income_label("Rent"));
    }

    #[test]
    fn expense_labels() {
        assert!(is_expense_label("Rent"));
        assert!(is_expense_label("Gas/Auto"));
        assert!(is_expense_label("Resturants"));
        assert!(is_expense_label("Fun / Night out"));
        assert!(!is_expense_label("Monthly Net Income"));
    }

    #[test]
    fn amount_shapes() {
        assert!(is_amount("$ 3,215.00"));
        assert!(is_amount(" $ 13,216.67 "));
        assert!(is_amount("650"));
        assert!(is_amount("7%"));
        assert!(is_amount("96,200.00"));
        assert!(!is_amount("Rent"));
        assert!(!is_amount("$3,215.00 due monthly"));
        assert!(!is_amount("09/01/25"));
    }

    #[test]
    fn date_shapes() {
        assert!(is_date("09/01/25"));
        assert!(is_date("9/1/2025"));
        assert!(is_date("2025-09-01"));
        assert!(is_date("09-01-25"));
        assert!(!is_date("September 1"));
        assert!(!is_date("1234"));
    }

    #[test]
    fn annual_return_phrase_both_orders() {
        assert!(is_annual_return_label("Annual Return"));
        assert!(is_annual_return_label("Expected return (annual)"));
        assert!(!is_annual_return_label("Annual Fee"));
        assert!(!is_annual_return_label("Return"));
    }

    #[test]
    fn predicates_overlap_is_allowed() {
        // "7%" is an amount; "Gas" is an expense label; neither claims
        // exclusivity and callers pick the predicate they care about.
        assert!(is_amount("7%"));
        assert!(!is_expense_label("7%"));
        assert!(is_expense_label("Gas"));
        assert!(!is_amount("Gas"));
    }

    #[test]
    fn non_ascii_cells_do_not_panic() {
        assert!(!is_amount("🦀 MONEY 🦀"));
        assert!(!is_income_label("Löhne€"));
        assert!(!is_date("２０２５"));
    }
}
