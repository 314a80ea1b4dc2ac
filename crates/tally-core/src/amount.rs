//! Decorated-currency parsing.
//!
//! Two tiers: a strict pass for cells that are nothing but a decorated
//! number, and a fallback that pulls the first `$`-prefixed figure out of
//! free text ("rent is $ 3,215.00 per month"). Real exports mix both. A
//! value that fails numeric conversion is absent, never an error — the
//! caller's search just moves on to the next candidate.

use crate::classify;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

static EMBEDDED_DOLLAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\s*[\d,]+\.?\d*").expect("static pattern"));

/// Strict tier: the whole cell must be amount-shaped.
pub fn parse_amount(cell: &str) -> Option<Decimal> {
    if !classify::is_amount(cell) {
        return None;
    }
    parse_stripped(cell)
}

/// Fallback tier: first dollar-prefixed numeric substring anywhere in the
/// cell.
pub fn parse_embedded_amount(cell: &str) -> Option<Decimal> {
    let found = EMBEDDED_DOLLAR.find(cell)?;
    parse_stripped(found.as_str())
}

/// Strip currency symbols, percent signs, comma group separators and
/// whitespace, then parse what remains as a decimal number.
fn parse_stripped(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '%') && !c.is_whitespace())
        .collect();
    Decimal::from_str(&cleaned).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn plain_number() {
        assert_eq!(parse_amount("650"), Some(dec!(650)));
    }

    #[test]
    fn currency_prefix_and_grouping() {
        assert_eq!(parse_amount("$ 13,216.67"), Some(dec!(13216.67)));
        assert_eq!(parse_amount(" $ 3,215.00 "), Some(dec!(3215.00)));
    }

    #[test]
    fn percent_suffix() {
        assert_eq!(parse_amount("7%"), Some(dec!(7)));
        assert_eq!(parse_amount("8.5 %"), Some(dec!(8.5)));
    }

    #[test]
    fn text_cell_is_absent() {
        assert_eq!(parse_amount("Rent"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn date_is_not_an_amount() {
        assert_eq!(parse_amount("09/01/25"), None);
    }

    #[test]
    fn free_text_dollar_figure() {
        assert_eq!(
            parse_embedded_amount("rent is $ 3,215.00 per month"),
            Some(dec!(3215.00))
        );
        assert_eq!(parse_embedded_amount("about $90"), Some(dec!(90)));
    }

    #[test]
    fn free_text_takes_first_figure() {
        assert_eq!(
            parse_embedded_amount("$100 now, $200 later"),
            Some(dec!(100))
        );
    }

    #[test]
    fn free_text_without_dollar_is_absent() {
        assert_eq!(parse_embedded_amount("due on 09/01/25"), None);
        assert_eq!(parse_embedded_amount("seven hundred"), None);
    }

    #[test]
    fn unparseable_decoration_is_absent_not_error() {
        // Shaped like an amount but numerically meaningless after stripping.
        assert_eq!(parse_amount(",,,"), None);
    }
}
