//! Header detection, header normalization, and row projection.
//!
//! Real exports rarely label their columns usefully: headers may sit on any
//! of the first few rows, and the names themselves can be garbled (one
//! known source ships "booba money" for its category column). This module
//! picks the likeliest header row, maps raw header text onto canonical
//! field names, and projects every following grid row against that header
//! set.

use crate::classify;
use crate::model::{Grid, StandardizedTable};
use regex::Regex;
use std::sync::LazyLock;

/// Headers never show up below this row in practice.
const HEADER_SEARCH_ROWS: usize = 3;

static HEADER_HINTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)date|category|amount|description|type").expect("static pattern"));

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static pattern"));

/// Known source-specific header names mapped to canonical roles. Includes
/// the intentionally garbled names some exports carry.
const HEADER_ALIASES: &[(&str, &str)] = &[
    ("booba_money", "category"),
    ("booboo_moeny", "amount"),
    ("baobooboo_money", "running_total"),
    ("date", "date"),
    ("description", "description"),
    ("category", "category"),
    ("amount", "amount"),
    ("value", "amount"),
    ("cost", "amount"),
    ("price", "amount"),
];

/// Pick the row most likely to be the header among the first few grid rows.
///
/// Ties keep the earliest row, so row 0 wins by default (the common CSV
/// convention).
pub fn locate_header_row(grid: &Grid) -> usize {
    let mut best_row = 0;
    let mut best_score = 0u32;

    for (i, row) in grid.iter().take(HEADER_SEARCH_ROWS).enumerate() {
        let mut score = 0u32;
        for cell in row {
            if cell.is_empty() {
                continue;
            }
            if classify::is_income_label(cell) {
                score += 3;
            }
            if classify::is_expense_label(cell) {
                score += 2;
            }
            if !classify::is_amount(cell) {
                score += 1;
            }
            if cell.chars().count() > 3 && !cell.chars().all(|c| c.is_ascii_digit()) {
                score += 1;
            }
            if HEADER_HINTS.is_match(cell) {
                score += 2;
            }
        }
        if score > best_score {
            best_score = score;
            best_row = i;
        }
    }

    best_row
}

/// Map raw header cells to canonical field names.
///
/// A blank cell gets the positional fallback `column_<n>` (1-based); a cell
/// with text but no alias keeps its normalized form verbatim. The two cases
/// are deliberately distinct.
pub fn normalize_headers(cells: &[String]) -> Vec<String> {
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| normalize_header(cell, i))
        .collect()
}

fn normalize_header(cell: &str, index: usize) -> String {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return format!("column_{}", index + 1);
    }

    let lower = trimmed.to_lowercase();
    let stripped = NON_WORD.replace_all(&lower, "");
    let normalized = WHITESPACE
        .replace_all(stripped.trim(), "_")
        .into_owned();
    if normalized.is_empty() {
        // Header text was nothing but punctuation.
        return format!("column_{}", index + 1);
    }

    HEADER_ALIASES
        .iter()
        .find(|(raw, _)| *raw == normalized)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or(normalized)
}

/// Zip every grid row after the header against the header set.
///
/// Short rows are padded with empty strings, long rows silently drop extra
/// trailing cells, and row order is preserved — the extractor relies on
/// one-row lookahead.
pub fn project_rows(grid: &Grid, header_row: usize, headers: &[String]) -> Vec<Vec<String>> {
    grid.iter()
        .skip(header_row + 1)
        .map(|row| {
            (0..headers.len())
                .map(|i| row.get(i).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Full standardization pass: locate the header, normalize it, project the
/// remaining rows.
pub fn standardize(grid: &Grid) -> StandardizedTable {
    if grid.is_empty() {
        return StandardizedTable::default();
    }
    let header_row = locate_header_row(grid);
    let headers = normalize_headers(&grid[header_row]);
    let rows = project_rows(grid, header_row, &headers);
    StandardizedTable { headers, rows }
}
