//! Delimited-text grid reading and canonical re-serialization.
//!
//! Cells come back trimmed and untyped; semantic interpretation happens
//! later. Quoted fields may contain embedded delimiters and use a doubled
//! quote as the escape. Lines with zero non-whitespace cells are dropped.

use crate::error::TallyError;
use crate::model::Grid;

/// Parse delimited text into a grid of trimmed string cells.
///
/// Ragged rows are kept as-is; padding to the header width is the
/// projector's job.
pub fn read_grid(text: &str) -> Result<Grid, TallyError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut grid = Grid::new();
    for record in rdr.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        grid.push(row);
    }
    Ok(grid)
}

/// Re-serialize a grid to canonical delimited text (consistent quoting,
/// `\n` terminators). Reading the result back yields the same grid.
pub fn write_grid(grid: &Grid) -> Result<String, TallyError> {
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    for row in grid {
        wtr.write_record(row)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| TallyError::Structure(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Scan raw text for structural problems the reader papers over.
///
/// The reader recovers from an unterminated quoted field by running it to
/// end of input, which silently swallows every following record. Callers
/// treat anything reported here as an error while still getting the
/// best-effort grid.
pub fn structural_issues(text: &str) -> Vec<String> {
    let mut issues = Vec::new();
    let mut chars = text.chars().peekable();
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut line = 1usize;
    let mut open_line = 1usize;

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next(); // escaped quote
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => line += 1,
                _ => {}
            }
        } else {
            match c {
                '"' if at_field_start => {
                    in_quotes = true;
                    at_field_start = false;
                    open_line = line;
                }
                ',' => at_field_start = true,
                '\n' => {
                    line += 1;
                    at_field_start = true;
                }
                c if c.is_whitespace() => {} // leading whitespace keeps the field open
                _ => at_field_start = false,
            }
        }
    }

    if in_quotes {
        issues.push(format!(
            "unterminated quoted field starting on line {open_line}"
        ));
    }
    issues
}
