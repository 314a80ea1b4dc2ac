use std::path::PathBuf;

use crate::output;

pub fn run(input_file: PathBuf, output_format: &str) -> Result<(), tally_core::error::TallyError> {
    let raw = std::fs::read_to_string(&input_file)?;
    let table = tally_core::standardize_statement(&raw)?;

    match output_format {
        "json" => output::json::print_standardized(&table)?,
        _ => println!("{}", output::table::format_standardized(&table)),
    }

    Ok(())
}
