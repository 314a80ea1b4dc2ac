use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), tally_core::error::TallyError> {
    let raw = std::fs::read_to_string(&input_file)?;
    let outcome = tally_core::parse_statement(&raw);

    for w in &outcome.warnings {
        eprintln!("warning: {w}");
    }

    if !outcome.errors.is_empty() {
        for e in &outcome.errors {
            eprintln!("error: {e}");
        }
        std::process::exit(1);
    }

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&outcome.data)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} expense(s), written to {}",
                outcome.data.expenses.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&outcome.data)?,
            _ => println!("{}", output::table::format_summary(&outcome.data)),
        },
    }

    Ok(())
}
