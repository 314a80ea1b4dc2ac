use tally_core::error::TallyError;
use tally_core::model::{FinancialSummary, StandardizedTable};

pub fn print(summary: &FinancialSummary) -> Result<(), TallyError> {
    let json = serde_json::to_string_pretty(summary)?;
    println!("{json}");
    Ok(())
}

pub fn print_standardized(table: &StandardizedTable) -> Result<(), TallyError> {
    let json = serde_json::to_string_pretty(table)?;
    println!("{json}");
    Ok(())
}
