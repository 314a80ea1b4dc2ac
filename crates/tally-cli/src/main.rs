mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Financial summary extraction from messy spreadsheet exports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a financial summary (income, expenses, savings) from a CSV export
    Summary {
        /// Path to the CSV file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the summary to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Validate and standardize a CSV export (without extracting)
    Standardize {
        /// Path to the CSV file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Project investment growth from fixed monthly contributions
    Project {
        /// Monthly contribution amount
        #[arg(short, long)]
        monthly: f64,

        /// Annual return in percent
        #[arg(short, long)]
        rate: f64,

        /// Investment horizon in years
        #[arg(short, long)]
        years: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Summary {
            input_file,
            output,
            out,
        } => commands::summary::run(input_file, &output, out),
        Commands::Standardize { input_file, output } => {
            commands::standardize::run(input_file, &output)
        }
        Commands::Project {
            monthly,
            rate,
            years,
        } => commands::project::run(monthly, rate, years),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
