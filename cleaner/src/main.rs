//! Life expectancy CLI - Clean the Eurostat table for one country
//!
//! ```bash
//! life-expectancy                       # Portugal, fixed input/output paths
//! life-expectancy --country AT          # Austria, same output file
//! life-expectancy --summary             # Also print row counts as JSON
//! ```
//!
//! Paths can be overridden with `--input`/`--output` or the
//! `LIFE_EXPECTANCY_INPUT`/`LIFE_EXPECTANCY_OUTPUT` variables (a `.env`
//! file is read first).

use clap::Parser;
use life_expectancy::logs::Logger;
use life_expectancy::{
    clean_with_options, CleanOptions, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_REGION,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "life-expectancy")]
#[command(about = "Clean life expectancy data for a specific country", long_about = None)]
struct Cli {
    /// Country code to filter by
    #[arg(long, default_value = DEFAULT_REGION)]
    country: String,

    /// Wide TSV source table
    #[arg(long, env = "LIFE_EXPECTANCY_INPUT", default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Cleaned CSV destination (overwritten)
    #[arg(long, env = "LIFE_EXPECTANCY_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Print row counts as JSON on stdout
    #[arg(long)]
    summary: bool,
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        Logger::stderr().error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = CleanOptions {
        input_path: cli.input,
        output_path: cli.output,
        region: cli.country,
    };

    let report = clean_with_options(&options)?;

    if cli.summary {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
