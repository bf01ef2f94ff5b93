use std::error::Error;
use std::path::Path;

use clap::Parser;
use mvh_charts::{build_report, FigureConfig};
use mvh_data::load_records;

/// Location of the comparison dataset relative to the invocation directory.
const DATASET_PATH: &str = "../../mcts_vs_hsp_comparison.csv";

#[derive(Parser, Debug)]
#[command(name = "mvh-report", about = "MCTS vs HSP comparison chart generator")]
struct Cli {}

fn main() -> Result<(), Box<dyn Error>> {
    let _cli = Cli::parse();
    let summary = load_records(Path::new(DATASET_PATH))?;
    println!("columns: {}", summary.columns.join(", "));
    build_report(&summary.records, Path::new("."), &FigureConfig::default())?;
    Ok(())
}
