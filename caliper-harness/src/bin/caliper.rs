use clap::Parser;

use caliper_core::logging;
use caliper_harness::{Runner, Selection};
use caliper_scenarios::Registry;

/// Race-detector calibration scenarios with known ground truth.
#[derive(Parser)]
#[command(name = "caliper", version, about)]
struct Cli {
    /// Scenario index to run; 0 or omitted runs the default batch.
    index: Option<usize>,
}

fn main() {
    let cli = Cli::parse();
    logging::init_harness_logging();

    let runner = Runner::new(Registry::standard());
    let selection = Selection::from_index(cli.index.unwrap_or(0));

    match runner.run(selection) {
        Ok(summary) => {
            tracing::info!(
                scenarios = summary.executed.len(),
                total = ?summary.total_elapsed(),
                "run complete"
            );
        }
        Err(err) => {
            tracing::error!(%err, "nothing ran");
            std::process::exit(2);
        }
    }
}
