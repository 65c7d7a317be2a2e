//! Amount Parser CLI
//!
//! Converts a CSV file of locale-formatted amounts into exact minor units.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- amounts.csv > converted.csv
//! cargo run -- --strategy async --batch-size 2000 --max-concurrent 8 amounts.csv > converted.csv
//! cargo run -- -vv amounts.csv > converted.csv
//! ```
//!
//! Input columns: `id,currency,amount`. Output columns:
//! `id,currency,minor_units,amount,error`, one row per input row, in input order.
//!
//! # Exit Codes
//!
//! - 0: Success (rejected amounts are reported in the output, not as failures)
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use amount_parser::cli;
use amount_parser::strategy;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(&args);

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy.clone(), config)
    };

    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
