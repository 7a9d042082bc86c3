use std::io;
use std::process::ExitCode;

use clap::Parser;
use dirtally_cli::args::Args;
use dirtally_cli::config::Config;
use dirtally_cli::{logging, presentation, usage};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => return usage::on_parse_error(&err),
    };
    logging::init(args.verbose);

    let config = match Config::try_from(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(root = %config.root.display(), mode = %config.mode, "starting");

    match dirtally_engine::run(&config) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            match presentation::print_results(&mut stdout, &result, args.format) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Output Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
