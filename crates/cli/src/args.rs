// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::options::{Mode, OutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "dirtally",
    version = crate::VERSION,
    about = "Count folders, files and bytes under a directory"
)]
pub struct Args {
    /// Directory to walk
    #[arg(value_hint = ValueHint::DirPath)]
    pub path: PathBuf,

    /// Walker(s) to run
    #[arg(value_enum)]
    pub mode: Mode,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
