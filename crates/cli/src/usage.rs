// crates/cli/src/usage.rs
use std::process::ExitCode;

use clap::CommandFactory;
use clap::error::{Error, ErrorKind};

use crate::args::Args;

/// One-screen usage text printed for malformed invocations.
pub fn usage() -> String {
    let mut cmd = Args::command();
    format!(
        "{}\n\nMODE: sequential | parallel | both",
        cmd.render_usage()
    )
}

/// Handles a failed parse.
///
/// Help and version requests print as usual. Anything else (missing path,
/// unknown mode, extra arguments) prints the usage text and is treated as a
/// successful no-op.
pub fn on_parse_error(err: &Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let _ = err.print();
        }
        _ => println!("{}", usage()),
    }
    ExitCode::SUCCESS
}
