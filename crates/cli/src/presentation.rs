// crates/cli/src/presentation.rs
use std::io::Write;
use std::path::Path;

use dirtally_engine::report::{RunResult, WalkReport};
use serde::Serialize;

use crate::error::Result;
use crate::options::OutputFormat;

pub fn print_results<W: Write>(out: &mut W, result: &RunResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_table(out, result),
        OutputFormat::Json => print_json(out, result),
    }
}

fn print_table<W: Write>(out: &mut W, result: &RunResult) -> Result<()> {
    let threads = rayon::current_num_threads();

    writeln!(
        out,
        "dirtally v{} · root={} · parallel={threads}",
        crate::VERSION,
        result.root.display()
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "STRATEGY         FOLDERS        FILES            BYTES    ELAPSED (ms)"
    )?;
    writeln!(out, "-----------------------------------------------------------------------")?;

    for report in &result.reports {
        writeln!(
            out,
            "{:<12}{:>12}{:>13}{:>17}{:>16.3}   {:#}",
            report.strategy.to_string(),
            report.result.folders,
            report.result.files,
            report.result.bytes,
            elapsed_ms(report),
            report.result.bytes,
        )?;
    }

    for report in result.reports.iter().filter(|r| r.skipped > 0) {
        writeln!(
            out,
            "[dirtally] {}: {} entries could not be read and were left out",
            report.strategy, report.skipped
        )?;
    }

    if !result.is_consistent() {
        writeln!(out, "[dirtally] warning: walkers disagree (was the tree modified during the run?)")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct ReportRow<'a> {
    strategy: String,
    root: &'a Path,
    folders: u64,
    files: u64,
    bytes: u64,
    skipped: u64,
    elapsed_ms: f64,
}

fn print_json<W: Write>(out: &mut W, result: &RunResult) -> Result<()> {
    let rows: Vec<ReportRow<'_>> = result
        .reports
        .iter()
        .map(|r| ReportRow {
            strategy: r.strategy.to_string(),
            root: &result.root,
            folders: r.result.folders.value(),
            files: r.result.files.value(),
            bytes: r.result.bytes.value(),
            skipped: r.skipped,
            elapsed_ms: elapsed_ms(r),
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &rows)?;
    writeln!(out)?;
    Ok(())
}

fn elapsed_ms(report: &WalkReport) -> f64 {
    report.elapsed.as_secs_f64() * 1_000.0
}
