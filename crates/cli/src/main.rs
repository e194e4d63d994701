use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::error;

mod args;
mod printer;

use args::Cli;
use tally_runtime::logging;
use tally_scanner::{ScanParams, run};

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    match execute(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!("[error] {e:#}");
            eprintln!("[tally] {e:#}");
            ExitCode::from(2)
        }
    }
}

fn execute(cli: &Cli) -> Result<ExitCode> {
    let settings = cli.settings()?;
    let params = ScanParams::from_settings(&settings)?;

    let scan_report = run(&params)?;

    let mut printer = cli.output.make_printer();
    printer.print(&scan_report)?;

    if scan_report.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        // Scan finished, but some files or directories could not be read.
        Ok(ExitCode::from(1))
    }
}
