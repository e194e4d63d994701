mod bytes;

use std::io::{self, Write};

use tally_fs::FileInfo;
use tally_report::GroupFileInfo;
use tally_scanner::ScanReport;

pub use bytes::format_size;

/// Label printed for files without an extension.
const NO_EXTENSION: &str = "<none>";

/// Configuration for printing a scan report.
#[derive(Debug, Clone, Copy)]
pub struct PrinterConfig {
    /// Whether to show the execution time.
    pub show_timing: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self { show_timing: true }
    }
}

/// Renders a finished scan.
pub trait ReportPrinter {
    fn print(&mut self, scan: &ScanReport) -> io::Result<()>;
}

/// Plain-text report: itemized files, errors, per-extension and total counts.
pub struct HumanPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    cfg: PrinterConfig,
}

impl<W: Write, E: Write> HumanPrinter<W, E> {
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        Self { out, err, cfg }
    }

    fn write_file(&mut self, info: &FileInfo) -> io::Result<()> {
        writeln!(
            self.out,
            "Path = {}; Size = {}; LineCount = {}",
            info.path.display(),
            format_size(info.size),
            info.lines
        )
    }

    fn write_group(&mut self, label: &str, group: &GroupFileInfo) -> io::Result<()> {
        writeln!(
            self.out,
            "{} => count = {}; size = {}; lines = {}",
            label,
            group.count,
            format_size(group.size),
            group.lines
        )
    }
}

impl HumanPrinter<io::Stdout, io::Stderr> {
    /// Create a printer that writes to stdout and stderr.
    pub fn stdout(cfg: PrinterConfig) -> Self {
        Self::new(io::stdout(), io::stderr(), cfg)
    }
}

impl<W: Write, E: Write> ReportPrinter for HumanPrinter<W, E> {
    fn print(&mut self, scan: &ScanReport) -> io::Result<()> {
        let report = &scan.report;

        writeln!(self.out, "Files:")?;
        for info in &report.selected {
            self.write_file(info)?;
        }

        writeln!(self.out, "Errors:")?;
        for error in &scan.errors {
            writeln!(self.out, "Error: {error}")?;
        }

        writeln!(self.out, "File count by suffix:")?;
        for (ext, group) in &report.by_extension {
            let label = if ext.is_empty() { NO_EXTENSION } else { ext };
            self.write_group(label, group)?;
        }

        writeln!(self.out, "Total file info:")?;
        self.write_group("total", &report.total)?;

        if self.cfg.show_timing {
            writeln!(
                self.err,
                "Execution time = {:.2}ms",
                scan.elapsed.as_secs_f64() * 1000.0
            )?;
        }

        self.out.flush()
    }
}

/// Single JSON document on stdout.
pub struct JsonPrinter<W: Write> {
    out: W,
    cfg: PrinterConfig,
}

impl<W: Write> JsonPrinter<W> {
    pub fn new(out: W, cfg: PrinterConfig) -> Self {
        Self { out, cfg }
    }
}

impl JsonPrinter<io::Stdout> {
    pub fn stdout(cfg: PrinterConfig) -> Self {
        Self::new(io::stdout(), cfg)
    }
}

impl<W: Write> ReportPrinter for JsonPrinter<W> {
    fn print(&mut self, scan: &ScanReport) -> io::Result<()> {
        let errors: Vec<String> = scan.errors.iter().map(ToString::to_string).collect();

        let mut obj = serde_json::json!({
            "by_extension": scan.report.by_extension,
            "total": scan.report.total,
            "selected": scan.report.selected,
            "errors": errors,
        });

        if self.cfg.show_timing {
            obj["elapsed_ms"] = serde_json::json!(scan.elapsed.as_secs_f64() * 1000.0);
        }

        writeln!(self.out, "{}", obj)?;
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
