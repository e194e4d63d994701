use std::path::PathBuf;

use clap::{Args, Parser};
use tally_runtime::{ConfigError, Settings, default_config_path};

use crate::printer::{HumanPrinter, JsonPrinter, PrinterConfig, ReportPrinter};

#[derive(Debug, Parser)]
#[command(
    name = "tally",
    version,
    about = "Count lines and bytes per file extension"
)]
pub struct Cli {
    /// Directory to scan; overrides `root` from the config file
    #[arg(long, short = 'r', value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// JSON configuration file [default: ./config.json, then the user config dir]
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory name to skip; may be repeated
    #[arg(long = "skip", value_name = "NAME")]
    pub skip: Vec<String>,

    /// Extension to count, with the leading dot; may be repeated
    #[arg(long = "ext", value_name = "EXT")]
    pub ext: Vec<String>,

    /// Itemize files by byte size instead of line count
    #[arg(long)]
    pub by_size: bool,

    /// Itemize files at or above this many lines (or bytes); <= 0 disables
    #[arg(long, short = 't', allow_negative_numbers = true)]
    pub threshold: Option<i64>,

    /// Number of worker threads [default: available parallelism]
    #[arg(long, short = 'j')]
    pub workers: Option<usize>,

    /// Output formatting options
    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Print the report as a single JSON document
    #[arg(long)]
    pub json: bool,

    /// Suppress the execution time
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl OutputOptions {
    pub fn make_printer(&self) -> Box<dyn ReportPrinter> {
        let cfg = PrinterConfig {
            show_timing: !self.quiet,
        };

        if self.json {
            Box::new(JsonPrinter::stdout(cfg))
        } else {
            Box::new(HumanPrinter::stdout(cfg))
        }
    }
}

impl Cli {
    /// Config file settings with command-line overrides applied.
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let base = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::load_optional(&default_config_path())?.unwrap_or_default(),
        };
        Ok(self.apply_overrides(base))
    }

    /// Scalars replace config values; lists extend them.
    fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(root) = &self.root {
            settings.root = Some(root.clone());
        }
        settings.skip.extend(self.skip.iter().cloned());
        settings.ext.extend(self.ext.iter().cloned());
        if self.by_size {
            settings.print_by_size = true;
        }
        if let Some(threshold) = self.threshold {
            settings.print_value = threshold;
        }
        if let Some(workers) = self.workers {
            settings.workers = Some(workers);
        }
        settings
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
