use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use log::{debug, info};
use tally_fs::{FileInfo, FileTask, RuleSet, ScanError, WalkStats, WorkerPool, walk};
use tally_report::{ReportSet, Selector, aggregate};
use tally_runtime::{ConfigError, MAX_WORKERS, Settings, default_worker_count};

/// Everything a scan needs, validated and frozen before the walk starts.
#[derive(Debug, Clone)]
pub struct ScanParams {
    pub root: PathBuf,
    pub rules: RuleSet,
    pub selector: Selector,
    pub workers: usize,
}

impl ScanParams {
    /// Scan `root` with no rules, no itemization and default parallelism.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ScanParams {
            root: root.into(),
            rules: RuleSet::default(),
            selector: Selector::Disabled,
            workers: default_worker_count(),
        }
    }

    /// Validate merged settings. Fails before any traversal happens.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let root = settings.validated_root()?;
        let workers = settings
            .validated_workers()?
            .unwrap_or_else(default_worker_count);

        Ok(ScanParams {
            root,
            rules: RuleSet::new(settings.skip.iter().cloned(), settings.ext.iter().cloned()),
            selector: Selector::from_threshold(settings.print_by_size, settings.print_value),
            workers,
        })
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.clamp(1, MAX_WORKERS);
        self
    }

    /// One-line description of the active rules, for the debug log.
    pub fn describe(&self) -> String {
        let mut skip: Vec<_> = self.rules.skip_directories().collect();
        let mut ext: Vec<_> = self.rules.allowed_extensions().collect();
        skip.sort_unstable();
        ext.sort_unstable();

        let ext = if ext.is_empty() {
            "all".to_string()
        } else {
            ext.join(",")
        };
        let itemize = match self.selector {
            Selector::ByLines(t) if self.selector.is_enabled() => format!("lines >= {t}"),
            Selector::BySize(t) if self.selector.is_enabled() => format!("size >= {t}"),
            _ => "off".to_string(),
        };

        format!("skip [{}], ext [{ext}], itemize {itemize}", skip.join(","))
    }
}

/// Raw output of the walk and the worker pool, before aggregation.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Per-file metrics in completion order.
    pub results: Vec<FileInfo>,
    pub errors: Vec<ScanError>,
    pub stats: WalkStats,
}

/// Aggregated report plus every error recorded during the scan.
#[derive(Debug)]
pub struct ScanReport {
    pub report: ReportSet,
    pub errors: Vec<ScanError>,
    pub elapsed: Duration,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Walk `params.root` and count every eligible file on the worker pool.
pub fn scan(params: &ScanParams) -> Result<ScanOutcome> {
    let mut pool = WorkerPool::<FileTask>::new(params.workers)
        .context("failed to start worker threads")?;

    debug!(
        "[scan] {} with {} workers",
        params.root.display(),
        pool.workers()
    );
    debug!("[scan] rules: {}", params.describe());

    let stats = walk(&params.root, &params.rules, &mut pool);
    let collected = pool.wait()?;

    Ok(ScanOutcome {
        results: collected.results,
        errors: collected.errors,
        stats,
    })
}

/// Scan and aggregate in one step.
pub fn run(params: &ScanParams) -> Result<ScanReport> {
    let started = Instant::now();

    let outcome = scan(params)
        .with_context(|| format!("Failed to scan {}", params.root.display()))?;
    let report = aggregate(outcome.results, &params.selector);
    let elapsed = started.elapsed();

    info!(
        "[scan] {}: {} files, {} lines, {} errors in {:.2?}",
        display_root(&params.root),
        report.total.count,
        report.total.lines,
        outcome.errors.len(),
        elapsed
    );

    Ok(ScanReport {
        report,
        errors: outcome.errors,
        elapsed,
    })
}

fn display_root(root: &Path) -> String {
    root.canonicalize()
        .unwrap_or_else(|_| root.to_path_buf())
        .display()
        .to_string()
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
