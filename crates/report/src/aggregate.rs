use log::debug;
use tally_fs::FileInfo;

use crate::{group::ReportSet, selector::Selector};

/// Group `results` by extension and total them.
///
/// Results are sorted by line count ascending, ties by path, so the report is
/// the same whatever order the workers finished in.
pub fn aggregate(mut results: Vec<FileInfo>, selector: &Selector) -> ReportSet {
    results.sort_by(|a, b| a.lines.cmp(&b.lines).then_with(|| a.path.cmp(&b.path)));

    let mut report = ReportSet::default();

    for info in results {
        report
            .by_extension
            .entry(info.extension.clone())
            .or_default()
            .add(&info);
        report.total.add(&info);

        if selector.matches(&info) {
            report.selected.push(info);
        }
    }

    debug!(
        "[report] {} files, {} extensions, {} selected",
        report.total.count,
        report.by_extension.len(),
        report.selected.len()
    );

    report
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
