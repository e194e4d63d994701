use std::collections::BTreeMap;

use serde::Serialize;
use tally_fs::FileInfo;

/// Running totals for a set of files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GroupFileInfo {
    pub count: u64,
    pub size: u64,
    pub lines: u64,
}

impl GroupFileInfo {
    #[inline]
    pub fn add(&mut self, info: &FileInfo) {
        self.count += 1;
        self.size += info.size;
        self.lines += info.lines;
    }
}

/// Aggregated output of one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSet {
    /// Per-extension totals, keyed by extension ("" for none)
    pub by_extension: BTreeMap<String, GroupFileInfo>,
    pub total: GroupFileInfo,
    /// Itemized files in ascending line order
    pub selected: Vec<FileInfo>,
}
