use std::{
    fs::{self, read_dir},
    path::{Path, PathBuf},
};

use log::{debug, warn};

use crate::{
    error::ScanError,
    pool::WorkerPool,
    record::extension_of,
    rules::RuleSet,
    task::FileTask,
};

/// Receiver of the walker's output.
pub trait TaskSink {
    fn submit(&mut self, task: FileTask);
    fn report(&mut self, error: ScanError);
}

impl TaskSink for WorkerPool<FileTask> {
    fn submit(&mut self, task: FileTask) {
        WorkerPool::submit(self, task);
    }

    fn report(&mut self, error: ScanError) {
        WorkerPool::report(self, error);
    }
}

/// Counters describing one walk, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub dirs: usize,
    pub submitted: usize,
    pub pruned_dirs: usize,
    pub filtered_files: usize,
}

enum Visit {
    Descend(PathBuf),
    Count(FileTask),
    Pruned,
    Filtered,
    Ignored,
}

/// Depth-first walk of `root`, submitting one task per eligible file.
///
/// Directories named in the skip list are pruned; the root itself is always
/// listed. Listing failures are reported to `sink` and the walk continues
/// with the remaining subtrees.
pub fn walk<S: TaskSink + ?Sized>(root: &Path, rules: &RuleSet, sink: &mut S) -> WalkStats {
    let mut stats = WalkStats::default();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        stats.dirs += 1;
        let mut subdirs = Vec::new();
        scan_dir(&dir, rules, sink, &mut subdirs, &mut stats);
        // Reversed so the first listed subdirectory is visited first.
        stack.extend(subdirs.into_iter().rev());
    }

    debug!(
        "[walk] {}: {} dirs, {} files submitted, {} dirs pruned, {} files filtered",
        root.display(),
        stats.dirs,
        stats.submitted,
        stats.pruned_dirs,
        stats.filtered_files
    );

    stats
}

fn scan_dir<S: TaskSink + ?Sized>(
    dir: &Path,
    rules: &RuleSet,
    sink: &mut S,
    subdirs: &mut Vec<PathBuf>,
    stats: &mut WalkStats,
) {
    let rd = match read_dir(dir) {
        Ok(rd) => rd,
        Err(source) => {
            warn!("[walk] read_dir({:?}) failed: {source}", dir);
            sink.report(ScanError::Traversal {
                path: dir.to_path_buf(),
                source,
            });
            return;
        }
    };

    for entry_res in rd {
        let entry = match entry_res {
            Ok(e) => e,
            Err(source) => {
                warn!("[walk] error reading entry in {:?}: {source}", dir);
                sink.report(ScanError::Traversal {
                    path: dir.to_path_buf(),
                    source,
                });
                continue;
            }
        };

        match inspect_entry(&entry, rules) {
            Ok(Visit::Descend(path)) => subdirs.push(path),
            Ok(Visit::Count(task)) => {
                stats.submitted += 1;
                sink.submit(task);
            }
            Ok(Visit::Pruned) => stats.pruned_dirs += 1,
            Ok(Visit::Filtered) => stats.filtered_files += 1,
            Ok(Visit::Ignored) => {}
            Err(e) => {
                warn!("[walk] {e}");
                sink.report(e);
            }
        }
    }
}

fn inspect_entry(entry: &fs::DirEntry, rules: &RuleSet) -> Result<Visit, ScanError> {
    let path = entry.path();
    let file_type = match entry.file_type() {
        Ok(ft) => ft,
        Err(source) => return Err(ScanError::Traversal { path, source }),
    };

    if file_type.is_dir() {
        let name = entry.file_name();
        if rules.is_skipped_dir(&name.to_string_lossy()) {
            debug!("[walk] pruning {:?}", path);
            return Ok(Visit::Pruned);
        }
        return Ok(Visit::Descend(path));
    }

    let extension = extension_of(&path);
    if !rules.is_allowed_ext(&extension) {
        return Ok(Visit::Filtered);
    }

    // Size is captured here so the task never re-stats the file.
    let size = if file_type.is_file() {
        match entry.metadata() {
            Ok(meta) => meta.len(),
            Err(source) => return Err(ScanError::Traversal { path, source }),
        }
    } else if file_type.is_symlink() {
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => meta.len(),
            Ok(_) => {
                debug!("[walk] not following link {:?}", path);
                return Ok(Visit::Ignored);
            }
            Err(source) => return Err(ScanError::Traversal { path, source }),
        }
    } else {
        debug!("[walk] skipping special file {:?}", path);
        return Ok(Visit::Ignored);
    };

    Ok(Visit::Count(FileTask::new(path, size, extension)))
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
