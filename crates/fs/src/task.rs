use std::{fs::File, path::PathBuf};

use log::debug;

use crate::{counter::count_lines, error::ScanError, pool::Job, record::FileInfo};

/// Count the lines of one discovered file.
#[derive(Debug, Clone)]
pub struct FileTask {
    pub path: PathBuf,
    /// Size from discovery-time metadata; not re-read when the task runs.
    pub size: u64,
    pub extension: String,
}

impl FileTask {
    pub fn new(path: PathBuf, size: u64, extension: String) -> Self {
        FileTask {
            path,
            size,
            extension,
        }
    }

    pub fn run(self) -> Result<FileInfo, ScanError> {
        // The handle is dropped on every return path below.
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(source) => {
                return Err(ScanError::Open {
                    path: self.path,
                    source,
                });
            }
        };

        let lines = match count_lines(file) {
            Ok(n) => n,
            Err(source) => {
                return Err(ScanError::Read {
                    path: self.path,
                    source,
                });
            }
        };

        debug!("[task] {} lines={lines}", self.path.display());

        Ok(FileInfo {
            path: self.path,
            size: self.size,
            lines,
            extension: self.extension,
        })
    }
}

impl Job for FileTask {
    type Output = FileInfo;

    fn run(self) -> Result<FileInfo, ScanError> {
        FileTask::run(self)
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
