use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// A failure tied to one path. Recorded and reported, never fatal to a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A directory could not be listed, or a link could not be resolved.
    #[error("cannot read {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read failed for {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub fn path(&self) -> &Path {
        match self {
            ScanError::Traversal { path, .. }
            | ScanError::Open { path, .. }
            | ScanError::Read { path, .. } => path,
        }
    }

    pub fn is_traversal(&self) -> bool {
        matches!(self, ScanError::Traversal { .. })
    }
}
