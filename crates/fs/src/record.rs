use std::path::{Path, PathBuf};

use serde::Serialize;

/// Metrics for one counted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub path: PathBuf,
    /// Size in bytes, as seen when the file was discovered
    pub size: u64,
    /// Number of `\n` bytes
    pub lines: u64,
    /// Extension with the leading dot e.g., '.rs', or empty
    pub extension: String,
}

/// Extension of `path`'s base name, from the last `.` inclusive.
///
/// Returns an empty string when the name has no dot. Dotfiles such as
/// `.bashrc` are their own extension.
pub fn extension_of(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();

    match name.rfind('.') {
        Some(idx) => name[idx..].to_owned(),
        None => String::new(),
    }
}
