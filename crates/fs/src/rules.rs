use hashbrown::HashSet;

/// Skip and allow lists consulted by the walker.
///
/// Built once before a scan and shared read-only with every worker.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    skip_directories: HashSet<String>,
    allowed_extensions: HashSet<String>,
}

impl RuleSet {
    pub fn new<S, E>(skip_directories: S, allowed_extensions: E) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        RuleSet {
            skip_directories: skip_directories.into_iter().map(Into::into).collect(),
            allowed_extensions: allowed_extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact base-name match; paths and globs are not interpreted.
    #[inline]
    #[must_use]
    pub fn is_skipped_dir(&self, name: &str) -> bool {
        self.skip_directories.contains(name)
    }

    /// An empty allow list admits every extension, including none.
    #[inline]
    #[must_use]
    pub fn is_allowed_ext(&self, extension: &str) -> bool {
        self.allowed_extensions.is_empty() || self.allowed_extensions.contains(extension)
    }

    pub fn skip_directories(&self) -> impl Iterator<Item = &str> {
        self.skip_directories.iter().map(String::as_str)
    }

    pub fn allowed_extensions(&self) -> impl Iterator<Item = &str> {
        self.allowed_extensions.iter().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
