use serde::Serialize;
use tally_fs::FileInfo;

/// Which files are itemized in the report.
///
/// A threshold of zero or below disables itemization; otherwise a file is
/// selected when its metric is at least the threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "threshold", rename_all = "snake_case")]
pub enum Selector {
    #[default]
    Disabled,
    ByLines(i64),
    BySize(i64),
}

impl Selector {
    /// Build from the config pair `(print_by_size, print_value)`.
    pub fn from_threshold(by_size: bool, threshold: i64) -> Self {
        match (by_size, threshold) {
            (_, t) if t <= 0 => Selector::Disabled,
            (true, t) => Selector::BySize(t),
            (false, t) => Selector::ByLines(t),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.threshold().is_some()
    }

    fn threshold(&self) -> Option<u64> {
        match *self {
            Selector::ByLines(t) | Selector::BySize(t) if t > 0 => Some(t as u64),
            _ => None,
        }
    }

    #[inline]
    pub fn matches(&self, info: &FileInfo) -> bool {
        match (self, self.threshold()) {
            (Selector::ByLines(_), Some(t)) => t <= info.lines,
            (Selector::BySize(_), Some(t)) => t <= info.size,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn info(lines: u64, size: u64) -> FileInfo {
        FileInfo {
            path: PathBuf::from("f.rs"),
            size,
            lines,
            extension: ".rs".into(),
        }
    }

    #[test]
    fn matches_cases() {
        let cases: &[(Selector, u64, u64, bool)] = &[
            (Selector::Disabled, 1_000, 1_000, false),
            (Selector::ByLines(0), 1_000, 1_000, false),
            (Selector::ByLines(-5), 1_000, 1_000, false),
            (Selector::ByLines(10), 9, 1_000, false),
            (Selector::ByLines(10), 10, 0, true),
            (Selector::ByLines(10), 11, 0, true),
            (Selector::BySize(0), 1_000, 1_000, false),
            (Selector::BySize(-1), 1_000, 1_000, false),
            (Selector::BySize(512), 1_000, 511, false),
            (Selector::BySize(512), 0, 512, true),
        ];

        for (selector, lines, size, expected) in cases {
            assert_eq!(
                selector.matches(&info(*lines, *size)),
                *expected,
                "{selector:?} lines={lines} size={size}"
            );
        }
    }

    #[test]
    fn from_threshold_picks_mode_and_disables_non_positive() {
        assert_eq!(Selector::from_threshold(false, 100), Selector::ByLines(100));
        assert_eq!(Selector::from_threshold(true, 100), Selector::BySize(100));
        assert_eq!(Selector::from_threshold(true, 0), Selector::Disabled);
        assert_eq!(Selector::from_threshold(false, -1), Selector::Disabled);
    }

    #[test]
    fn is_enabled_reflects_threshold() {
        assert!(!Selector::Disabled.is_enabled());
        assert!(!Selector::ByLines(0).is_enabled());
        assert!(Selector::BySize(1).is_enabled());
    }
}
