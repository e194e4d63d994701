use std::path::PathBuf;

pub const PROGRAM_NAME: &str = "tally";
pub const PROGRAM_LOG_LEVEL: &str = "TALLY_LOG_LEVEL";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Threshold meaning "itemize nothing".
pub const DEFAULT_PRINT_VALUE: i64 = -1;

/// Worker count used when the platform cannot report its parallelism.
const FALLBACK_WORKERS: usize = 4;

/// Largest worker count a configuration may request. Each worker holds one
/// open file while it counts.
pub const MAX_WORKERS: usize = 1024;

/// Per-user configuration file, e.g. `~/.config/tally/config.json`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(PROGRAM_NAME).join(CONFIG_FILE_NAME))
}

/// Configuration file consulted when `--config` is not given.
///
/// `config.json` in the working directory wins over the per-user file.
pub fn default_config_path() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return local;
    }

    match user_config_path() {
        Some(path) if path.is_file() => path,
        _ => local,
    }
}

pub fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(FALLBACK_WORKERS)
}
