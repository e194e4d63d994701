mod config;
pub mod logging;
pub mod settings;

pub use config::{
    CONFIG_FILE_NAME, DEFAULT_PRINT_VALUE, PROGRAM_LOG_LEVEL, PROGRAM_NAME, default_config_path,
    MAX_WORKERS, default_worker_count, user_config_path,
};
pub use settings::{ConfigError, Settings};

pub use logging::init;
