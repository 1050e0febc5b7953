use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::LoggingSettings;

/// `<data dir>/minish/minish.log`.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("minish").join("minish.log"))
}

/// Parse a level name; anything unrecognised falls back to `warn`.
pub fn level_filter(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or(LevelFilter::Warn)
}

/// Install a file logger. The terminal belongs to the user, so nothing is
/// ever logged there; if the log file cannot be opened the shell runs
/// without a logger.
pub fn init(settings: &LoggingSettings) {
    let level = level_filter(&settings.level);
    if level == LevelFilter::Off {
        return;
    }

    let Some(path) = settings.file.clone().or_else(default_log_path) else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match std::fs::OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("minish: cannot open log file {}: {}", path.display(), e);
            return;
        }
    };

    let config = ConfigBuilder::new().set_target_level(LevelFilter::Off).build();
    if let Err(e) = WriteLogger::init(level, config, file) {
        eprintln!("minish: logger setup failed: {}", e);
    }
}
