use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub shell: ShellSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShellSettings {
    pub prompt: String,
    pub banner: String,
    pub farewell: String,
    /// Longest accepted input line, in characters.
    pub max_line_length: usize,
    /// How deeply `source` may nest before it refuses.
    pub max_source_depth: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

// ── Overlay types (user config that overrides defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    shell: ShellOverlay,
    #[serde(default)]
    logging: LoggingOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct ShellOverlay {
    prompt: Option<String>,
    banner: Option<String>,
    farewell: Option<String>,
    max_line_length: Option<usize>,
    max_source_depth: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
struct LoggingOverlay {
    level: Option<String>,
    file: Option<PathBuf>,
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Embedded defaults, then the user's file on top of them if one exists.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// `<config dir>/minish/config.toml`.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("minish").join("config.toml"))
    }

    fn load_overlay() -> Option<ConfigOverlay> {
        let path = Self::user_config_path()?;
        let content = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                eprintln!("minish: {}: config parse error: {e}", path.display());
                None
            }
        }
    }

    /// Scalars present in the overlay replace the current value.
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        let s = overlay.shell;
        if let Some(v) = s.prompt {
            self.shell.prompt = v;
        }
        if let Some(v) = s.banner {
            self.shell.banner = v;
        }
        if let Some(v) = s.farewell {
            self.shell.farewell = v;
        }
        if let Some(v) = s.max_line_length {
            self.shell.max_line_length = v;
        }
        if let Some(v) = s.max_source_depth {
            self.shell.max_source_depth = v;
        }

        let l = overlay.logging;
        if let Some(v) = l.level {
            self.logging.level = v;
        }
        if l.file.is_some() {
            self.logging.file = l.file;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
