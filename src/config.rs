//! Optional settings loaded from `.snake-arcade.toml`.

use std::{env, path::{Path, PathBuf}, time::Duration};

use log::{debug, warn};
use serde::Deserialize;

use crate::TermInt;

pub const CONFIG_FILE: &str = ".snake-arcade.toml";

const MAX_CELL_WIDTH: TermInt = 4;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Milliseconds between simulation steps
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Terminal columns per grid cell. Terminal characters are taller than
    /// they are wide, so 2 gives roughly square cells.
    #[serde(default = "default_cell_width")]
    pub cell_width: TermInt,
}

fn default_tick_ms() -> u64 {
    200 // 5 steps per second
}

fn default_cell_width() -> TermInt {
    2
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { tick_ms: default_tick_ms(), cell_width: default_cell_width() }
    }
}

impl GameConfig {
    /// Load from the current directory first, then the home directory, or
    /// fall back to defaults.
    pub fn load() -> Self {
        let candidates = std::iter::once(PathBuf::from(CONFIG_FILE)).chain(home_config_path());

        for path in candidates {
            if path.is_file() {
                return Self::load_from(&path);
            }
        }

        debug!("No {} found, using defaults", CONFIG_FILE);
        Self::default()
    }

    /// Reads one file. Unreadable or invalid content yields defaults.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Could not read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match toml::from_str::<GameConfig>(&content) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                config.sanitized()
            }
            Err(e) => {
                warn!("Failed to parse {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    fn sanitized(mut self) -> Self {
        if self.tick_ms == 0 {
            warn!("tick_ms must be positive, using {}", default_tick_ms());
            self.tick_ms = default_tick_ms();
        }

        if !(1..=MAX_CELL_WIDTH).contains(&self.cell_width) {
            warn!(
                "cell_width {} out of range 1..={}, using {}",
                self.cell_width,
                MAX_CELL_WIDTH,
                default_cell_width()
            );
            self.cell_width = default_cell_width();
        }

        self
    }
}

fn home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.tick_ms, 200);
        assert_eq!(config.cell_width, 2);
        assert_eq!(config.tick_interval(), Duration::from_millis(200));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let file = write_config("tick_ms = 120\n");
        let config = GameConfig::load_from(file.path());
        assert_eq!(config, GameConfig { tick_ms: 120, cell_width: 2 });
    }

    #[test]
    fn out_of_range_values_are_replaced() {
        let file = write_config("tick_ms = 0\ncell_width = 9\n");
        assert_eq!(GameConfig::load_from(file.path()), GameConfig::default());
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        let file = write_config("tick_ms = \"fast\"");
        assert_eq!(GameConfig::load_from(file.path()), GameConfig::default());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_from(&dir.path().join("nope.toml"));
        assert_eq!(config, GameConfig::default());
    }
}
