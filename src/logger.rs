//! File-based logging using simplelog.
//!
//! The game owns the terminal in raw mode, so log lines go to
//! `snake-arcade.log` in the working directory instead of stderr.

use std::fs::File;
use std::path::PathBuf;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

pub const LOG_FILE: &str = "snake-arcade.log";

/// Parses a `RUST_LOG`-style level name. Unknown names mean Info.
pub fn level_from(value: &str) -> LevelFilter {
    match value.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Initialize file-based logging. Returns the path of the log file.
pub fn init() -> anyhow::Result<PathBuf> {
    let log_file = PathBuf::from(LOG_FILE);

    let level = std::env::var("RUST_LOG")
        .map(|v| level_from(&v))
        .unwrap_or(LevelFilter::Info);

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let file = File::create(&log_file)?;
    WriteLogger::init(level, config, file)?;

    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names() {
        assert_eq!(level_from("DEBUG"), LevelFilter::Debug);
        assert_eq!(level_from("warn"), LevelFilter::Warn);
        assert_eq!(level_from("off"), LevelFilter::Off);
        assert_eq!(level_from("snake_arcade=debug"), LevelFilter::Info);
    }
}
