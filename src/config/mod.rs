//! Configuration loading
//!
//! Reads an optional TOML config from the platform config directory. A
//! missing file means defaults; an unreadable or invalid file is logged and
//! ignored rather than failing startup.

mod types;

pub use types::{Config, ReviewConfig};

use std::path::{Path, PathBuf};

/// Platform config file location, e.g. `~/.config/redline/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("redline").join("config.toml"))
}

/// Load the config from the platform location, defaulting when absent
pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => Config::default(),
    }
}

/// Load a config file from an explicit path, defaulting on any failure
pub fn load_from(path: &Path) -> Config {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        // no config file is the normal case
        Err(_) => return Config::default(),
    };
    match toml::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring invalid config {}: {err}", path.display());
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("nope.toml"));
        assert!(config.review.auto_save);
        assert!(config.review.inline_decorations);
    }

    #[test]
    fn test_valid_file_parsed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[review]\nauto_save = false").unwrap();
        let config = load_from(file.path());
        assert!(!config.review.auto_save);
        assert!(config.review.inline_decorations);
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not [valid toml").unwrap();
        let config = load_from(file.path());
        assert!(config.review.auto_save);
    }
}
