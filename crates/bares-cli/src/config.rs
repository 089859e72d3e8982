//! Runtime configuration for the `bares` CLI.
//!
//! # Config file: `.baresrc`
//!
//! TOML, looked up in two places:
//!
//! - **Global**: `~/.baresrc`
//! - **Local**: `.baresrc` in the current directory or any parent, overrides global
//!
//! ```toml
//! colored = true
//! show_tokens = false
//! show_postfix = true
//! stop_on_error = false
//! threads = 4
//! ```
//!
//! All fields are optional. Command-line flags override both files.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".baresrc";

/// TOML-friendly intermediate representation (all fields optional).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    colored: Option<bool>,
    show_tokens: Option<bool>,
    show_postfix: Option<bool>,
    stop_on_error: Option<bool>,
    /// Worker threads for batch evaluation (0 = all cores).
    threads: Option<usize>,
}

/// # Defaults
///
/// | Setting | Default |
/// |---------|---------|
/// | `colored` | `true` |
/// | `show_tokens` | `false` |
/// | `show_postfix` | `false` |
/// | `stop_on_error` | `false` |
/// | `threads` | `0` (= use all available cores) |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub colored: bool,
    /// Print the token list of every expression.
    pub show_tokens: bool,
    /// Print the postfix form of every valid expression.
    pub show_postfix: bool,
    /// Stop at the first expression that fails instead of reporting all.
    pub stop_on_error: bool,
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colored: true,
            show_tokens: false,
            show_postfix: false,
            stop_on_error: false,
            threads: 0,
        }
    }
}

impl Config {
    /// Loads `~/.baresrc`, then the nearest local `.baresrc` above
    /// `start_dir`. Returns defaults if neither exists.
    pub fn load(start_dir: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::find_global_config() {
            config.merge(Self::read_file(&global_path)?);
        }
        if let Some(local_path) = Self::find_local_config(start_dir) {
            config.merge(Self::read_file(&local_path)?);
        }

        Ok(config)
    }

    /// Loads exactly one file, ignoring the global and local lookup.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_str(toml_str: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(toml_str).context("Failed to parse config")?;
        let mut config = Self::default();
        config.merge(file);
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<ConfigFile> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn merge(&mut self, file: ConfigFile) {
        if let Some(colored) = file.colored {
            self.colored = colored;
        }
        if let Some(show_tokens) = file.show_tokens {
            self.show_tokens = show_tokens;
        }
        if let Some(show_postfix) = file.show_postfix {
            self.show_postfix = show_postfix;
        }
        if let Some(stop_on_error) = file.stop_on_error {
            self.stop_on_error = stop_on_error;
        }
        if let Some(threads) = file.threads {
            self.threads = threads;
        }
    }

    fn find_global_config() -> Option<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(CONFIG_FILE_NAME))
            .filter(|p| p.is_file())
    }

    fn find_local_config(start_dir: impl AsRef<Path>) -> Option<PathBuf> {
        let mut dir = start_dir.as_ref().to_path_buf();
        if let Ok(abs) = dir.canonicalize() {
            dir = abs;
        }

        loop {
            let rc_file = dir.join(CONFIG_FILE_NAME);
            if rc_file.is_file() {
                return Some(rc_file);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Applies command-line flags on top of the file settings.
    pub fn merge_cli_args(
        &mut self,
        no_color: bool,
        show_tokens: bool,
        show_postfix: bool,
        stop_on_error: bool,
        threads: Option<usize>,
    ) {
        if no_color {
            self.colored = false;
        }
        if show_tokens {
            self.show_tokens = true;
        }
        if show_postfix {
            self.show_postfix = true;
        }
        if stop_on_error {
            self.stop_on_error = true;
        }
        if let Some(threads) = threads {
            self.threads = threads;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert!(cfg.colored);
        assert!(!cfg.show_tokens);
        assert!(!cfg.show_postfix);
        assert!(!cfg.stop_on_error);
        assert_eq!(cfg.threads, 0);
    }

    #[test]
    fn test_parse_partial_config() {
        let cfg = Config::from_str("show_postfix = true\nthreads = 2").unwrap();
        assert!(cfg.show_postfix);
        assert_eq!(cfg.threads, 2);
        assert!(cfg.colored);
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(Config::from_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(Config::from_str("colour = false").is_err());
    }

    #[test]
    fn test_local_file_found_from_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "show_tokens = true\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = Config::find_local_config(&nested).unwrap();
        let cfg = Config::from_file(&found).unwrap();
        assert!(cfg.show_tokens);
    }

    #[test]
    fn test_cli_args_override_file() {
        let mut cfg = Config::from_str("colored = true\nthreads = 8").unwrap();
        cfg.merge_cli_args(true, false, true, false, Some(1));
        assert!(!cfg.colored);
        assert!(cfg.show_postfix);
        assert!(!cfg.show_tokens);
        assert_eq!(cfg.threads, 1);
    }
}
