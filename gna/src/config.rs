use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gna::SubmissionWindow;
use serde::Deserialize;
use tracing::{debug, info};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "gna.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GnaConfig {
    /// Days for which attendance may be declared.
    #[serde(default)]
    pub submission_window: SubmissionWindow,
}

impl GnaConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, `./gna.toml` is read when
    /// present and the built-in defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !p.exists() {
                    debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    return Ok(GnaConfig::default());
                }
                p
            }
        };
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        info!(path = %path.display(), window = %config.submission_window, "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(GnaConfig::from_toml("").unwrap(), GnaConfig::default());
    }

    #[test]
    fn window_override() {
        let cfg = GnaConfig::from_toml(
            r#"
            [submission_window]
            start = "06-01"
            end = "06-30"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.submission_window.start.to_string(), "06-01");
        assert_eq!(cfg.submission_window.end.to_string(), "06-30");
    }

    #[test]
    fn invalid_day_is_rejected() {
        let err = GnaConfig::from_toml(
            r#"
            [submission_window]
            start = "02-30"
            end = "03-10"
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(GnaConfig::from_toml("colour = \"blue\"").is_err());
        assert!(GnaConfig::from_toml(
            "[submission_window]\nstart = \"12-17\"\nend = \"01-11\"\nlength = 3"
        )
        .is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(GnaConfig::load(Some(Path::new("/nonexistent/gna.toml"))).is_err());
    }
}
