use std::path::{Path, PathBuf};

use calendar_grid::EventOrder;
use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;
use tracing::debug;

use crate::theme::ThemeConfig;

/// Contents of `config.toml`.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// JSON events file. The bundled sample events are used when unset.
    #[serde(default)]
    pub events: Option<PathBuf>,

    /// Order of events within a day.
    #[serde(default)]
    pub event_order: EventOrder,

    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Config {
    /// Load from an explicit path, or from the default location if it exists.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml(&content)
            .wrap_err_with(|| format!("invalid config {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("calendar-grid").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.event_order, EventOrder::Collection);
    }

    #[test]
    fn parses_full_config() {
        let config = Config::from_toml(
            r##"
events = "/tmp/events.json"
event_order = "start_time"

[theme]
preset = "gruvbox"
conflict_fg = "#ff0000"
"##,
        )
        .unwrap();
        assert_eq!(config.events, Some(PathBuf::from("/tmp/events.json")));
        assert_eq!(config.event_order, EventOrder::StartTime);
        assert_eq!(config.theme.preset.as_deref(), Some("gruvbox"));
        assert_eq!(config.theme.conflict_fg.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(Config::from_toml("week_start = \"monday\"").is_err());
        assert!(Config::from_toml("event_order = \"alphabetical\"").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn loads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "event_order = \"start_time\"\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.event_order, EventOrder::StartTime);
    }
}
