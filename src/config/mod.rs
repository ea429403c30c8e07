//! Configuration system for waypointer.
//!
//! This module provides the configuration structure for waypointer with sensible
//! defaults and support for serialization/deserialization via serde. Configuration
//! is loaded from a TOML file and merged with command-line arguments.
//!
//! # Example
//!
//! ```
//! use waypointer::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.theme, "default-dark");
//! assert_eq!(config.backward_capacity, None);
//!
//! // Create custom configuration
//! let custom = Config {
//!     backward_capacity: Some(64),
//!     confirm_save: false,
//!     ..Config::default()
//! };
//! assert_eq!(custom.backward_capacity, Some(64));
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::history::WaypointNavigator;

/// Configuration for the waypointer application.
///
/// All fields have defaults, so a config file only needs the settings it
/// changes.
///
/// # Fields
///
/// * `theme` - Color scheme name (default: "default-dark")
/// * `backward_capacity` - Hard limit on saved waypoints (default: unbounded)
/// * `forward_capacity` - Hard limit on forward entries (default: unbounded)
/// * `confirm_save` - Show a message when a waypoint is stored (default: true)
/// * `show_line_numbers` - Display line numbers in the text view (default: true)
/// * `show_waypoint_panel` - Display the stack side panel (default: true)
/// * `log_file` - Where to write logs; nothing is logged when unset
/// * `log_level` - Log filter used when `RUST_LOG` is not set (default: "info")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Maximum number of backward waypoints; pushing past it is an error
    #[serde(default)]
    pub backward_capacity: Option<usize>,

    /// Maximum number of forward waypoints; pushing past it is an error
    #[serde(default)]
    pub forward_capacity: Option<usize>,

    /// Show a message when a waypoint is stored
    #[serde(default = "default_true")]
    pub confirm_save: bool,

    /// Display line numbers in the text view
    #[serde(default = "default_true")]
    pub show_line_numbers: bool,

    /// Display the backward/forward side panel
    #[serde(default = "default_true")]
    pub show_waypoint_panel: bool,

    /// Log destination
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Returns the default theme name.
fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_true() -> bool {
    true
}

/// Returns the default log level.
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            backward_capacity: None,
            forward_capacity: None,
            confirm_save: true,
            show_line_numbers: true,
            show_waypoint_panel: true,
            log_file: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/waypointer/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("waypointer");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                Self::default()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read config");
                Self::default()
            }
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Builds a navigator using the configured capacities.
    pub fn build_navigator(&self) -> WaypointNavigator {
        let mut navigator =
            WaypointNavigator::with_capacities(self.backward_capacity, self.forward_capacity);
        navigator.set_confirm_save(self.confirm_save);
        navigator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stacks_unbounded_by_default() {
        let config = Config::default();
        let nav = config.build_navigator();
        assert_eq!(nav.backward().capacity(), None);
        assert_eq!(nav.forward_stack().capacity(), None);
    }

    #[test]
    fn test_capacities_reach_navigator() {
        let config = Config {
            backward_capacity: Some(5),
            forward_capacity: Some(2),
            ..Default::default()
        };
        let nav = config.build_navigator();
        assert_eq!(nav.backward().capacity(), Some(5));
        assert_eq!(nav.forward_stack().capacity(), Some(2));
    }
}
