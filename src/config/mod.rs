pub mod loader;

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

use crate::theme::Theme;

// Global configuration instance with thread-safe access
pub static CONFIG: once_cell::sync::Lazy<Arc<RwLock<Config>>> =
    once_cell::sync::Lazy::new(|| Arc::new(RwLock::new(Config::default())));

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    /// Draw the faint grid lines behind empty cells.
    pub show_grid: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            show_grid: true,
        }
    }
}

/// Snapshot of the current global configuration.
#[must_use]
pub fn current() -> Config {
    CONFIG.read().unwrap().clone()
}

/// Replaces the global configuration.
pub fn replace(config: Config) {
    *CONFIG.write().unwrap() = config;
}
