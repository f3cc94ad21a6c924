//! Configuration types.

use std::path::PathBuf;

/// Shell configuration.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Application name used in logs and the demo banner.
    pub app_name: String,
    /// Where the preference blob lives on disk.
    pub prefs_path: PathBuf,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_name: "wallflow".to_string(),
            prefs_path: PathBuf::from("./data/wallflow.json"),
        }
    }
}

impl ShellConfig {
    /// Build a config from environment variables, falling back to defaults.
    ///
    /// `WALLFLOW_PREFS_PATH` overrides the preference file location.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let prefs_path = std::env::var("WALLFLOW_PREFS_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.prefs_path);

        let app_name = std::env::var("WALLFLOW_APP_NAME").unwrap_or(defaults.app_name);

        Self {
            app_name,
            prefs_path,
        }
    }
}
