// src/config/settings.rs
use std::path::PathBuf;
use std::time::Duration;
use anyhow::{Result, Context};
use serde::{Serialize, Deserialize};

const ENV_PREFIX: &str = "CYBERGUARD";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub analysis_latency_ms: u64,
    pub notification_secs: u64,
    pub log_level: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            analysis_latency_ms: 2000,
            notification_secs: 4,
            log_level: "info".to_string(),
            window_width: 1024.0,
            window_height: 768.0,
        }
    }
}

impl Settings {
    /// Defaults, then `settings.toml` under the user config dir if present,
    /// then `CYBERGUARD_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path())
    }

    pub fn load_from(path: Option<PathBuf>) -> Result<Self> {
        Self::load_layered(path, ENV_PREFIX)
    }

    fn load_layered(path: Option<PathBuf>, env_prefix: &str) -> Result<Self> {
        let defaults = Settings::default();
        let mut builder = config::Config::builder()
            .set_default("analysis_latency_ms", defaults.analysis_latency_ms as i64)?
            .set_default("notification_secs", defaults.notification_secs as i64)?
            .set_default("log_level", defaults.log_level.clone())?
            .set_default("window_width", defaults.window_width as f64)?
            .set_default("window_height", defaults.window_height as f64)?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        builder
            .add_source(config::Environment::with_prefix(env_prefix).try_parsing(true))
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cyberguard").join("settings.toml"))
    }

    pub fn analysis_latency(&self) -> Duration {
        Duration::from_millis(self.analysis_latency_ms)
    }

    pub fn notification_lifetime(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }

    pub fn log_level_filter(&self) -> Result<log::LevelFilter> {
        self.log_level.parse()
            .with_context(|| format!("Unknown log level: {}", self.log_level))
    }
}
