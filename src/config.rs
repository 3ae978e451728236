use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, warn};

use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::router::DEFAULT_FUZZY_LIMIT;

pub const ENV_HISTORY: &str = "EMOTION_ROUTER_HISTORY";
pub const ENV_HISTORY_CAPACITY: &str = "EMOTION_ROUTER_HISTORY_CAPACITY";
pub const ENV_FUZZY_LIMIT: &str = "EMOTION_ROUTER_FUZZY_LIMIT";
pub const ENV_LOG: &str = "EMOTION_ROUTER_LOG";

/// Runtime settings for the router binary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RouterConfig {
    /// Path to the "recently felt" history file
    pub history_file: String,
    pub history_capacity: usize,
    pub fuzzy_limit: usize,
    /// Used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            history_file: "emotion_history.json".to_string(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            fuzzy_limit: DEFAULT_FUZZY_LIMIT,
            log_filter: "emotion_router=info".to_string(),
        }
    }
}

impl RouterConfig {
    /// Apply `EMOTION_ROUTER_*` variables from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(ENV_HISTORY).filter(|v| !v.trim().is_empty()) {
            self.history_file = path;
        }
        if let Some(value) = lookup(ENV_HISTORY_CAPACITY) {
            match value.trim().parse() {
                Ok(capacity) => self.history_capacity = capacity,
                Err(_) => warn!("Ignoring {}='{}': not a number", ENV_HISTORY_CAPACITY, value),
            }
        }
        if let Some(value) = lookup(ENV_FUZZY_LIMIT) {
            match value.trim().parse() {
                Ok(limit) => self.fuzzy_limit = limit,
                Err(_) => warn!("Ignoring {}='{}': not a number", ENV_FUZZY_LIMIT, value),
            }
        }
        if let Some(filter) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            self.log_filter = filter;
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the config, writing the defaults first if the file does not exist.
    pub async fn load(&self) -> Result<RouterConfig> {
        if !self.path.exists() {
            let default = RouterConfig::default();
            self.save(&default).await?;
            info!("Created default config at {}", self.path.display());
            return Ok(default);
        }
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read config {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", self.path.display()))?;
        Ok(config)
    }

    pub async fn save(&self, config: &RouterConfig) -> Result<()> {
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .await
            .with_context(|| format!("Failed to write config {}", self.path.display()))?;
        Ok(())
    }
}
