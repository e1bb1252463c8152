use crate::Result;
use anyhow::anyhow;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

// TOML configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_base_url")]
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_chart_width")]
    pub width: u32,
    #[serde(default = "default_chart_height")]
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values
fn default_server_base_url() -> String {
    "http://localhost:5000".to_string()
}
fn default_chart_width() -> u32 {
    600
}
fn default_chart_height() -> u32 {
    300
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_server_base_url(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

static CONFIG: Lazy<Config> = Lazy::new(|| {
    load_config().unwrap_or_else(|e| {
        eprintln!(
            "Warning: Failed to load config files: {}. Using defaults.",
            e
        );
        Config::default()
    })
});

static CONFIG_STORE: Lazy<Arc<Mutex<HashMap<String, String>>>> =
    Lazy::new(|| Arc::new(Mutex::new(HashMap::new())));

pub fn get(name: &str) -> Result<String> {
    // Priority 1: CONFIG_STORE (runtime overrides)
    if let Some(value) = get_from_store(name) {
        if value.is_empty() {
            return Err(anyhow!("{} is empty", name));
        }
        return Ok(value);
    }

    // Priority 2: Environment variables
    if let Ok(val) = std::env::var(name)
        && !val.is_empty()
    {
        return Ok(val);
    }

    // Priority 3: TOML config
    let toml_value = match name {
        "SERVER_BASE_URL" => Some(CONFIG.server.base_url.clone()),
        "CHART_WIDTH" => Some(CONFIG.chart.width.to_string()),
        "CHART_HEIGHT" => Some(CONFIG.chart.height.to_string()),
        "LOG_LEVEL" => Some(CONFIG.logging.level.clone()),
        _ => None,
    };

    if let Some(value) = toml_value
        && !value.is_empty()
    {
        return Ok(value);
    }

    Err(anyhow!("Configuration key not found: {}", name))
}

pub fn set(name: &str, value: &str) {
    if let Ok(mut store) = CONFIG_STORE.lock() {
        store.insert(name.to_string(), value.to_string());
    }
}

fn get_from_store(name: &str) -> Option<String> {
    if let Ok(store) = CONFIG_STORE.lock() {
        store.get(name).cloned()
    } else {
        None
    }
}

/// Load configuration from TOML files with priority:
/// 1. config/config.local.toml (git-ignored, for local overrides)
/// 2. config/config.toml (git-managed template)
/// 3. Default values
fn load_config() -> Result<Config> {
    let mut config = Config::default();

    let base_path = "config/config.toml";
    if Path::new(base_path).exists() {
        let content = fs::read_to_string(base_path)?;
        config = toml::from_str(&content)?;
    }

    let local_path = "config/config.local.toml";
    if Path::new(local_path).exists() {
        let content = fs::read_to_string(local_path)?;
        let local_config: Config = toml::from_str(&content)?;
        merge_config(&mut config, local_config);
    }

    Ok(config)
}

/// Merge local config into base config (local values override base values)
fn merge_config(base: &mut Config, local: Config) {
    // Server
    if local.server.base_url != default_server_base_url() {
        base.server.base_url = local.server.base_url;
    }

    // Chart
    if local.chart.width != default_chart_width() {
        base.chart.width = local.chart.width;
    }
    if local.chart.height != default_chart_height() {
        base.chart.height = local.chart.height;
    }

    // Logging
    if local.logging.level != default_log_level() {
        base.logging.level = local.logging.level;
    }
}

/// Get TOML-based configuration
pub fn config() -> &'static Config {
    &CONFIG
}
