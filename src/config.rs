use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_BASE_URL: &str = "CFXSCAN_BASE_URL";
pub const ENV_API_KEY: &str = "CFXSCAN_API_KEY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Page size for transaction and transfer listings
    #[serde(default = "default_limit")]
    pub default_limit: u64,
}

fn default_base_url() -> String {
    "https://evmapi.confluxscan.org".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_limit() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            default_limit: default_limit(),
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("cfxscan-cli");

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        Ok(config_dir.join("config.json"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("invalid config at {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let mut config: Config = serde_json::from_str(content)?;
        if config.timeout_secs == 0 {
            config.timeout_secs = default_timeout_secs();
        }
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Applies `CFXSCAN_BASE_URL` / `CFXSCAN_API_KEY` from the process env.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            let key = key.trim().to_string();
            self.api_key = if key.is_empty() { None } else { Some(key) };
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_env_values_do_not_clobber_base_url() {
        let mut config = Config::default();
        config.apply_env_from(|key| match key {
            ENV_BASE_URL => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.base_url, default_base_url());
    }

    #[test]
    fn zero_timeout_is_replaced() {
        let config = Config::from_json(r#"{"timeout_secs": 0}"#).unwrap();
        assert_eq!(config.timeout_secs, 15);
    }
}
