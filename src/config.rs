use crate::fetch::DEFAULT_USER_AGENT;
use crate::scrapers::{Site, SiteRules};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Runtime settings, usually read from a TOML file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Search result URLs polled every cycle
    pub urls: Vec<String>,
    pub poll_interval_secs: u64,
    /// URLs fetched at once
    pub concurrency: usize,
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Replaces the built-in site rules when non-empty
    pub sites: Vec<SiteRules>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            poll_interval_secs: 60,
            concurrency: 1,
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            sites: Vec::new(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configured site rules, or the built-in ones
    pub fn site_rules(&self) -> Vec<SiteRules> {
        if self.sites.is_empty() {
            Site::ALL.iter().map(|site| site.rules()).collect()
        } else {
            self.sites.clone()
        }
    }
}
