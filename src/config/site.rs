//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub language: String,

    // Writing
    /// Author recorded on posts created without a logged-in username
    pub author: String,
    pub words_per_minute: usize,
    /// Moment.js-style format used when printing post dates
    pub date_format: String,

    // Storage
    /// Directory (relative to the site root) holding storage.json
    pub storage_dir: String,

    // Session
    /// Artificial latency applied to every login attempt
    pub login_delay_ms: u64,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            description: "AI, Body Language, and Design & Development".to_string(),
            language: "en".to_string(),

            author: "Admin".to_string(),
            words_per_minute: 200,
            date_format: "MMMM D, YYYY".to_string(),

            storage_dir: ".folio".to_string(),

            login_delay_ms: 1000,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Login delay as a duration
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}
