//! Initialize a new Folio site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }

    let config_content = r#"# Folio Configuration

# Site
title: Folio
description: AI, Body Language, and Design & Development
language: en

# Writing
author: Admin
words_per_minute: 200
date_format: MMMM D, YYYY

# Storage
storage_dir: .folio

# Session
login_delay_ms: 1000
"#;

    fs::write(&config_path, config_content)?;
    tracing::info!("Created {:?}", config_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        let config = SiteConfig::load(dir.path().join("_config.yml")).unwrap();
        assert_eq!(config.title, "Folio");
        assert_eq!(config.login_delay_ms, 1000);
        assert!(config.extra.is_empty());

        assert!(init_site(dir.path()).is_err());
    }
}
