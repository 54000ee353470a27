//! folio-rs: content and session engine for a portfolio site
//!
//! The crate models a portfolio site's client-side state: a blog whose posts
//! are seeded from defaults and persisted in key-value storage, a fixed project
//! gallery, and a minimal admin session gated by a fixed credential check.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod notify;
pub mod projects;
pub mod session;
pub mod storage;

pub use error::{Error, Result};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use content::ContentStore;
use notify::Notifier;
use session::SessionStore;
use storage::{FileStorage, Storage};

/// The main Folio application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding persisted state, when backed by files
    pub storage_dir: Option<PathBuf>,
    storage: Arc<dyn Storage>,
    notifier: Notifier,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> anyhow::Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let storage_dir = base_dir.join(&config.storage_dir);
        let storage = Arc::new(FileStorage::open(&storage_dir)?);

        Ok(Self {
            config,
            base_dir,
            storage_dir: Some(storage_dir),
            storage,
            notifier: Notifier::new(),
        })
    }

    /// Create an instance over an existing storage backend
    pub fn with_storage<P: AsRef<Path>>(
        config: config::SiteConfig,
        base_dir: P,
        storage: Arc<dyn Storage>,
    ) -> Self {
        Self {
            config,
            base_dir: base_dir.as_ref().to_path_buf(),
            storage_dir: None,
            storage,
            notifier: Notifier::new(),
        }
    }

    /// Notice channel shared by every store built from this instance
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Session store with any persisted session restored
    pub fn session(&self) -> SessionStore {
        let mut session = SessionStore::new(
            self.storage.clone(),
            self.notifier.clone(),
            self.config.login_delay(),
        );
        session.restore();
        session
    }

    /// Content store over this instance's storage
    pub fn content(&self) -> ContentStore {
        ContentStore::new(
            self.storage.clone(),
            self.notifier.clone(),
            &self.config.author,
        )
    }

    /// Presentation helpers for this site
    pub fn helpers(&self) -> helpers::Helpers {
        helpers::Helpers::new(self.config.clone())
    }
}
