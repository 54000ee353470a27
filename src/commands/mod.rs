//! CLI commands

pub mod clean;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod new;
pub mod projects;
pub mod session;

use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::content::ContentStore;
use crate::session::{SessionStore, User};

/// Require an admin session before touching content
pub fn require_admin(session: &SessionStore) -> Result<&User> {
    session
        .require_admin()
        .map_err(|e| anyhow::anyhow!("{} (run `folio login` first)", e))
}

/// Fail the command when the last write of `store` did not reach storage
pub fn ensure_persisted(store: &ContentStore, action: &str) -> Result<()> {
    match store.last_persist_error() {
        Some(e) => anyhow::bail!("Failed to {}, the change was not saved: {}", action, e),
        None => Ok(()),
    }
}

/// Ask a yes/no question on stdin; anything but "y"/"yes" is a no
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
