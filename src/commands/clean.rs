//! Reset persisted state

use anyhow::Result;

use crate::Folio;

/// Log out and reseed the default posts
pub fn run(folio: &Folio) -> Result<()> {
    folio.session().logout();

    let mut store = folio.content();
    store.reset();
    super::ensure_persisted(&store, "reseed the posts")?;
    match &folio.storage_dir {
        Some(dir) => tracing::info!("Reset content in {:?}", dir),
        None => tracing::info!("Reset content"),
    }

    Ok(())
}
