//! Delete a post

use anyhow::Result;

use crate::Folio;

/// Delete post `id` as the logged-in admin, asking first unless `yes`
pub fn run(folio: &Folio, id: &str, yes: bool) -> Result<()> {
    let session = folio.session();
    super::require_admin(&session)?;

    let mut store = folio.content();
    let Some(title) = store.find_by_id(id).map(|p| p.title.clone()) else {
        println!("No post with id {}", id);
        return Ok(());
    };

    if !yes && !super::confirm(&format!("Are you sure you want to delete \"{}\"?", title))? {
        println!("Cancelled");
        return Ok(());
    }

    let removed = store.delete(id);
    super::ensure_persisted(&store, "delete the post")?;
    if removed {
        println!("Deleted: {} [{}]", title, id);
    }
    Ok(())
}
