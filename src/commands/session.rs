//! Login, logout and whoami

use anyhow::Result;

use crate::Folio;

/// Log in with the given credentials
pub async fn login(folio: &Folio, username: &str, password: &str) -> Result<()> {
    let mut session = folio.session();
    if !session.login(username, password).await {
        anyhow::bail!("Login failed");
    }
    Ok(())
}

/// Log out; succeeds when nobody is logged in
pub fn logout(folio: &Folio) -> Result<()> {
    folio.session().logout();
    Ok(())
}

/// Print the current identity
pub fn whoami(folio: &Folio) -> Result<()> {
    match folio.session().current() {
        Some(user) => println!(
            "{} (id {}{})",
            user.username,
            user.id,
            if user.is_admin { ", admin" } else { "" }
        ),
        None => println!("Not logged in"),
    }
    Ok(())
}
