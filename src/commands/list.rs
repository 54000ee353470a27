//! List and show blog content

use anyhow::Result;
use std::fmt::Write;

use crate::content::{ContentStore, PostFilter};
use crate::helpers::{strip_html, Helpers};
use crate::Folio;

/// Excerpt width in listings
const EXCERPT_WIDTH: usize = 72;

/// List posts matching `filter`
pub fn run(folio: &Folio, filter: &PostFilter) -> Result<()> {
    let mut store = folio.content();
    print!("{}", render_listing(&mut store, &folio.helpers(), filter));
    Ok(())
}

/// Show one post in full
pub fn show(folio: &Folio, id: &str) -> Result<()> {
    let mut store = folio.content();
    let helpers = folio.helpers();

    let Some(post) = store.find_by_id(id) else {
        println!("Article not found: {}", id);
        println!("The article you're looking for doesn't exist or has been removed.");
        return Ok(());
    };

    println!("{}", post.title);
    println!(
        "{} | {} | {} | {}",
        post.category,
        helpers.date(&post.date),
        post.author,
        helpers.read_time(post)
    );
    println!("{}", post.image_url);
    println!();
    println!("{}", post.excerpt);
    println!();
    for paragraph in strip_html(&post.content)
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
    {
        println!("{}", paragraph);
    }
    Ok(())
}

/// Print post counts per category
pub fn categories(folio: &Folio) -> Result<()> {
    let mut store = folio.content();
    let counts = store.category_counts();
    println!("Categories ({}):", counts.len());
    for (category, count) in counts {
        println!("  {} [{}] ({})", category, category.slug(), count);
    }
    Ok(())
}

/// Render the listing text for `filter`
pub fn render_listing(store: &mut ContentStore, helpers: &Helpers, filter: &PostFilter) -> String {
    let mut out = String::new();

    if let Some(post) = store.featured(filter) {
        let _ = writeln!(out, "Featured: {} [{}]", post.title, post.id);
        let _ = writeln!(out, "  {}", helpers.excerpt(post, EXCERPT_WIDTH));
        let _ = writeln!(out);
    }

    let posts = store.filter_by(filter);
    if posts.is_empty() {
        let _ = writeln!(out, "No articles found matching your search criteria.");
        return out;
    }

    let _ = writeln!(out, "Posts ({}):", posts.len());
    for post in posts {
        let _ = writeln!(
            out,
            "  {} - {} [{}] {} ({})",
            helpers.date(&post.date),
            post.title,
            post.id,
            post.category,
            helpers.read_time(post)
        );
    }
    out
}
