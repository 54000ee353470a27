//! Create a new post

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{Category, MarkdownRenderer, PostFields};
use crate::helpers::strip_html;
use crate::Folio;

/// Where the post body comes from
#[derive(Debug, Clone)]
pub enum ContentSource {
    /// Inline HTML
    Inline(String),
    /// A file; `.md` / `.markdown` files are rendered, anything else is taken as HTML
    File(PathBuf),
}

/// Post body and excerpt resolved from a content source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContent {
    pub content: String,
    /// Excerpt taken from text before `<!-- more -->`, if any
    pub excerpt: Option<String>,
}

/// Read and render a content source
pub fn resolve_content(source: &ContentSource) -> Result<ResolvedContent> {
    match source {
        ContentSource::Inline(html) => Ok(ResolvedContent {
            content: html.clone(),
            excerpt: None,
        }),
        ContentSource::File(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read content file {:?}", path))?;
            if is_markdown_file(path) {
                render_markdown(&raw)
            } else {
                Ok(ResolvedContent {
                    content: raw,
                    excerpt: None,
                })
            }
        }
    }
}

fn render_markdown(raw: &str) -> Result<ResolvedContent> {
    let renderer = MarkdownRenderer::new();
    let (excerpt_md, full_md) = MarkdownRenderer::split_excerpt(raw);

    let content = renderer.render(&full_md);
    let excerpt = match excerpt_md {
        Some(md) => {
            let text = strip_html(&renderer.render(&md));
            Some(text.split_whitespace().collect::<Vec<_>>().join(" "))
        }
        None => None,
    };

    Ok(ResolvedContent { content, excerpt })
}

fn is_markdown_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("md") | Some("markdown")
    )
}

/// Create a post as the logged-in admin
pub fn create_post(
    folio: &Folio,
    title: &str,
    category: &str,
    excerpt: Option<&str>,
    source: &ContentSource,
    image_url: &str,
) -> Result<()> {
    let session = folio.session();
    let user = super::require_admin(&session)?;

    let category: Category = category.parse()?;
    let resolved = resolve_content(source)?;
    let excerpt = excerpt
        .map(str::to_string)
        .or(resolved.excerpt)
        .context("An excerpt is required (pass --excerpt or use <!-- more --> in the content)")?;

    let fields = PostFields::new(title, category, excerpt, resolved.content, image_url);
    let mut store = folio.content();
    let post = store.create(fields, Some(user.username.as_str()));
    super::ensure_persisted(&store, "create the post")?;

    println!("Created: {} [{}]", post.title, post.id);
    Ok(())
}
