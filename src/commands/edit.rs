//! Edit an existing post

use anyhow::Result;

use super::new::{resolve_content, ContentSource};
use crate::content::PostFields;
use crate::{Error, Folio};

/// Field changes requested on the command line; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct PostEdit {
    pub title: Option<String>,
    pub category: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<ContentSource>,
    pub image_url: Option<String>,
}

impl PostEdit {
    /// Merge the requested changes over `current`
    pub fn apply(self, mut current: PostFields) -> Result<PostFields> {
        if let Some(title) = self.title {
            current.title = title;
        }
        if let Some(category) = self.category {
            current.category = category.parse()?;
        }
        if let Some(source) = self.content {
            let resolved = resolve_content(&source)?;
            current.content = resolved.content;
            if let Some(excerpt) = resolved.excerpt {
                current.excerpt = excerpt;
            }
        }
        if let Some(excerpt) = self.excerpt {
            current.excerpt = excerpt;
        }
        if let Some(image_url) = self.image_url {
            current.image_url = image_url;
        }
        Ok(current)
    }
}

/// Update post `id` as the logged-in admin
pub fn run(folio: &Folio, id: &str, edit: PostEdit) -> Result<()> {
    let session = folio.session();
    super::require_admin(&session)?;

    let mut store = folio.content();
    let Some(current) = store.find_by_id(id).map(|p| p.fields()) else {
        return Err(Error::PostNotFound(id.to_string()).into());
    };

    let fields = edit.apply(current)?;
    let updated = store.update(id, fields);
    super::ensure_persisted(&store, "update the post")?;
    if let Some(post) = updated {
        println!("Updated: {} [{}]", post.title, post.id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;

    fn current() -> PostFields {
        PostFields::new("Old", Category::Ai, "old excerpt", "<p>old</p>", "old.jpg")
    }

    #[test]
    fn test_empty_edit_keeps_fields() {
        let merged = PostEdit::default().apply(current()).unwrap();
        assert_eq!(merged, current());
    }

    #[test]
    fn test_partial_edit() {
        let edit = PostEdit {
            title: Some("New".to_string()),
            category: Some("body-language".to_string()),
            ..Default::default()
        };
        let merged = edit.apply(current()).unwrap();
        assert_eq!(merged.title, "New");
        assert_eq!(merged.category, Category::BodyLanguage);
        assert_eq!(merged.excerpt, "old excerpt");
    }

    #[test]
    fn test_bad_category_rejected() {
        let edit = PostEdit {
            category: Some("Gardening".to_string()),
            ..Default::default()
        };
        assert!(edit.apply(current()).is_err());
    }
}
