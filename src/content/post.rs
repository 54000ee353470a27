//! Post and category models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Blog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "Body Language")]
    BodyLanguage,
    #[serde(rename = "Dev/Design")]
    DevDesign,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 3] = [Category::Ai, Category::BodyLanguage, Category::DevDesign];

    /// Display label, also the persisted form
    pub fn label(&self) -> &'static str {
        match self {
            Category::Ai => "AI",
            Category::BodyLanguage => "Body Language",
            Category::DevDesign => "Dev/Design",
        }
    }

    /// URL-friendly name ("ai", "body-language", "dev-design")
    pub fn slug(&self) -> String {
        slug::slugify(self.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Accepts the label or the slug, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle) || c.slug() == needle.to_lowercase())
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// Category half of a listing filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether `category` passes the filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique, immutable identifier
    pub id: String,

    /// Post title
    pub title: String,

    /// Post category
    pub category: Category,

    /// Short summary shown in listings
    pub excerpt: String,

    /// Full content (HTML)
    pub content: String,

    /// Publication date
    pub date: NaiveDate,

    /// Author name
    pub author: String,

    /// Cover image URL
    pub image_url: String,

    /// Stored reading time; estimated from the content when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
}

impl Post {
    /// The mutable fields of this post
    pub fn fields(&self) -> PostFields {
        PostFields {
            title: self.title.clone(),
            category: self.category,
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Editable fields of a post, as submitted through the admin surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub category: Category,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
}

impl PostFields {
    pub fn new(
        title: impl Into<String>,
        category: Category,
        excerpt: impl Into<String>,
        content: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category,
            excerpt: excerpt.into(),
            content: content.into(),
            image_url: image_url.into(),
        }
    }

    /// Build a full post record around these fields
    pub fn into_post(self, id: String, date: NaiveDate, author: String) -> Post {
        Post {
            id,
            title: self.title,
            category: self.category,
            excerpt: self.excerpt,
            content: self.content,
            date,
            author,
            image_url: self.image_url,
            read_time: None,
        }
    }

    /// Overwrite every mutable field of `post`; id, date and author stay
    pub fn apply_to(self, post: &mut Post) {
        post.title = self.title;
        post.category = self.category;
        post.excerpt = self.excerpt;
        post.content = self.content;
        post.image_url = self.image_url;
        // A stored estimate no longer describes the new content
        post.read_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("AI".parse::<Category>().unwrap(), Category::Ai);
        assert_eq!("ai".parse::<Category>().unwrap(), Category::Ai);
        assert_eq!(
            "body language".parse::<Category>().unwrap(),
            Category::BodyLanguage
        );
        assert_eq!(
            "dev-design".parse::<Category>().unwrap(),
            Category::DevDesign
        );
        assert!("cooking".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_slug() {
        assert_eq!(Category::Ai.slug(), "ai");
        assert_eq!(Category::BodyLanguage.slug(), "body-language");
        assert_eq!(Category::DevDesign.slug(), "dev-design");
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "AI".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Ai)
        );
        assert!(CategoryFilter::All.matches(Category::DevDesign));
        assert!(!CategoryFilter::Only(Category::Ai).matches(Category::DevDesign));
    }

    #[test]
    fn test_post_json_shape() {
        let post = PostFields::new("Title", Category::DevDesign, "Ex", "<p>Body</p>", "https://x/y.jpg")
            .into_post(
                "1700000000000".to_string(),
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                "admin".to_string(),
            );
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["category"], "Dev/Design");
        assert_eq!(json["date"], "2024-01-02");
        assert_eq!(json["imageUrl"], "https://x/y.jpg");
        assert!(json.get("readTime").is_none());

        let back: Post = serde_json::from_value(json).unwrap();
        assert_eq!(back, post);
    }

    #[test]
    fn test_unknown_category_rejected_on_parse() {
        let json = r#"{"id":"x","title":"t","category":"Cooking","excerpt":"","content":"",
            "date":"2023-01-01","author":"a","imageUrl":""}"#;
        assert!(serde_json::from_str::<Post>(json).is_err());
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut post = PostFields::new("Old", Category::Ai, "e", "c", "i").into_post(
            "keep".to_string(),
            NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
            "Jane Smith".to_string(),
        );
        post.read_time = Some("5 min read".to_string());

        PostFields::new("New", Category::BodyLanguage, "e2", "c2", "i2").apply_to(&mut post);
        assert_eq!(post.id, "keep");
        assert_eq!(post.author, "Jane Smith");
        assert_eq!(post.title, "New");
        assert_eq!(post.category, Category::BodyLanguage);
        assert!(post.read_time.is_none());
    }
}
