//! Search and category filtering over a post snapshot

use super::{CategoryFilter, Post};

/// Listing filter: free-text query plus category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    /// Matched case-insensitively against title and excerpt
    pub query: String,
    pub category: CategoryFilter,
}

impl PostFilter {
    pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// A filter that lets every post through
    pub fn all() -> Self {
        Self::default()
    }

    /// No query and no category restriction
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.category == CategoryFilter::All
    }

    /// Whether `post` passes both halves of the filter
    pub fn matches(&self, post: &Post) -> bool {
        self.category.matches(post.category) && self.matches_query(post)
    }

    fn matches_query(&self, post: &Post) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        post.title.to_lowercase().contains(&needle) || post.excerpt.to_lowercase().contains(&needle)
    }
}

/// Posts passing `filter`, in their original order
pub fn filter_posts<'a>(posts: &'a [Post], filter: &PostFilter) -> Vec<&'a Post> {
    posts.iter().filter(|p| filter.matches(p)).collect()
}

/// The featured post: the first one, shown only on an unfiltered listing
pub fn featured<'a>(posts: &'a [Post], filter: &PostFilter) -> Option<&'a Post> {
    if filter.is_unfiltered() {
        posts.first()
    } else {
        None
    }
}
