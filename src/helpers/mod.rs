//! Helper functions for presenting content
//!
//! These cover the small formatting jobs the listing surfaces need: dates,
//! reading time, and plain-text excerpts.

mod date;
mod html;

pub use date::*;
pub use html::*;

use chrono::NaiveDate;

use crate::config::SiteConfig;
use crate::content::Post;

/// Helpers bound to a site configuration
pub struct Helpers {
    config: SiteConfig,
}

impl Helpers {
    /// Create a new helpers instance
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Format a date with the configured format
    pub fn date(&self, date: &NaiveDate) -> String {
        format_date(date, &self.config.date_format)
    }

    /// Reading time of a post, preferring the one stored on the record
    pub fn read_time(&self, post: &Post) -> String {
        match &post.read_time {
            Some(read_time) => read_time.clone(),
            None => read_time(&post.content, self.config.words_per_minute),
        }
    }

    /// One-line excerpt for listings
    pub fn excerpt(&self, post: &Post, length: usize) -> String {
        truncate(post.excerpt.trim(), length, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Category, PostFields};

    #[test]
    fn test_read_time_prefers_stored_value() {
        let helpers = Helpers::new(SiteConfig::default());
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let mut post = PostFields::new("T", Category::Ai, "E", "<p>short</p>", "")
            .into_post("1".to_string(), date, "Admin".to_string());

        assert_eq!(helpers.read_time(&post), "1 min read");
        post.read_time = Some("12 min read".to_string());
        assert_eq!(helpers.read_time(&post), "12 min read");
        assert_eq!(helpers.date(&date), "February 1, 2024");
    }
}
