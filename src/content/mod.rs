//! Content module - posts, the content store, and filtering

pub mod defaults;
mod filter;
mod markdown;
mod post;
pub mod store;

pub use filter::{featured, filter_posts, PostFilter};
pub use markdown::MarkdownRenderer;
pub use post::{Category, CategoryFilter, Post, PostFields};
pub use store::{ContentStore, POSTS_KEY};
