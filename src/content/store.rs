//! Content store - owns the canonical post collection and its persistence
//!
//! The collection is read lazily on first access. Absent, corrupt, or
//! schema-mismatched storage falls back to the default posts, which are written
//! straight back so later reads are stable. Every write persists the whole
//! collection.
//!
//! Persistence failures never reach the caller: the in-memory collection
//! stays authoritative, the failure is logged, published as a notice, and kept
//! in [`ContentStore::last_persist_error`] until the next successful write.

use chrono::{Local, Utc};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::sync::Arc;

use super::filter::{self, PostFilter};
use super::{defaults, Category, Post, PostFields};
use crate::notify::{Notice, Notifier};
use crate::storage::{self, Storage, StorageError};

/// Storage key of the post collection
pub const POSTS_KEY: &str = "blogPosts";

/// The post collection and its write path
pub struct ContentStore {
    storage: Arc<dyn Storage>,
    notifier: Notifier,
    default_author: String,
    posts: Option<Vec<Post>>,
    last_id: i64,
    last_persist_error: Option<StorageError>,
}

impl ContentStore {
    /// Create a store over `storage`; nothing is read until first access
    pub fn new(storage: Arc<dyn Storage>, notifier: Notifier, default_author: &str) -> Self {
        Self {
            storage,
            notifier,
            default_author: default_author.to_string(),
            posts: None,
            last_id: 0,
            last_persist_error: None,
        }
    }

    /// All posts in collection order
    pub fn load_all(&mut self) -> &[Post] {
        self.ensure_loaded();
        self.posts.as_deref().unwrap_or(&[])
    }

    /// Look up a post; a miss is `None`, never an error
    pub fn find_by_id(&mut self, id: &str) -> Option<&Post> {
        self.load_all().iter().find(|p| p.id == id)
    }

    /// Posts passing `filter`, in collection order
    pub fn filter_by(&mut self, filter: &PostFilter) -> Vec<&Post> {
        filter::filter_posts(self.load_all(), filter)
    }

    /// The featured post for a listing with `filter`
    pub fn featured(&mut self, filter: &PostFilter) -> Option<&Post> {
        filter::featured(self.load_all(), filter)
    }

    /// Post count per category, in category order
    pub fn category_counts(&mut self) -> IndexMap<Category, usize> {
        let mut counts: IndexMap<Category, usize> =
            Category::ALL.into_iter().map(|c| (c, 0)).collect();
        for post in self.load_all() {
            *counts.entry(post.category).or_insert(0) += 1;
        }
        counts
    }

    /// Create a post with a fresh id and today's date, then persist
    ///
    /// `author` falls back to the configured default author.
    pub fn create(&mut self, fields: PostFields, author: Option<&str>) -> Post {
        self.ensure_loaded();

        let id = self.next_id();
        let author = author
            .filter(|a| !a.is_empty())
            .unwrap_or(self.default_author.as_str())
            .to_string();
        let post = fields.into_post(id, Local::now().date_naive(), author);

        self.posts_mut().push(post.clone());
        tracing::info!("Created post {} ({})", post.id, post.title);
        self.persist();
        self.notifier.publish(Notice::PostCreated {
            id: post.id.clone(),
        });
        post
    }

    /// Replace the mutable fields of post `id`, then persist
    ///
    /// An unknown id leaves the collection untouched and returns `None`.
    pub fn update(&mut self, id: &str, fields: PostFields) -> Option<Post> {
        self.ensure_loaded();

        let updated = self
            .posts_mut()
            .iter_mut()
            .find(|p| p.id == id)
            .map(|post| {
                fields.apply_to(post);
                post.clone()
            });

        match &updated {
            Some(post) => tracing::info!("Updated post {} ({})", post.id, post.title),
            None => tracing::debug!("Update of unknown post {} ignored", id),
        }
        self.persist();
        if updated.is_some() {
            self.notifier.publish(Notice::PostUpdated { id: id.to_string() });
        }
        updated
    }

    /// Remove post `id`, then persist; returns whether a post was removed
    pub fn delete(&mut self, id: &str) -> bool {
        self.ensure_loaded();

        let posts = self.posts_mut();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        let removed = posts.len() != before;

        if removed {
            tracing::info!("Deleted post {}", id);
        } else {
            tracing::debug!("Delete of unknown post {} ignored", id);
        }
        self.persist();
        if removed {
            self.notifier.publish(Notice::PostDeleted { id: id.to_string() });
        }
        removed
    }

    /// Drop the persisted collection and reseed the defaults
    pub fn reset(&mut self) {
        if let Err(e) = self.storage.remove(POSTS_KEY) {
            tracing::warn!("Failed to remove stored posts: {}", e);
        }
        self.posts = None;
        self.ensure_loaded();
    }

    /// The most recent persistence failure, cleared by the next successful write
    pub fn last_persist_error(&self) -> Option<&StorageError> {
        self.last_persist_error.as_ref()
    }

    fn ensure_loaded(&mut self) {
        if self.posts.is_some() {
            return;
        }

        match storage::load_versioned::<Vec<Post>>(self.storage.as_ref(), POSTS_KEY) {
            Ok(Some(posts)) => {
                tracing::debug!("Loaded {} posts from storage", posts.len());
                self.posts = Some(dedup_ids(posts));
            }
            Ok(None) => {
                tracing::info!("No stored posts, seeding defaults");
                self.seed();
            }
            Err(e) => {
                tracing::warn!("Discarding stored posts: {}", e);
                self.seed();
            }
        }
    }

    fn seed(&mut self) {
        self.posts = Some(defaults::default_posts());
        self.persist();
    }

    fn posts_mut(&mut self) -> &mut Vec<Post> {
        self.posts.get_or_insert_with(Vec::new)
    }

    /// Timestamp-derived id, strictly increasing within this store and unused
    fn next_id(&mut self) -> String {
        let mut candidate = Utc::now().timestamp_millis().max(self.last_id + 1);
        let posts = self.posts.as_deref().unwrap_or(&[]);
        while posts.iter().any(|p| p.id == candidate.to_string()) {
            candidate += 1;
        }
        self.last_id = candidate;
        candidate.to_string()
    }

    fn persist(&mut self) {
        let posts = self.posts.as_deref().unwrap_or(&[]);
        let result = storage::save_versioned(self.storage.as_ref(), POSTS_KEY, &posts);

        match result {
            Ok(()) => {
                tracing::debug!("Persisted {} posts", posts.len());
                self.last_persist_error = None;
            }
            Err(e) => {
                tracing::warn!("Failed to persist posts, changes are in memory only: {}", e);
                self.notifier.publish(Notice::PersistFailed {
                    key: POSTS_KEY.to_string(),
                });
                self.last_persist_error = Some(e);
            }
        }
    }
}

/// Keep the first post for every id
fn dedup_ids(posts: Vec<Post>) -> Vec<Post> {
    let mut seen = HashSet::new();
    let before = posts.len();
    let posts: Vec<Post> = posts
        .into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect();
    if posts.len() != before {
        tracing::warn!("Dropped {} posts with duplicate ids", before - posts.len());
    }
    posts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CategoryFilter;
    use crate::notify;
    use crate::storage::MemoryStorage;

    fn store_with(storage: Arc<MemoryStorage>) -> ContentStore {
        ContentStore::new(storage, Notifier::new(), "Admin")
    }

    fn stored_posts(storage: &MemoryStorage) -> Vec<Post> {
        storage::load_versioned(storage, POSTS_KEY).unwrap().unwrap()
    }

    fn sample_fields() -> PostFields {
        PostFields::new(
            "Designing Calm Interfaces",
            Category::DevDesign,
            "Why quiet interfaces convert better.",
            "<p>Less is more.</p>",
            "https://images.example.com/calm.jpg",
        )
    }

    #[test]
    fn test_seeds_defaults_and_persists() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = store_with(storage.clone());

        let first: Vec<Post> = store.load_all().to_vec();
        assert_eq!(first, defaults::default_posts());
        assert_eq!(stored_posts(&storage), first);

        // A second store over the same storage reads the seeded collection
        let mut again = store_with(storage);
        assert_eq!(again.load_all(), first.as_slice());
    }

    #[test]
    fn test_corrupt_storage_falls_back() {
        let storage = Arc::new(MemoryStorage::new());
        storage.write(POSTS_KEY, "[{\"id\": broken").unwrap();

        let mut store = store_with(storage.clone());
        assert_eq!(store.load_all().len(), 6);
        assert_eq!(stored_posts(&storage).len(), 6);
    }

    #[test]
    fn test_schema_mismatch_falls_back() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .write(POSTS_KEY, r#"{"version":2,"data":[]}"#)
            .unwrap();

        let mut store = store_with(storage);
        assert_eq!(store.load_all().len(), 6);
    }

    #[test]
    fn test_legacy_array_is_read_and_upgraded() {
        let storage = Arc::new(MemoryStorage::new());
        let legacy = serde_json::to_string(&defaults::default_posts()[..2]).unwrap();
        storage.write(POSTS_KEY, &legacy).unwrap();

        let mut store = store_with(storage.clone());
        assert_eq!(store.load_all().len(), 2);

        store.delete("ai-trends-2023");
        let raw = storage.read(POSTS_KEY).unwrap().unwrap();
        assert!(raw.starts_with(r#"{"version":1"#));
        assert_eq!(stored_posts(&storage).len(), 1);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let storage = Arc::new(MemoryStorage::new());
        let mut posts = defaults::default_posts();
        let mut dup = posts[0].clone();
        dup.title = "Shadow".to_string();
        posts.push(dup);
        storage::save_versioned(storage.as_ref(), POSTS_KEY, &posts).unwrap();

        let mut store = store_with(storage);
        assert_eq!(store.load_all().len(), 6);
        assert_eq!(
            store.find_by_id("ai-trends-2023").unwrap().title,
            "Top AI Trends to Watch in 2023"
        );
    }

    #[test]
    fn test_create_then_find() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = store_with(storage);

        let fields = sample_fields();
        let created = store.create(fields.clone(), Some("admin"));
        assert!(!created.id.is_empty());
        assert!(created.id.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(created.date, Local::now().date_naive());
        assert_eq!(created.author, "admin");

        let found = store.find_by_id(&created.id).unwrap();
        assert_eq!(found.fields(), fields);
    }

    #[test]
    fn test_create_ids_are_fresh() {
        let mut store = store_with(Arc::new(MemoryStorage::new()));
        let a = store.create(sample_fields(), None);
        let b = store.create(sample_fields(), None);
        store.delete(&b.id);
        let c = store.create(sample_fields(), None);

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_eq!(a.author, "Admin");
    }

    #[test]
    fn test_update_replaces_mutable_fields() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = store_with(storage.clone());

        let updated = store
            .update("nonverbal-communication", sample_fields())
            .unwrap();
        assert_eq!(updated.id, "nonverbal-communication");
        assert_eq!(updated.author, "John Doe");
        assert_eq!(updated.title, "Designing Calm Interfaces");
        assert_eq!(updated.category, Category::DevDesign);

        let persisted = stored_posts(&storage);
        assert_eq!(persisted[1], updated);
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut store = store_with(Arc::new(MemoryStorage::new()));
        let before = store.load_all().to_vec();
        assert!(store.update("missing", sample_fields()).is_none());
        assert_eq!(store.load_all(), before.as_slice());
    }

    #[test]
    fn test_delete_twice() {
        let mut store = store_with(Arc::new(MemoryStorage::new()));
        assert!(store.delete("ux-design-principles"));
        assert!(store.find_by_id("ux-design-principles").is_none());
        assert!(!store.delete("ux-design-principles"));
        assert_eq!(store.load_all().len(), 5);
    }

    #[test]
    fn test_seed_create_delete_scenario() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = store_with(storage.clone());

        assert_eq!(store.filter_by(&PostFilter::all()).len(), 6);

        let created = store.create(sample_fields(), Some("admin"));
        assert_eq!(store.load_all().len(), 7);
        assert_eq!(stored_posts(&storage).len(), 7);
        assert_eq!(store.load_all().last().unwrap().id, created.id);

        assert!(store.delete(&created.id));
        assert_eq!(store.load_all().len(), 6);
        assert_eq!(stored_posts(&storage), defaults::default_posts());
    }

    #[test]
    fn test_filter_by_category_and_query() {
        let mut store = store_with(Arc::new(MemoryStorage::new()));

        let ai = store.filter_by(&PostFilter::new("", Category::Ai.into()));
        assert_eq!(ai.len(), 2);
        assert!(ai.iter().all(|p| p.category == Category::Ai));

        let trends = store.filter_by(&PostFilter::new("trends", CategoryFilter::All));
        assert_eq!(trends.len(), 1);
        assert_eq!(trends[0].id, "ai-trends-2023");
    }

    #[test]
    fn test_category_counts() {
        let mut store = store_with(Arc::new(MemoryStorage::new()));
        store.delete("machine-learning-basics");

        let counts = store.category_counts();
        let counts: Vec<_> = counts.into_iter().collect();
        assert_eq!(
            counts,
            vec![
                (Category::Ai, 1),
                (Category::BodyLanguage, 2),
                (Category::DevDesign, 2)
            ]
        );
    }

    #[test]
    fn test_quota_failure_is_flagged_not_raised() {
        let storage = Arc::new(MemoryStorage::with_quota(64));
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();
        let mut store = ContentStore::new(storage.clone(), notifier, "Admin");

        assert_eq!(store.load_all().len(), 6);
        assert!(matches!(
            store.last_persist_error(),
            Some(StorageError::QuotaExceeded { .. })
        ));
        assert!(storage.read(POSTS_KEY).unwrap().is_none());

        let notices = notify::drain(&mut rx);
        assert!(notices.contains(&Notice::PersistFailed {
            key: POSTS_KEY.to_string()
        }));

        // In-memory state keeps working
        let created = store.create(sample_fields(), None);
        assert!(store.find_by_id(&created.id).is_some());
    }

    #[test]
    fn test_notices_for_writes() {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();
        let mut store = ContentStore::new(Arc::new(MemoryStorage::new()), notifier, "Admin");

        let created = store.create(sample_fields(), None);
        store.update(&created.id, sample_fields());
        store.delete(&created.id);
        store.delete(&created.id);

        let notices = notify::drain(&mut rx);
        assert_eq!(
            notices,
            vec![
                Notice::PostCreated {
                    id: created.id.clone()
                },
                Notice::PostUpdated {
                    id: created.id.clone()
                },
                Notice::PostDeleted { id: created.id },
            ]
        );
    }

    #[test]
    fn test_reset_reseeds() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = store_with(storage.clone());
        store.create(sample_fields(), None);
        store.reset();
        assert_eq!(store.load_all().len(), 6);
        assert_eq!(stored_posts(&storage).len(), 6);
    }
}
