//! User-facing notices published on state transitions
//!
//! Notices are advisory: a store publishes one whenever its state changes and
//! nobody is required to listen.

use std::fmt;
use tokio::sync::broadcast;

/// Capacity of the notice channel
const CHANNEL_CAPACITY: usize = 32;

/// A transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    LoggedIn { username: String },
    LoginFailed,
    LoginError,
    LoggedOut,
    PostCreated { id: String },
    PostUpdated { id: String },
    PostDeleted { id: String },
    PersistFailed { key: String },
}

impl Notice {
    /// Whether the notice reports a failure
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Notice::LoginFailed | Notice::LoginError | Notice::PersistFailed { .. }
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LoggedIn { username } => write!(f, "Welcome back, {}!", username),
            Notice::LoginFailed => f.write_str("Invalid username or password"),
            Notice::LoginError => f.write_str("An error occurred during login"),
            Notice::LoggedOut => f.write_str("You have been logged out"),
            Notice::PostCreated { .. } => f.write_str("New post created successfully"),
            Notice::PostUpdated { .. } => f.write_str("Post updated successfully"),
            Notice::PostDeleted { .. } => f.write_str("Post deleted successfully"),
            Notice::PersistFailed { key } => {
                write!(f, "Changes could not be saved ({}); they will be lost", key)
            }
        }
    }
}

/// Broadcasts notices to any number of subscribers
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notice>,
}

impl Notifier {
    /// Create a notifier with no subscribers
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Subscribe to notices published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.tx.subscribe()
    }

    /// Publish a notice; having no subscribers is fine
    pub fn publish(&self, notice: Notice) {
        tracing::debug!("Notice: {}", notice);
        let _ = self.tx.send(notice);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Drain every notice currently queued on `rx`
pub fn drain(rx: &mut broadcast::Receiver<Notice>) -> Vec<Notice> {
    let mut notices = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(notice) => notices.push(notice),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} notices", skipped);
            }
            Err(_) => break,
        }
    }
    notices
}
