//! Library error type

use crate::storage::StorageError;

/// Errors surfaced by the library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not logged in")]
    NotAuthenticated,

    #[error("user '{0}' is not an administrator")]
    NotAdmin(String),

    #[error("unknown category '{0}' (expected AI, Body Language or Dev/Design)")]
    UnknownCategory(String),

    #[error("post '{0}' not found")]
    PostNotFound(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, Error>;
