pub mod admins;
pub mod blogs;
pub mod content;
pub mod tours;

use thiserror::Error;

use crate::blog::BlogError;
use crate::content::{ReorderError, SectionError};
use crate::tour::TourError;

/// Errors surfaced by the repositories. Validation variants wrap the domain
/// errors so handlers can map them to 400s without losing the field names.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("version conflict: document is at version {current}, write was based on {given}")]
    Conflict { current: i64, given: i64 },

    #[error(transparent)]
    Section(#[from] SectionError),

    #[error(transparent)]
    Reorder(#[from] ReorderError),

    #[error(transparent)]
    Tour(#[from] TourError),

    #[error(transparent)]
    Blog(#[from] BlogError),

    #[error("stored document is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;
