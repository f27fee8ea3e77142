//! Append-only port over the shared comment list.
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Comment;

/// Failures raised by comment store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentStoreError {
    /// A writer panicked while holding the store, leaving it unusable.
    #[error("comment store poisoned: {message}")]
    Poisoned { message: String },
}

/// Ordered list of comments shared by every session.
///
/// Implementations must tolerate concurrent appends without losing entries.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Append a comment to the end of the list.
    async fn append(&self, comment: Comment) -> Result<(), CommentStoreError>;

    /// Snapshot of every comment in insertion order.
    async fn list(&self) -> Result<Vec<Comment>, CommentStoreError>;
}
