//! Shared comment list guarded by a mutex.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::Comment;
use crate::domain::ports::{CommentRepository, CommentStoreError};

/// Comment seeded into every fresh store.
pub const SEED_COMMENT: &str = "This is a comment";

/// Append-only comment list safe for concurrent writers.
///
/// # Examples
/// ```
/// use storefront::domain::ports::CommentRepository;
/// use storefront::outbound::memory::InMemoryCommentRepository;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let repo = InMemoryCommentRepository::seeded();
/// assert_eq!(repo.list().await.expect("list").len(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCommentRepository {
    comments: Mutex<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    /// Build a store holding the given comments.
    pub fn new(comments: Vec<Comment>) -> Self {
        Self {
            comments: Mutex::new(comments),
        }
    }

    /// Build a store holding the single start-up comment.
    pub fn seeded() -> Self {
        // The seed text is allow-listed, so this always yields one comment.
        Self::new(Comment::new(SEED_COMMENT).into_iter().collect())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Comment>>, CommentStoreError> {
        self.comments
            .lock()
            .map_err(|error| CommentStoreError::Poisoned {
                message: error.to_string(),
            })
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn append(&self, comment: Comment) -> Result<(), CommentStoreError> {
        self.lock()?.push(comment);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Comment>, CommentStoreError> {
        Ok(self.lock()?.clone())
    }
}
