//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and stay testable without the real stores.

use std::sync::Arc;

use crate::domain::ports::{CommentRepository, UserRepository};
use crate::outbound::memory::{InMemoryCommentRepository, InMemoryUserRepository};

use super::templates::Templates;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub templates: Arc<Templates>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        users: Arc<dyn UserRepository>,
        comments: Arc<dyn CommentRepository>,
        templates: Arc<Templates>,
    ) -> Self {
        Self {
            users,
            comments,
            templates,
        }
    }

    /// State backed by freshly seeded in-memory stores.
    ///
    /// # Examples
    /// ```
    /// use storefront::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::seeded().expect("templates compile");
    /// let _users = state.users.clone();
    /// ```
    ///
    /// # Errors
    /// Returns [`minijinja::Error`] when a bundled template fails to compile.
    pub fn seeded() -> Result<Self, minijinja::Error> {
        Ok(Self::new(
            Arc::new(InMemoryUserRepository::seeded()),
            Arc::new(InMemoryCommentRepository::seeded()),
            Arc::new(Templates::new()?),
        ))
    }
}
