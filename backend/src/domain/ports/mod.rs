//! Driven ports for the user and comment stores.
//!
//! Handlers reach both stores only through these traits, so the in-memory
//! adapters can be swapped for test doubles.

mod comment_repository;
mod user_repository;

pub use comment_repository::{CommentRepository, CommentStoreError};
pub use user_repository::UserRepository;
