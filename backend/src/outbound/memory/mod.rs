//! In-memory adapters seeded at process start.
//!
//! Nothing is persisted: both stores live exactly as long as the process.

mod comments;
mod users;

pub use comments::{InMemoryCommentRepository, SEED_COMMENT};
pub use users::{InMemoryUserRepository, SeedUser, SEED_USERS};
