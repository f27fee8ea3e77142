//! Lookup port over the registered users.
use async_trait::async_trait;

use crate::domain::{LoginCredentials, User, UserId};

/// Read-only access to the registered users.
///
/// The user list is fixed for the life of the process, so lookups cannot
/// fail; an absent user is `None`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// First user whose email and password both match exactly.
    async fn find_by_credentials(&self, credentials: &LoginCredentials) -> Option<User>;

    /// User with the given identifier, compared as a UUID.
    async fn find_by_id(&self, id: &UserId) -> Option<User>;
}
