//! Read-only user store backed by a vector.

use async_trait::async_trait;

use crate::domain::ports::UserRepository;
use crate::domain::{LoginCredentials, User, UserId};

/// Name, email, and password of a user created at start-up.
#[derive(Debug, Clone, Copy)]
pub struct SeedUser {
    /// Display name.
    pub name: &'static str,
    /// Login email.
    pub email: &'static str,
    /// Plaintext password.
    pub password: &'static str,
}

/// Users available to every process; identifiers are generated per start.
pub const SEED_USERS: [SeedUser; 3] = [
    SeedUser {
        name: "Alice",
        email: "alice@example.com",
        password: "password1",
    },
    SeedUser {
        name: "Bob",
        email: "bob@example.com",
        password: "password2",
    },
    SeedUser {
        name: "Charlie",
        email: "charlie@example.com",
        password: "password3",
    },
];

/// Fixed list of users, immutable after construction.
///
/// # Examples
/// ```
/// use storefront::outbound::memory::InMemoryUserRepository;
///
/// let repo = InMemoryUserRepository::seeded();
/// assert_eq!(repo.users().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    /// Build a repository over the given users.
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Build a repository holding [`SEED_USERS`] with fresh random ids.
    pub fn seeded() -> Self {
        let users = SEED_USERS
            .iter()
            .map(|seed| User::new(UserId::random(), seed.name, seed.email, seed.password))
            .collect();
        Self::new(users)
    }

    /// Every stored user in seed order.
    pub fn users(&self) -> &[User] {
        &self.users
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_credentials(&self, credentials: &LoginCredentials) -> Option<User> {
        self.users
            .iter()
            .find(|user| credentials.matches(user))
            .cloned()
    }

    async fn find_by_id(&self, id: &UserId) -> Option<User> {
        self.users
            .iter()
            .find(|user| user.id().as_uuid() == id.as_uuid())
            .cloned()
    }
}
