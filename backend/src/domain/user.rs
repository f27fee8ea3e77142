//! User data model.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroizing;

/// Validation errors returned by [`UserId::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// The identifier was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier is not a UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
}

/// Stable user identifier stored as a UUID.
///
/// The caller's spelling is retained next to the parsed UUID so that
/// comparisons against session values stay literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(Uuid, String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::UserId;
    ///
    /// let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").unwrap();
    /// assert_eq!(id.as_ref(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    /// assert!(UserId::new("42").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }

        let parsed = Uuid::parse_str(id).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed, id.to_owned()))
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        let uuid = Uuid::new_v4();
        Self(uuid, uuid.to_string())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Application user as seeded at start-up.
///
/// ## Invariants
/// - Users are immutable once created.
/// - The password is held in plaintext and compared verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    password: Zeroizing<String>,
}

impl User {
    /// Build a new [`User`].
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name shown on the profile page.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email address, used as the login key.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Plaintext password.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
