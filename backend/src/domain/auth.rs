//! Authentication primitives such as login credentials.
//!
//! Credentials are accepted as given: no trimming, no length or charset
//! checks, and the password is compared in plaintext.

use zeroize::Zeroizing;

use super::User;

/// Login credentials submitted through the login form.
///
/// # Examples
/// ```
/// use storefront::domain::{LoginCredentials, User, UserId};
///
/// let user = User::new(UserId::random(), "Alice", "alice@example.com", "password1");
/// let creds = LoginCredentials::new("alice@example.com", "password1");
/// assert!(creds.matches(&user));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw form inputs.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Email used as the login key.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Whether both email and password equal the user's, byte for byte.
    pub fn matches(&self, user: &User) -> bool {
        user.email() == self.email() && user.password() == self.password()
    }
}
