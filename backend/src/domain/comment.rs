//! Comment text and its allow-list validation.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Validation errors returned by [`Comment::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentValidationError {
    /// The text contains a character outside the allow-list.
    #[error("comment may only contain letters, digits, and whitespace")]
    DisallowedCharacters,
}

static COMMENT_RE: OnceLock<Regex> = OnceLock::new();

fn comment_regex() -> &'static Regex {
    COMMENT_RE.get_or_init(|| {
        // Empty text is allowed.
        let pattern = r"^[a-zA-Z0-9\s]*$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("comment regex failed to compile: {error}"))
    })
}

/// Anonymous comment accepted into the shared comment list.
///
/// ## Invariants
/// - The text consists only of ASCII letters, ASCII digits, and whitespace.
/// - No author is recorded.
///
/// # Examples
/// ```
/// use storefront::domain::Comment;
///
/// assert!(Comment::new("nice shop").is_ok());
/// assert!(Comment::new("<script>").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment(String);

impl Comment {
    /// Validate and construct a [`Comment`].
    pub fn new(text: impl Into<String>) -> Result<Self, CommentValidationError> {
        let text = text.into();
        if !comment_regex().is_match(&text) {
            return Err(CommentValidationError::DisallowedCharacters);
        }
        Ok(Self(text))
    }

    /// Comment text as submitted.
    pub fn text(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Comment {
    fn as_ref(&self) -> &str {
        self.text()
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl From<Comment> for String {
    fn from(value: Comment) -> Self {
        value.0
    }
}
