//! Domain primitives, aggregates, and ports.
//!
//! Purpose: define the types the HTTP adapter works with (users, credentials,
//! comments, errors) without any framework dependency.
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic failure payload.
//! - User / UserId: seeded user records.
//! - LoginCredentials: raw login form values.
//! - Comment: allow-list validated comment text.
//! - TraceId: request correlation identifier.

pub mod auth;
pub mod comment;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::auth::LoginCredentials;
pub use self::comment::{Comment, CommentValidationError};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserValidationError};
