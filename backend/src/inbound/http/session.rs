//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Wraps the Actix session so handlers deal only with the single `"UserId"`
//! value written at login.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, UserId};

/// Session key holding the logged-in user's identifier as text.
pub(crate) const USER_ID_KEY: &str = "UserId";

/// Newtype wrapper that exposes the session operations handlers need.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated user's id, in its textual form.
    pub fn persist_user(&self, user_id: &UserId) -> Result<(), Error> {
        self.0
            .insert(USER_ID_KEY, user_id.as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Raw session value, if any. An empty string is returned as stored.
    pub fn user_id_text(&self) -> Result<Option<String>, Error> {
        self.0
            .get::<String>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))
    }

    /// The session value reinterpreted as a little-endian `i32`.
    ///
    /// This reproduces a known defect: the value is stored as UUID text but
    /// read back as if it held four bytes of a binary integer, so the result
    /// never names a real user. A value shorter than four bytes is an internal
    /// error.
    pub fn legacy_numeric_user_id(&self) -> Result<Option<i32>, Error> {
        self.user_id_text()?
            .map(|raw| {
                decode_legacy_user_id(&raw).ok_or_else(|| {
                    Error::internal("session user id shorter than four bytes")
                })
            })
            .transpose()
    }
}

fn decode_legacy_user_id(raw: &str) -> Option<i32> {
    raw.as_bytes()
        .first_chunk::<4>()
        .map(|bytes| i32::from_le_bytes(*bytes))
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
