//! Per-request correlation id.
//!
//! The [`crate::Trace`] middleware runs each request inside
//! [`TraceId::scope`]; anything awaited within that future, error
//! constructors included, can read the id back with [`TraceId::current`].

use std::fmt;
use std::future::Future;

use uuid::Uuid;

/// Response header echoing the request's trace id.
pub const TRACE_ID_HEADER: &str = "trace-id";

tokio::task_local! {
    static CURRENT: TraceId;
}

/// Random v4 UUID identifying one request in logs and error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The id of the request being served, if called inside [`Self::scope`].
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::TraceId;
    ///
    /// assert!(TraceId::current().is_none());
    /// ```
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Drive `fut` with `self` as the current id.
    ///
    /// Task-locals do not follow `tokio::spawn`; spawned work must be wrapped
    /// again.
    pub async fn scope<F: Future>(self, fut: F) -> F::Output {
        CURRENT.scope(self, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
