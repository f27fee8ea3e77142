//! Request middleware.
//!
//! Purpose: request lifecycle concerns that apply to every route, such as
//! trace identifiers. Session enforcement lives with the HTTP adapter in
//! [`crate::inbound::http::guard`].

pub mod trace;

pub use trace::Trace;
