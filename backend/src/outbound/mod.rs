//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-lifetime, in-memory user and comment stores.
//!
//! Adapters are thin translators with no business logic.

pub mod memory;
