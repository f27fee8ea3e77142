//! Server configuration: listener settings and the assembled server config.

use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::session_config::SessionSettings;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Listener settings loaded via OrthoConfig from CLI flags and
/// `STOREFRONT_*` environment variables.
///
/// `port` defaults to 8080, so the merged configuration is never empty.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STOREFRONT")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Resolve the socket address to bind.
    ///
    /// # Errors
    /// Returns [`std::net::AddrParseError`] when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host(), self.port).parse()
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a server configuration from session settings and a listener.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        let SessionSettings {
            key,
            cookie_secure,
            same_site,
        } = session;
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
