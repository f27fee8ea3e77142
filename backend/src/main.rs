//! Storefront entry-point: loads configuration and serves the demo shop.

use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use storefront::inbound::http::session_config::{BuildMode, session_settings_from_env};
use storefront::inbound::http::state::HttpState;
use storefront::server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load server settings: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;

    let env = mockable::DefaultEnv::new();
    let session = session_settings_from_env(&env, BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;

    let http_state = HttpState::seeded()
        .map_err(|e| std::io::Error::other(format!("failed to load templates: {e}")))?;

    create_server(http_state, ServerConfig::new(session, bind_addr))?.await
}
