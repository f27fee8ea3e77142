//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, ServerSettings};

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::body::{BoxBody, EitherBody};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::Trace;
use crate::inbound::http::comments::post_comment;
use crate::inbound::http::form_config;
use crate::inbound::http::guard::SessionGuard;
use crate::inbound::http::home::home;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{login, profile};

/// Everything one App instance needs; cloned into each worker.
#[derive(Clone)]
pub struct AppDependencies {
    /// Ports and templates shared by handlers.
    pub http_state: web::Data<HttpState>,
    /// Session cookie signing and encryption key.
    pub key: Key,
    /// Whether the session cookie is `Secure`.
    pub cookie_secure: bool,
    /// `SameSite` policy of the session cookie.
    pub same_site: SameSite,
}

/// Assemble the application: trace → session → guard → routes.
///
/// # Examples
/// ```
/// use actix_web::web;
/// use storefront::inbound::http::session_config::SessionSettings;
/// use storefront::inbound::http::state::HttpState;
/// use storefront::server::{build_app, AppDependencies};
///
/// let session = SessionSettings::ephemeral();
/// let _app = build_app(AppDependencies {
///     http_state: web::Data::new(HttpState::seeded().expect("templates")),
///     key: session.key,
///     cookie_secure: session.cookie_secure,
///     same_site: session.same_site,
/// });
/// ```
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    App::new()
        .app_data(http_state)
        .app_data(form_config())
        .wrap(SessionGuard)
        .wrap(session)
        .wrap(Trace)
        .service(home)
        .service(login)
        .service(profile)
        .service(post_comment)
}

/// Construct an Actix HTTP server over the given state and configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(http_state: HttpState, config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(http_state);
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "storefront listening");
    Ok(server)
}
