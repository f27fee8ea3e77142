//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{Session, SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::BoxBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, test, web};
use serde::Deserialize;

use super::comments::post_comment;
use super::form_config;
use super::home::home;
use super::session::USER_ID_KEY;
use super::state::HttpState;
use super::templates::Templates;
use super::users::{login, profile};
use crate::outbound::memory::{InMemoryCommentRepository, InMemoryUserRepository};

/// Route that writes an arbitrary `UserId` session value, for tests that need
/// sessions a real login cannot produce.
pub const SEED_SESSION_PATH: &str = "/test/seed-session";

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Extract the `session` cookie set by a response, if any.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
}

/// Seeded stores kept by the test so it can inspect them after requests.
pub struct Stores {
    pub users: Arc<InMemoryUserRepository>,
    pub comments: Arc<InMemoryCommentRepository>,
}

impl Stores {
    pub fn seeded() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::seeded()),
            comments: Arc::new(InMemoryCommentRepository::seeded()),
        }
    }

    /// Id of the seeded user with the given name.
    pub fn user_id(&self, name: &str) -> String {
        self.users
            .users()
            .iter()
            .find(|user| user.name() == name)
            .map(|user| user.id().to_string())
            .expect("seeded user")
    }

    pub fn state(&self) -> HttpState {
        HttpState::new(
            self.users.clone(),
            self.comments.clone(),
            Arc::new(Templates::new().expect("templates compile")),
        )
    }
}

#[derive(Deserialize)]
struct SeedSessionQuery {
    user: String,
}

/// Handlers behind a test session middleware, without the session guard.
pub fn handler_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<BoxBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(form_config())
        .wrap(test_session_middleware())
        .service(home)
        .service(login)
        .service(profile)
        .service(post_comment)
        .route(
            SEED_SESSION_PATH,
            web::get().to(|session: Session, query: web::Query<SeedSessionQuery>| async move {
                session
                    .insert(USER_ID_KEY, query.into_inner().user)
                    .expect("store user id");
                HttpResponse::NoContent().finish()
            }),
        )
}

/// `POST /login` with the given form fields.
pub fn login_request(email: &str, password: &str) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/login")
        .set_form([("email", email), ("password", password)])
        .to_request()
}

/// `POST /comments` carrying `cookie`, if any.
pub fn comment_request(comment: &str, cookie: Option<Cookie<'static>>) -> actix_http::Request {
    let request = test::TestRequest::post()
        .uri("/comments")
        .set_form([("comment", comment)]);
    match cookie {
        Some(cookie) => request.cookie(cookie).to_request(),
        None => request.to_request(),
    }
}

/// `GET` of the seed route writing `user` into the session.
pub fn seed_session_request(user: &str) -> actix_http::Request {
    test::TestRequest::get()
        .uri(&format!("{SEED_SESSION_PATH}?user={user}"))
        .to_request()
}
