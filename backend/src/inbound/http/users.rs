//! Login and profile handlers.
//!
//! ```text
//! POST /login      email=alice@example.com&password=password1
//! GET  /user/{id}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{Error, LoginCredentials, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::responses::{html, plain_text, redirect_to};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::templates::ProfileView;

/// Body returned when no user matches the submitted credentials.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Please try again.";

/// Login form submitted to `POST /login`. Missing fields read as empty.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl From<LoginForm> for LoginCredentials {
    fn from(value: LoginForm) -> Self {
        Self::new(value.email, value.password)
    }
}

/// Path of a user's profile page.
pub fn profile_path(id: impl std::fmt::Display) -> String {
    format!("/user/{id}")
}

/// Authenticate against the user store and establish a session.
///
/// Credentials are compared in plaintext. A failed attempt answers `200`
/// with [`INVALID_CREDENTIALS`] and leaves the session untouched.
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let credentials = LoginCredentials::from(form.into_inner());
    let user = state.users.find_by_credentials(&credentials).await;

    match user {
        Some(user) => {
            session.persist_user(user.id())?;
            info!(user_id = %user.id(), "login succeeded");
            Ok(redirect_to(&profile_path(user.id())))
        }
        None => {
            warn!("login rejected: no matching credentials");
            Ok(plain_text(INVALID_CREDENTIALS))
        }
    }
}

/// Render the profile page of the logged-in user.
///
/// The path id must parse as a UUID (`400` otherwise) and equal the session
/// value character for character (`403` otherwise, naming both ids).
#[get("/user/{id}")]
pub async fn profile(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let requested = path.into_inner();
    let user_id = UserId::new(&requested).map_err(|err| {
        warn!(requested = %requested, error = %err, "malformed user id in path");
        Error::invalid_request("Invalid user id")
    })?;

    let session_id = session.user_id_text()?.unwrap_or_default();
    if session_id != requested {
        warn!(requested = %requested, session = %session_id, "profile access denied");
        return Err(Error::forbidden(format!(
            "Access denied to user {requested} from user {session_id}"
        )));
    }

    let user = state
        .users
        .find_by_id(&user_id)
        .await
        .ok_or_else(|| Error::not_found("User not found"))?;
    let comments = state
        .comments
        .list()
        .await
        .map_err(|err| Error::internal(err.to_string()))?;

    let page = state.templates.profile(&ProfileView::new(&user, &comments))?;
    Ok(html(page))
}
