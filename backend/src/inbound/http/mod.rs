//! HTTP inbound adapter: the four storefront routes plus the session guard.
//!
//! | Method | Path         | Handler                        |
//! |--------|--------------|--------------------------------|
//! | GET    | `/`          | [`home::home`]                 |
//! | POST   | `/login`     | [`users::login`]               |
//! | GET    | `/user/{id}` | [`users::profile`]             |
//! | POST   | `/comments`  | [`comments::post_comment`]     |

pub mod comments;
pub mod error;
pub mod guard;
pub mod home;
pub mod responses;
pub mod session;
pub mod session_config;
pub mod state;
pub mod templates;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::web;

pub use error::ApiResult;

/// Landing page path; also the redirect target for anonymous requests.
pub const HOME_PATH: &str = "/";
/// Login form target.
pub const LOGIN_PATH: &str = "/login";

/// Form extractor settings shared by every route: urlencoded bodies are
/// accepted at any length.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().limit(usize::MAX)
}
