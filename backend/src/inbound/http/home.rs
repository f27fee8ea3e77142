//! Landing page with the login form.

use actix_web::{HttpResponse, get, web};

use super::ApiResult;
use super::responses::html;
use super::state::HttpState;

/// Serve the login form. No session is required.
#[get("/")]
pub async fn home(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(html(state.templates.home()?))
}
