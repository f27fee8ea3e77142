//! Comment submission handler.

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::{Comment, Error};
use crate::inbound::http::responses::{plain_text, redirect_to};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::profile_path;
use crate::inbound::http::{ApiResult, HOME_PATH};

/// Body returned when the comment text fails the allow-list.
pub const INVALID_COMMENT: &str = "Invalid comment. Please try again.";

/// Comment form submitted to `POST /comments`. A missing field reads as empty.
#[derive(Debug, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub comment: String,
}

/// Append an anonymous comment to the shared list.
///
/// On success the client is redirected to `/user/{n}`, where `n` is the
/// session value misread as a binary integer (see
/// [`SessionContext::legacy_numeric_user_id`]). The stored text is not
/// escaped; escaping happens when pages render.
#[post("/comments")]
pub async fn post_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<CommentForm>,
) -> ApiResult<HttpResponse> {
    let Some(numeric_id) = session.legacy_numeric_user_id()? else {
        debug!("comment posted without a session; redirecting home");
        return Ok(redirect_to(HOME_PATH));
    };

    let comment = match Comment::new(form.into_inner().comment) {
        Ok(comment) => comment,
        Err(error) => {
            info!(%error, "comment rejected");
            return Ok(plain_text(INVALID_COMMENT));
        }
    };

    state
        .comments
        .append(comment)
        .await
        .map_err(|err| Error::internal(err.to_string()))?;
    info!("comment stored");
    Ok(redirect_to(&profile_path(numeric_id)))
}

#[cfg(test)]
mod tests;
