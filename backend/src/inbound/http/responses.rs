//! Small response builders shared by handlers and middleware.

use actix_web::HttpResponse;
use actix_web::http::header::{self, ContentType};

/// `302 Found` pointing at `location`.
pub fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// `200 OK` with a plain-text body.
pub fn plain_text(body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(body)
}

/// `200 OK` with an HTML body.
pub fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}
