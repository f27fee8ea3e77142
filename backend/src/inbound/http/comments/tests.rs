//! Tests for the comment submission handler.

use super::*;
use crate::domain::ports::CommentRepository;
use crate::inbound::http::test_utils::{
    Stores, comment_request, handler_app, login_request, seed_session_request, session_cookie,
};
use actix_web::cookie::Cookie;
use actix_web::http::{StatusCode, header};
use actix_web::test as actix_test;
use rstest::{fixture, rstest};

#[fixture]
fn stores() -> Stores {
    Stores::seeded()
}

async fn comment_texts(stores: &Stores) -> Vec<String> {
    stores
        .comments
        .list()
        .await
        .expect("list comments")
        .into_iter()
        .map(String::from)
        .collect()
}

fn legacy_redirect(user_id: &str) -> String {
    let bytes = user_id.as_bytes();
    let n = i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    format!("/user/{n}")
}

async fn alice_cookie(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
) -> Cookie<'static> {
    let response =
        actix_test::call_service(app, login_request("alice@example.com", "password1")).await;
    session_cookie(&response).expect("session cookie")
}

#[rstest]
#[actix_web::test]
async fn accepted_comment_redirects_to_the_misdecoded_id(stores: Stores) {
    let app = actix_test::init_service(handler_app(stores.state())).await;
    let cookie = alice_cookie(&app).await;

    let response = actix_test::call_service(&app, comment_request("nice shop", Some(cookie))).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    let expected = legacy_redirect(&stores.user_id("Alice"));
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some(expected.as_str())
    );
    assert_eq!(
        comment_texts(&stores).await,
        vec!["This is a comment".to_owned(), "nice shop".to_owned()]
    );
}

#[rstest]
#[case("<script>alert(1)</script>")]
#[case("hello!")]
#[case("semi;colon")]
#[case("caf\u{e9}")]
#[actix_web::test]
async fn disallowed_comment_leaves_the_store_unchanged(stores: Stores, #[case] text: &str) {
    let app = actix_test::init_service(handler_app(stores.state())).await;
    let cookie = alice_cookie(&app).await;

    let response = actix_test::call_service(&app, comment_request(text, Some(cookie))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = actix_test::read_body(response).await;
    assert_eq!(body.as_ref(), INVALID_COMMENT.as_bytes());
    assert_eq!(comment_texts(&stores).await, vec!["This is a comment".to_owned()]);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("Line one\nline two 2")]
#[actix_web::test]
async fn allow_listed_text_is_stored_verbatim(stores: Stores, #[case] text: &str) {
    let app = actix_test::init_service(handler_app(stores.state())).await;
    let cookie = alice_cookie(&app).await;

    let response = actix_test::call_service(&app, comment_request(text, Some(cookie))).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    let stored = comment_texts(&stores).await;
    assert_eq!(stored.last().map(String::as_str), Some(text));
}

#[rstest]
#[actix_web::test]
async fn long_comment_is_stored_whole(stores: Stores) {
    let app = actix_test::init_service(handler_app(stores.state())).await;
    let cookie = alice_cookie(&app).await;
    let text = "a".repeat(20_000);

    let response = actix_test::call_service(&app, comment_request(&text, Some(cookie))).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some(legacy_redirect(&stores.user_id("Alice")).as_str())
    );
    let stored = comment_texts(&stores).await;
    assert_eq!(stored.len(), 2);
    assert_eq!(stored.last(), Some(&text));
}

#[rstest]
#[actix_web::test]
async fn anonymous_comment_is_redirected_home(stores: Stores) {
    let app = actix_test::init_service(handler_app(stores.state())).await;

    let response = actix_test::call_service(&app, comment_request("hello", None)).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some(HOME_PATH)
    );
    assert_eq!(comment_texts(&stores).await.len(), 1);
}

#[rstest]
#[actix_web::test]
async fn short_session_value_is_an_internal_error(stores: Stores) {
    let app = actix_test::init_service(handler_app(stores.state())).await;
    let seeded = actix_test::call_service(&app, seed_session_request("abc")).await;
    let cookie = session_cookie(&seeded).expect("session cookie");

    let response = actix_test::call_service(&app, comment_request("hello", Some(cookie))).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(comment_texts(&stores).await.len(), 1);
}

#[rstest]
#[actix_web::test]
async fn concurrent_posts_are_all_kept(stores: Stores) {
    let app = actix_test::init_service(handler_app(stores.state())).await;
    let cookie = alice_cookie(&app).await;

    let requests = (0..32).map(|i| {
        actix_test::call_service(&app, comment_request(&format!("comment {i}"), Some(cookie.clone())))
    });
    let responses = futures::future::join_all(requests).await;

    assert!(responses.iter().all(|r| r.status() == StatusCode::FOUND));
    let stored = comment_texts(&stores).await;
    assert_eq!(stored.len(), 33);
    for i in 0..32 {
        assert!(stored.contains(&format!("comment {i}")));
    }
}
