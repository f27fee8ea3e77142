//! Session guard middleware.
//!
//! Every request outside [`PUBLIC_PATHS`] must carry a session holding a
//! non-empty user id; anything else is redirected to the home page before a
//! handler runs. Wrap this inside the session middleware so the session is
//! available.

use std::task::{Context, Poll};

use actix_session::SessionExt;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpResponse};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{debug, warn};

use super::responses::redirect_to;
use super::session::USER_ID_KEY;
use super::{HOME_PATH, LOGIN_PATH};

/// Paths reachable without a session.
pub const PUBLIC_PATHS: [&str; 2] = [HOME_PATH, LOGIN_PATH];

fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

fn has_user_id(req: &ServiceRequest) -> bool {
    match req.get_session().get::<String>(USER_ID_KEY) {
        Ok(Some(id)) => !id.is_empty(),
        Ok(None) => false,
        Err(error) => {
            warn!(%error, "unreadable session treated as unauthenticated");
            false
        }
    }
}

/// Middleware redirecting unauthenticated requests to `/`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use storefront::inbound::http::guard::SessionGuard;
///
/// let app = App::new().wrap(SessionGuard);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionGuard;

impl<S, B> Transform<S, ServiceRequest> for SessionGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionGuardMiddleware { service }))
    }
}

/// Service wrapper produced by [`SessionGuard`].
pub struct SessionGuardMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for SessionGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if is_public(req.path()) || has_user_id(&req) {
            let fut = self.service.call(req);
            return Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) });
        }

        debug!(path = %req.path(), "no session; redirecting home");
        let response: HttpResponse = redirect_to(HOME_PATH);
        let (request, _payload) = req.into_parts();
        Box::pin(ready(Ok(
            ServiceResponse::new(request, response).map_into_right_body()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_session::Session;
    use actix_web::body::BoxBody;
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test, web};
    use rstest::rstest;
    use serde::Deserialize;

    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};

    #[derive(Deserialize)]
    struct SeedQuery {
        user: Option<String>,
    }

    fn guarded_app() -> App<
        impl actix_web::dev::ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<EitherBody<BoxBody>>,
            Error = Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(SessionGuard)
            .wrap(test_session_middleware())
            .route(
                "/",
                web::get().to(|session: Session, query: web::Query<SeedQuery>| async move {
                    if let Some(user) = query.into_inner().user {
                        session.insert(USER_ID_KEY, user).expect("store user id");
                    }
                    HttpResponse::Ok().body("home")
                }),
            )
            .route("/login", web::post().to(|| async { HttpResponse::Ok().body("login") }))
            .route(
                "/private",
                web::get().to(|| async { HttpResponse::Ok().body("private") }),
            )
    }

    #[rstest]
    #[case("/private")]
    #[case("/comments")]
    #[case("/user/3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    #[case("/does-not-exist")]
    #[case("/login/")]
    #[actix_web::test]
    async fn redirects_anonymous_requests_home(#[case] path: &str) {
        let app = test::init_service(guarded_app()).await;
        let res = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(
            res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
            Some("/")
        );
    }

    #[actix_web::test]
    async fn public_paths_skip_the_guard() {
        let app = test::init_service(guarded_app()).await;

        let home = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(home.status(), StatusCode::OK);

        let login =
            test::call_service(&app, test::TestRequest::post().uri("/login").to_request()).await;
        assert_eq!(login.status(), StatusCode::OK);
    }

    #[rstest]
    #[case("someone", StatusCode::OK)]
    #[case("", StatusCode::FOUND)]
    #[actix_web::test]
    async fn session_value_decides_access(#[case] user: &str, #[case] expected: StatusCode) {
        let app = test::init_service(guarded_app()).await;
        let seeded = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/?user={user}"))
                .to_request(),
        )
        .await;
        let cookie = session_cookie(&seeded).expect("session cookie set");

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/private")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), expected);
    }
}
