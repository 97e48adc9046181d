//! 시크릿 제출/삭제/목록과 인가 게이트 HTTP 흐름

#[macro_use]
mod common;

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test;
use secrets_service_backend::repositories::users::UserStore;
use serde_json::Value;
use common::{location, session_cookie, test_context};

/// 회원가입 후 세션 쿠키를 돌려줍니다.
macro_rules! register {
    ($app:expr, $username:expr) => {{
        let request = test::TestRequest::post()
            .uri("/register")
            .set_form([("username", $username), ("password", "pw")])
            .to_request();
        let response = test::call_service($app, request).await;
        session_cookie(&response).expect("session cookie")
    }};
}

#[actix_web::test]
async fn submitted_secret_is_listed_anonymously_without_credentials() {
    let ctx = test_context();
    let app = test_app!(ctx.context.clone());
    let cookie = register!(&app, "alice@example.com");

    let submit = test::TestRequest::post()
        .uri("/submit")
        .cookie(cookie)
        .set_form([("secret", "  I like pineapple pizza  ")])
        .to_request();
    let response = test::call_service(&app, submit).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/secrets"));

    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/secrets").to_request()).await;
    assert_eq!(body["view"], "secrets");
    assert_eq!(
        body["data"]["usersWithSecrets"],
        serde_json::json!([{ "secrets": ["I like pineapple pizza"] }])
    );

    let raw = body.to_string();
    assert!(!raw.contains("alice@example.com"));
    assert!(!raw.contains("$2"));
    assert!(!raw.contains("password"));
    assert!(!raw.contains("viewer"));
}

#[actix_web::test]
async fn authenticated_listing_uses_user_view() {
    let ctx = test_context();
    let app = test_app!(ctx.context.clone());
    let cookie = register!(&app, "bob@example.com");

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/secrets").cookie(cookie).to_request(),
    )
    .await;
    assert_eq!(body["view"], "usersecrets");
    assert_eq!(body["data"]["viewer"]["display_name"], "bob@example.com");
    assert_eq!(body["data"]["usersWithSecrets"], serde_json::json!([]));
}

#[actix_web::test]
async fn remove_deletes_every_matching_secret() {
    let ctx = test_context();
    let app = test_app!(ctx.context.clone());
    let cookie = register!(&app, "carol@example.com");

    for secret in ["dup", "keep", "dup"] {
        let submit = test::TestRequest::post()
            .uri("/submit")
            .cookie(cookie.clone())
            .set_form([("secret", secret)])
            .to_request();
        test::call_service(&app, submit).await;
    }

    let remove = test::TestRequest::post()
        .uri("/profile")
        .cookie(cookie.clone())
        .set_form([("button", "dup")])
        .to_request();
    let response = test::call_service(&app, remove).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/profile"));

    let profile: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/profile").cookie(cookie).to_request(),
    )
    .await;
    assert_eq!(profile["data"]["usersWithSecrets"], serde_json::json!(["keep"]));
}

#[actix_web::test]
async fn blank_secret_is_rejected() {
    let ctx = test_context();
    let app = test_app!(ctx.context.clone());
    let cookie = register!(&app, "dave@example.com");

    let submit = test::TestRequest::post()
        .uri("/submit")
        .cookie(cookie)
        .set_form([("secret", "   ")])
        .to_request();
    let response = test::call_service(&app, submit).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/secrets").to_request()).await;
    assert_eq!(body["data"]["usersWithSecrets"], serde_json::json!([]));
}

#[actix_web::test]
async fn anonymous_mutations_never_reach_the_store() {
    let ctx = test_context();
    let app = test_app!(ctx.context.clone());
    let cookie = register!(&app, "erin@example.com");

    let submit = test::TestRequest::post()
        .uri("/submit")
        .cookie(cookie)
        .set_form([("secret", "mine")])
        .to_request();
    test::call_service(&app, submit).await;

    let anonymous = [
        test::TestRequest::post().uri("/submit").set_form([("secret", "intruder")]),
        test::TestRequest::post().uri("/profile").set_form([("button", "mine")]),
        test::TestRequest::get().uri("/submit"),
        test::TestRequest::get().uri("/profile"),
        // 알 수 없는 세션 쿠키도 익명
        test::TestRequest::post()
            .uri("/profile")
            .cookie(Cookie::new("secrets.sid", "not-a-real-session"))
            .set_form([("button", "mine")]),
    ];
    for request in anonymous {
        let response = test::call_service(&app, request.to_request()).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response).as_deref(), Some("/login"));
    }

    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/secrets").to_request()).await;
    assert_eq!(
        body["data"]["usersWithSecrets"],
        serde_json::json!([{ "secrets": ["mine"] }])
    );
    assert_eq!(ctx.users.count().await.unwrap(), 1);
}
