//! Google/Facebook OAuth HTTP 흐름 (가짜 프로바이더 클라이언트 사용)

#[macro_use]
mod common;

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test;
use futures_util::future::join_all;
use secrets_service_backend::config::AuthProvider;
use secrets_service_backend::repositories::users::UserStore;
use secrets_service_backend::services::auth::OAUTH_STATE_COOKIE;
use serde_json::Value;
use common::{location, response_cookie, session_cookie, test_context, test_context_with};

fn callback(provider: &str, code: &str, state: &str) -> test::TestRequest {
    test::TestRequest::get()
        .uri(&format!("/auth/{}/secrets?code={}&state={}", provider, code, state))
        .cookie(Cookie::new(OAUTH_STATE_COOKIE, state.to_string()))
}

#[actix_web::test]
async fn begin_sets_state_cookie_and_redirects_to_provider() {
    let ctx = test_context();
    let app = test_app!(ctx.context.clone());

    let response = test::call_service(&app, test::TestRequest::get().uri("/auth/google").to_request()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let state_cookie = response_cookie(&response, OAUTH_STATE_COOKIE).expect("state cookie");
    assert_eq!(state_cookie.http_only(), Some(true));
    assert_eq!(state_cookie.path(), Some("/auth"));

    let target = location(&response).expect("location");
    assert!(target.starts_with("https://google.provider.test/authorize"));
    assert!(target.ends_with(&format!("state={}", state_cookie.value())));
}

#[actix_web::test]
async fn full_round_trip_logs_in_and_reaches_profile() {
    let ctx = test_context();
    let app = test_app!(ctx.context.clone());

    let begin = test::call_service(&app, test::TestRequest::get().uri("/auth/facebook").to_request()).await;
    let state = response_cookie(&begin, OAUTH_STATE_COOKIE).expect("state cookie");

    let response = test::call_service(&app, callback("facebook", "abc", state.value()).to_request()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/secrets"));

    let cleared = response_cookie(&response, OAUTH_STATE_COOKIE).expect("state cookie removal");
    assert_eq!(cleared.value(), "");

    let cookie = session_cookie(&response).expect("session cookie");
    let profile: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/profile").cookie(cookie).to_request(),
    )
    .await;
    assert_eq!(profile["view"], "profile");
    assert_eq!(profile["data"]["viewer"]["auth_method"], "facebook");
    // 프로바이더 ID는 화면 데이터에 노출되지 않음
    assert!(!profile.to_string().contains("facebook-subject-abc"));
}

#[actix_web::test]
async fn repeated_callbacks_resolve_to_one_user() {
    let ctx = test_context();
    let app = test_app!(ctx.context.clone());

    for _ in 0..2 {
        let state = ctx.context.state_signer.issue().unwrap();
        let response = test::call_service(&app, callback("google", "same", &state).to_request()).await;
        assert_eq!(location(&response).as_deref(), Some("/secrets"));
    }
    assert_eq!(ctx.users.count().await.unwrap(), 1);

    let requests = (0..8).map(|_| {
        let state = ctx.context.state_signer.issue().unwrap();
        test::call_service(&app, callback("google", "racing", &state).to_request())
    });
    let responses = join_all(requests).await;
    assert!(responses
        .iter()
        .all(|r| location(r).as_deref() == Some("/secrets")));
    assert_eq!(ctx.users.count().await.unwrap(), 2);

    // 같은 subject라도 프로바이더가 다르면 별개의 사용자
    let state = ctx.context.state_signer.issue().unwrap();
    test::call_service(&app, callback("facebook", "same", &state).to_request()).await;
    assert_eq!(ctx.users.count().await.unwrap(), 3);
}

#[actix_web::test]
async fn callback_without_state_cookie_is_rejected() {
    let ctx = test_context();
    let app = test_app!(ctx.context.clone());

    let state = ctx.context.state_signer.issue().unwrap();
    let request = test::TestRequest::get()
        .uri(&format!("/auth/google/secrets?code=abc&state={}", state))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/login"));
    assert!(session_cookie(&response).is_none());
    assert_eq!(ctx.users.count().await.unwrap(), 0);
}

#[actix_web::test]
async fn forged_state_is_rejected() {
    let ctx = test_context();
    let app = test_app!(ctx.context.clone());

    let forged = "1700000000.nonce.c2lnbmF0dXJl";
    let response = test::call_service(&app, callback("google", "abc", forged).to_request()).await;

    assert_eq!(location(&response).as_deref(), Some("/login"));
    assert_eq!(ctx.users.count().await.unwrap(), 0);
}

#[actix_web::test]
async fn provider_failures_return_to_login() {
    let ctx = test_context();
    let app = test_app!(ctx.context.clone());

    let state = ctx.context.state_signer.issue().unwrap();
    let response = test::call_service(&app, callback("google", "rejected", &state).to_request()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/login"));

    // 사용자가 동의를 거부한 경우
    let state = ctx.context.state_signer.issue().unwrap();
    let request = test::TestRequest::get()
        .uri(&format!("/auth/google/secrets?error=access_denied&state={}", state))
        .cookie(Cookie::new(OAUTH_STATE_COOKIE, state.clone()))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(location(&response).as_deref(), Some("/login"));

    assert_eq!(ctx.users.count().await.unwrap(), 0);
    assert!(ctx.sessions.is_empty());
}

#[actix_web::test]
async fn unconfigured_provider_returns_to_login() {
    let ctx = test_context_with(&[AuthProvider::Google]);
    let app = test_app!(ctx.context.clone());

    let response = test::call_service(&app, test::TestRequest::get().uri("/auth/facebook").to_request()).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/login"));

    let response = test::call_service(&app, test::TestRequest::get().uri("/auth/google").to_request()).await;
    assert!(location(&response)
        .unwrap_or_default()
        .starts_with("https://google.provider.test/"));
}
