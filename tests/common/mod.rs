//! HTTP 통합 테스트 공용 도우미
//!
//! 메모리 저장소와 가짜 OAuth 클라이언트로 `AppContext`를 조립합니다.

#![allow(dead_code)]

use std::sync::Arc;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use async_trait::async_trait;
use secrets_service_backend::config::AuthProvider;
use secrets_service_backend::core::{AppContext, AppError, AppResult};
use secrets_service_backend::repositories::sessions::InMemorySessionStore;
use secrets_service_backend::repositories::users::InMemoryUserStore;
use secrets_service_backend::services::auth::{OAuthClient, OAuthStateSigner, PasswordHasher};

pub const SESSION_COOKIE: &str = "secrets.sid";
pub const STATE_SECRET: &str = "integration-test-state-secret";

/// 인가 코드를 그대로 subject로 돌려주는 OAuth 클라이언트
pub struct FakeOAuthClient {
    provider: AuthProvider,
}

impl FakeOAuthClient {
    pub fn new(provider: AuthProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl OAuthClient for FakeOAuthClient {
    fn provider(&self) -> AuthProvider {
        self.provider
    }

    fn authorize_url(&self, state: &str) -> String {
        format!("https://{}.provider.test/authorize?state={}", self.provider, state)
    }

    async fn fetch_subject(&self, code: &str) -> AppResult<String> {
        if code == "rejected" {
            return Err(AppError::OAuthFailure("provider rejected the code".to_string()));
        }
        Ok(format!("{}-subject-{}", self.provider, code))
    }
}

pub struct TestContext {
    pub context: AppContext,
    pub users: Arc<InMemoryUserStore>,
    pub sessions: Arc<InMemorySessionStore>,
}

pub fn test_context_with(providers: &[AuthProvider]) -> TestContext {
    let users = Arc::new(InMemoryUserStore::new());
    let sessions = Arc::new(InMemorySessionStore::new());

    let mut builder = AppContext::builder(users.clone(), sessions.clone())
        .password_hasher(PasswordHasher::new(4).unwrap())
        .state_signer(OAuthStateSigner::new(STATE_SECRET, 600));
    for provider in providers {
        builder = builder.oauth_client(Arc::new(FakeOAuthClient::new(*provider)));
    }

    TestContext {
        context: builder.build().unwrap(),
        users,
        sessions,
    }
}

pub fn test_context() -> TestContext {
    test_context_with(&[AuthProvider::Google, AuthProvider::Facebook])
}

/// 운영과 같은 미들웨어 구성으로 테스트 서비스를 만듭니다.
macro_rules! test_app {
    ($context:expr) => {{
        let context = actix_web::web::Data::new($context);
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(context.clone())
                .wrap(secrets_service_backend::middlewares::SessionMiddleware::new(
                    context.session_manager.clone(),
                ))
                .configure(secrets_service_backend::routes::configure_all_routes),
        )
        .await
    }};
}

pub fn location<B>(response: &ServiceResponse<B>) -> Option<String> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

pub fn response_cookie<B>(response: &ServiceResponse<B>, name: &str) -> Option<Cookie<'static>> {
    response
        .response()
        .cookies()
        .find(|c| c.name() == name)
        .map(|c| c.into_owned())
}

pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    response_cookie(response, SESSION_COOKIE).filter(|c| !c.value().is_empty())
}
