//! # OAuth 클라이언트 추상화
//!
//! 프로바이더별 OAuth 2.0 Authorization Code 흐름을 하나의 트레이트로 묶습니다.
//! 핸들러는 프로바이더가 돌려준 고유 사용자 식별자(subject)만 받아
//! [`IdentityResolver`](crate::services::auth::IdentityResolver)에 넘깁니다.
//!
//! ```text
//! GET /auth/{provider}          → authorize_url(state) 로 303
//! GET /auth/{provider}/secrets  → state 검증 → fetch_subject(code) → 세션 수립
//! ```

use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use crate::config::{AuthProvider, OAuthClientSettings};
use crate::core::{AppError, AppResult};

/// 프로바이더 API 호출 제한 시간
pub const OAUTH_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait]
pub trait OAuthClient: Send + Sync {
    fn provider(&self) -> AuthProvider;

    /// 사용자를 보낼 프로바이더 동의 화면 URL
    fn authorize_url(&self, state: &str) -> String;

    /// 인가 코드를 교환하고 프로바이더의 고유 사용자 식별자를 반환합니다.
    async fn fetch_subject(&self, code: &str) -> AppResult<String>;
}

/// 쿼리 문자열을 붙인 URL을 만듭니다.
pub(crate) fn url_with_query(base: &str, params: &[(&str, &str)]) -> String {
    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", base, query_string)
}

/// 프로바이더 HTTP 호출에 쓰는 공용 클라이언트
pub(crate) fn http_client() -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(OAUTH_HTTP_TIMEOUT)
        .build()
        .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))
}

/// 실패 응답을 `OAuthFailure`로 변환합니다. 본문은 로그에만 남깁니다.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
    provider: AuthProvider,
    step: &str,
) -> AppResult<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let error_text = response.text().await.unwrap_or_default();
    log::warn!("{} {} 실패 - status: {}, body: {}", provider, step, status, error_text);
    Err(AppError::OAuthFailure(format!("{} {} failed with status {}", provider, step, status)))
}

/// 설정된 OAuth 클라이언트 목록
///
/// 환경 변수가 없는 프로바이더는 `None`이며, 해당 경로는 `/login`으로 돌아갑니다.
#[derive(Clone, Default)]
pub struct OAuthProviders {
    pub google: Option<Arc<dyn OAuthClient>>,
    pub facebook: Option<Arc<dyn OAuthClient>>,
}

impl OAuthProviders {
    pub fn get(&self, provider: AuthProvider) -> AppResult<Arc<dyn OAuthClient>> {
        let client = match provider {
            AuthProvider::Google => self.google.clone(),
            AuthProvider::Facebook => self.facebook.clone(),
        };
        client.ok_or_else(|| AppError::OAuthFailure(format!("{} login is not configured", provider)))
    }

    pub fn with(mut self, client: Arc<dyn OAuthClient>) -> Self {
        match client.provider() {
            AuthProvider::Google => self.google = Some(client),
            AuthProvider::Facebook => self.facebook = Some(client),
        }
        self
    }

    pub fn configured(&self) -> Vec<AuthProvider> {
        [AuthProvider::Google, AuthProvider::Facebook]
            .into_iter()
            .filter(|p| self.get(*p).is_ok())
            .collect()
    }
}

/// 설정에서 클라이언트를 만들되, 설정이 없으면 경고 후 건너뜁니다.
pub(crate) fn optional_client<C, F>(provider: AuthProvider, settings: AppResult<OAuthClientSettings>, build: F) -> Option<Arc<dyn OAuthClient>>
where
    C: OAuthClient + 'static,
    F: FnOnce(OAuthClientSettings) -> AppResult<C>,
{
    match settings.and_then(build) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            log::warn!("{} OAuth 비활성화: {}", provider, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticClient(AuthProvider);

    #[async_trait]
    impl OAuthClient for StaticClient {
        fn provider(&self) -> AuthProvider {
            self.0
        }

        fn authorize_url(&self, state: &str) -> String {
            url_with_query("https://example.test/auth", &[("state", state)])
        }

        async fn fetch_subject(&self, code: &str) -> AppResult<String> {
            Ok(code.to_string())
        }
    }

    #[test]
    fn test_url_with_query_encodes_values() {
        let url = url_with_query("https://example.test/auth", &[("scope", "a b"), ("x", "1&2")]);
        assert_eq!(url, "https://example.test/auth?scope=a%20b&x=1%262");
    }

    #[test]
    fn test_unconfigured_provider_is_oauth_failure() {
        let providers = OAuthProviders::default().with(Arc::new(StaticClient(AuthProvider::Google)));

        assert!(providers.get(AuthProvider::Google).is_ok());
        assert!(matches!(providers.get(AuthProvider::Facebook), Err(AppError::OAuthFailure(_))));
        assert_eq!(providers.configured(), vec![AuthProvider::Google]);
    }

    #[test]
    fn test_missing_settings_skip_client() {
        let client = optional_client(
            AuthProvider::Facebook,
            Err(AppError::InternalError("FACEBOOK_APP_ID must be set".to_string())),
            |_| Ok(StaticClient(AuthProvider::Facebook)),
        );
        assert!(client.is_none());
    }
}
