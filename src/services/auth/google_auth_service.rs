//! # Google OAuth 2.0 인증 서비스
//!
//! Google OAuth 2.0 Authorization Code 흐름으로 사용자의 Google 계정 식별자를 얻습니다.
//!
//! ## OAuth 2.0 Authorization Code Flow
//!
//! ```text
//! ┌─────────────┐               ┌─────────────────┐               ┌─────────────────┐
//! │  브라우저    │               │   우리 서버      │               │  Google OAuth   │
//! └─────────────┘               └─────────────────┘               └─────────────────┘
//!        │ 1. GET /auth/google           │                                  │
//!        ├──────────────────────────────►│                                  │
//!        │ 2. 303 + oauth_state 쿠키      │                                  │
//!        │◄──────────────────────────────┤                                  │
//!        │ 3. 사용자 동의 (scope=profile)                                     │
//!        ├─────────────────────────────────────────────────────────────────►│
//!        │ 4. GET /auth/google/secrets?code=..&state=..                     │
//!        ├──────────────────────────────►│                                  │
//!        │                               │ 5. POST token_uri (code 교환)     │
//!        │                               ├─────────────────────────────────►│
//!        │                               │ 6. GET userinfo (Bearer)          │
//!        │                               ├─────────────────────────────────►│
//!        │                               │◄──────────── { "sub": ... } ─────┤
//!        │ 7. 303 /secrets + 세션 쿠키     │                                  │
//!        │◄──────────────────────────────┤                                  │
//! ```
//!
//! 사용자 식별에는 변하지 않는 `sub` 값만 사용합니다.

use async_trait::async_trait;
use crate::config::{AuthProvider, OAuthClientSettings};
use crate::core::{AppError, AppResult};
use crate::domain::models::oauth::{GoogleUserInfo, OAuthTokenResponse};
use crate::services::auth::oauth_client::{ensure_success, http_client, url_with_query, OAuthClient};

pub struct GoogleAuthService {
    settings: OAuthClientSettings,
    http: reqwest::Client,
}

impl GoogleAuthService {
    pub fn new(settings: OAuthClientSettings) -> AppResult<Self> {
        Ok(Self {
            settings,
            http: http_client()?,
        })
    }

    /// Authorization Code를 Access Token으로 교환합니다.
    ///
    /// ```text
    /// POST https://oauth2.googleapis.com/token
    /// Content-Type: application/x-www-form-urlencoded
    ///
    /// code=...&client_id=...&client_secret=...&redirect_uri=...&grant_type=authorization_code
    /// ```
    async fn exchange_code_for_token(&self, auth_code: &str) -> AppResult<OAuthTokenResponse> {
        let params = [
            ("code", auth_code),
            ("client_id", self.settings.client_id.as_str()),
            ("client_secret", self.settings.client_secret.as_str()),
            ("redirect_uri", self.settings.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http
            .post(&self.settings.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::OAuthFailure(format!("Google 토큰 요청 실패: {}", e)))?;

        ensure_success(response, AuthProvider::Google, "token exchange")
            .await?
            .json::<OAuthTokenResponse>()
            .await
            .map_err(|e| AppError::OAuthFailure(format!("Google 토큰 응답 파싱 실패: {}", e)))
    }

    /// Access Token으로 Google 사용자 정보를 조회합니다.
    async fn get_user_info(&self, access_token: &str) -> AppResult<GoogleUserInfo> {
        let response = self
            .http
            .get(&self.settings.profile_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::OAuthFailure(format!("Google 사용자 정보 요청 실패: {}", e)))?;

        ensure_success(response, AuthProvider::Google, "userinfo")
            .await?
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::OAuthFailure(format!("Google 사용자 정보 파싱 실패: {}", e)))
    }
}

#[async_trait]
impl OAuthClient for GoogleAuthService {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Google
    }

    /// Google 동의 화면 URL
    ///
    /// | 매개변수 | 값 |
    /// |----------|-----|
    /// | `scope` | `profile` |
    /// | `response_type` | `code` |
    /// | `state` | 서명된 CSRF 방지 값 |
    fn authorize_url(&self, state: &str) -> String {
        url_with_query(
            &self.settings.auth_uri,
            &[
                ("client_id", self.settings.client_id.as_str()),
                ("redirect_uri", self.settings.redirect_uri.as_str()),
                ("scope", "profile"),
                ("response_type", "code"),
                ("state", state),
            ],
        )
    }

    async fn fetch_subject(&self, code: &str) -> AppResult<String> {
        let token = self.exchange_code_for_token(code).await?;
        let user_info = self.get_user_info(&token.access_token).await?;

        log::debug!("Google 사용자 정보 수신 - name: {:?}", user_info.name);
        Ok(user_info.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> OAuthClientSettings {
        OAuthClientSettings {
            client_id: "google-client".to_string(),
            client_secret: "google-secret".to_string(),
            redirect_uri: "http://localhost:3000/auth/google/secrets".to_string(),
            auth_uri: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
            profile_uri: "https://www.googleapis.com/oauth2/v3/userinfo".to_string(),
        }
    }

    #[test]
    fn test_authorize_url_requests_profile_scope() {
        let service = GoogleAuthService::new(settings()).unwrap();
        let url = service.authorize_url("st.ate");

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("client_id=google-client"));
        assert!(url.contains("scope=profile&"));
        assert!(url.contains("state=st.ate"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fgoogle%2Fsecrets"));
        assert!(!url.contains("google-secret"));
    }
}
