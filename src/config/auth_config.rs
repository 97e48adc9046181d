//! # Authentication Configuration Module
//!
//! OAuth 프로바이더(Google, Facebook)와 OAuth state 보안 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### Google OAuth 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! ```
//!
//! ### Facebook OAuth 설정
//! ```bash
//! export FACEBOOK_APP_ID="your-facebook-app-id"
//! export FACEBOOK_APP_SECRET="your-facebook-app-secret"
//! ```
//!
//! ### 공통 설정
//! ```bash
//! export OAUTH_CALLBACK_BASE_URL="https://secrets.example.com"
//! export OAUTH_STATE_SECRET="your-oauth-state-secret"
//! export OAUTH_STATE_TTL_SECONDS="600"
//! ```
//!
//! 콜백 경로는 고정입니다: `/auth/google/secrets`, `/auth/facebook/secrets`.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{AuthProvider, GoogleOAuthConfig};
//! use crate::services::auth::{GoogleAuthService, OAuthClient};
//!
//! let settings = GoogleOAuthConfig::settings()?;
//! let client = GoogleAuthService::new(settings)?;
//! assert_eq!(client.provider(), AuthProvider::Google);
//! ```

use std::env;
use crate::config::Environment;
use crate::core::{AppError, AppResult};

/// OAuth 클라이언트 하나를 구성하는 값 묶음
///
/// 환경 변수에서 한 번 읽어 서비스 생성 시 주입합니다.
#[derive(Debug, Clone)]
pub struct OAuthClientSettings {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub profile_uri: String,
}

/// 필수 환경 변수를 읽습니다. 비어 있으면 설정 오류로 처리합니다.
fn required_var(name: &str) -> AppResult<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::InternalError(format!("{} must be set", name))),
    }
}

/// Google OAuth 2.0 설정
///
/// 요청 스코프는 `profile` 하나이며, 사용자 식별자는
/// OpenID userinfo v3 엔드포인트의 `sub` 값을 사용합니다.
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    pub fn client_id() -> AppResult<String> {
        required_var("GOOGLE_CLIENT_ID")
    }

    pub fn client_secret() -> AppResult<String> {
        required_var("GOOGLE_CLIENT_SECRET")
    }

    /// 콜백 URI: `{OAUTH_CALLBACK_BASE_URL}/auth/google/secrets`
    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI")
            .unwrap_or_else(|_| format!("{}/auth/google/secrets", OAuthConfig::callback_base_url()))
    }

    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/v2/auth".to_string())
    }

    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }

    pub fn userinfo_uri() -> String {
        env::var("GOOGLE_USERINFO_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v3/userinfo".to_string())
    }

    /// 전체 설정을 한 번에 읽습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(OAuthClientSettings)` - 클라이언트 ID/시크릿이 모두 설정된 경우
    /// * `Err(AppError::InternalError)` - 필수 값이 누락된 경우
    pub fn settings() -> AppResult<OAuthClientSettings> {
        Ok(OAuthClientSettings {
            client_id: Self::client_id()?,
            client_secret: Self::client_secret()?,
            redirect_uri: Self::redirect_uri(),
            auth_uri: Self::auth_uri(),
            token_uri: Self::token_uri(),
            profile_uri: Self::userinfo_uri(),
        })
    }
}

/// Facebook Login 설정
///
/// Graph API 호출 시 `appsecret_proof`를 함께 보내므로
/// 앱 설정에서 "Require App Secret" 옵션을 켜도 동작합니다.
pub struct FacebookOAuthConfig;

impl FacebookOAuthConfig {
    pub fn app_id() -> AppResult<String> {
        required_var("FACEBOOK_APP_ID")
    }

    pub fn app_secret() -> AppResult<String> {
        required_var("FACEBOOK_APP_SECRET")
    }

    pub fn redirect_uri() -> String {
        env::var("FACEBOOK_REDIRECT_URI")
            .unwrap_or_else(|_| format!("{}/auth/facebook/secrets", OAuthConfig::callback_base_url()))
    }

    pub fn graph_version() -> String {
        env::var("FACEBOOK_GRAPH_VERSION").unwrap_or_else(|_| "v19.0".to_string())
    }

    pub fn auth_uri() -> String {
        env::var("FACEBOOK_AUTH_URI")
            .unwrap_or_else(|_| format!("https://www.facebook.com/{}/dialog/oauth", Self::graph_version()))
    }

    pub fn token_uri() -> String {
        env::var("FACEBOOK_TOKEN_URI").unwrap_or_else(|_| {
            format!("https://graph.facebook.com/{}/oauth/access_token", Self::graph_version())
        })
    }

    pub fn profile_uri() -> String {
        env::var("FACEBOOK_PROFILE_URI")
            .unwrap_or_else(|_| format!("https://graph.facebook.com/{}/me", Self::graph_version()))
    }

    pub fn settings() -> AppResult<OAuthClientSettings> {
        Ok(OAuthClientSettings {
            client_id: Self::app_id()?,
            client_secret: Self::app_secret()?,
            redirect_uri: Self::redirect_uri(),
            auth_uri: Self::auth_uri(),
            token_uri: Self::token_uri(),
            profile_uri: Self::profile_uri(),
        })
    }
}

/// OAuth 공통 설정
///
/// OAuth 2.0의 state 매개변수는 CSRF 공격을 방지하기 위한 보안 기능입니다.
/// 인증 요청 시 서명된 state를 발급하고, 콜백에서 서명·만료·쿠키 일치를 검증합니다.
pub struct OAuthConfig;

impl OAuthConfig {
    /// 콜백 URL의 기준 주소 (끝의 `/`는 제거됨)
    pub fn callback_base_url() -> String {
        env::var("OAUTH_CALLBACK_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// OAuth state 서명용 비밀키
    ///
    /// 운영 환경에서는 `OAUTH_STATE_SECRET`이 필수이며, 없으면 시작을 거부합니다.
    /// 그 외 환경에서는 기본값을 사용하고 경고 로그를 남깁니다.
    pub fn state_secret() -> AppResult<String> {
        Self::state_secret_for(env::var("OAUTH_STATE_SECRET").ok(), &Environment::current())
    }

    pub fn state_secret_for(configured: Option<String>, environment: &Environment) -> AppResult<String> {
        match configured.filter(|secret| !secret.trim().is_empty()) {
            Some(secret) => Ok(secret),
            None if environment.is_production() => Err(AppError::InternalError(
                "OAUTH_STATE_SECRET must be set in production".to_string(),
            )),
            None => {
                log::warn!("OAUTH_STATE_SECRET not set, using development default");
                Ok("oauth-state-secret".to_string())
            }
        }
    }

    /// 발급된 state의 유효 시간 (초)
    pub fn state_ttl_seconds() -> i64 {
        env::var("OAUTH_STATE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|ttl: &i64| *ttl > 0)
            .unwrap_or(600)
    }
}

/// 지원하는 OAuth 프로바이더
///
/// 사용자 레코드의 `provider_ids` 하위 필드 이름으로도 사용됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Google,
    Facebook,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Google => "google",
            AuthProvider::Facebook => "facebook",
        }
    }
}

impl std::fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
