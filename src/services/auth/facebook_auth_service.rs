//! # Facebook Login 서비스
//!
//! Facebook Login(OAuth 2.0)으로 앱 범위 사용자 ID를 얻습니다.
//!
//! 1. `GET {token_uri}?client_id&client_secret&redirect_uri&code` 로 토큰 교환
//! 2. `GET {profile_uri}?fields=id,name&access_token&appsecret_proof` 로 프로필 조회
//!
//! `appsecret_proof`는 `HMAC-SHA256(app_secret, access_token)`의 16진수 표현입니다.

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use crate::config::{AuthProvider, OAuthClientSettings};
use crate::core::{AppError, AppResult};
use crate::domain::models::oauth::{FacebookUserInfo, OAuthTokenResponse};
use crate::services::auth::oauth_client::{ensure_success, http_client, url_with_query, OAuthClient};

pub struct FacebookAuthService {
    settings: OAuthClientSettings,
    http: reqwest::Client,
}

impl FacebookAuthService {
    pub fn new(settings: OAuthClientSettings) -> AppResult<Self> {
        Ok(Self {
            settings,
            http: http_client()?,
        })
    }

    fn appsecret_proof(&self, access_token: &str) -> AppResult<String> {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.settings.client_secret.as_bytes())
            .map_err(|e| AppError::InternalError(format!("HMAC 키 초기화 실패: {}", e)))?;
        mac.update(access_token.as_bytes());
        Ok(format!("{:x}", mac.finalize().into_bytes()))
    }

    async fn exchange_code_for_token(&self, auth_code: &str) -> AppResult<OAuthTokenResponse> {
        let params = [
            ("client_id", self.settings.client_id.as_str()),
            ("client_secret", self.settings.client_secret.as_str()),
            ("redirect_uri", self.settings.redirect_uri.as_str()),
            ("code", auth_code),
        ];

        let response = self
            .http
            .get(&self.settings.token_uri)
            .query(&params)
            .send()
            .await
            .map_err(|e| AppError::OAuthFailure(format!("Facebook 토큰 요청 실패: {}", e)))?;

        ensure_success(response, AuthProvider::Facebook, "token exchange")
            .await?
            .json::<OAuthTokenResponse>()
            .await
            .map_err(|e| AppError::OAuthFailure(format!("Facebook 토큰 응답 파싱 실패: {}", e)))
    }

    async fn get_user_info(&self, access_token: &str) -> AppResult<FacebookUserInfo> {
        let proof = self.appsecret_proof(access_token)?;
        let params = [
            ("fields", "id,name"),
            ("access_token", access_token),
            ("appsecret_proof", proof.as_str()),
        ];

        let response = self
            .http
            .get(&self.settings.profile_uri)
            .query(&params)
            .send()
            .await
            .map_err(|e| AppError::OAuthFailure(format!("Facebook 프로필 요청 실패: {}", e)))?;

        ensure_success(response, AuthProvider::Facebook, "profile")
            .await?
            .json::<FacebookUserInfo>()
            .await
            .map_err(|e| AppError::OAuthFailure(format!("Facebook 프로필 파싱 실패: {}", e)))
    }
}

#[async_trait]
impl OAuthClient for FacebookAuthService {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Facebook
    }

    fn authorize_url(&self, state: &str) -> String {
        url_with_query(
            &self.settings.auth_uri,
            &[
                ("client_id", self.settings.client_id.as_str()),
                ("redirect_uri", self.settings.redirect_uri.as_str()),
                ("response_type", "code"),
                ("state", state),
            ],
        )
    }

    async fn fetch_subject(&self, code: &str) -> AppResult<String> {
        let token = self.exchange_code_for_token(code).await?;
        let user_info = self.get_user_info(&token.access_token).await?;

        log::debug!("Facebook 사용자 정보 수신 - name: {:?}", user_info.name);
        Ok(user_info.id)
    }
}
