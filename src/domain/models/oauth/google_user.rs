//! # Google OAuth 사용자 정보 모델
//!
//! OpenID Connect userinfo 엔드포인트
//! (`https://www.googleapis.com/oauth2/v3/userinfo`)의 응답입니다.
//! `profile` 스코프만 요청하므로 이메일 필드는 오지 않습니다.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 계정의 변하지 않는 고유 식별자
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}
