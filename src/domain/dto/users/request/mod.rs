//! # 사용자 인증 요청 DTO 모듈
//!
//! 로그인·회원가입 폼과 OAuth 콜백 쿼리를 구조화된 Rust 타입으로 변환하고
//! `validator`로 검증합니다. 폼은 `application/x-www-form-urlencoded`로 전달됩니다.
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며,
//! `AppError::ValidationError`(HTTP 400)로 변환됩니다.

pub mod auth_request;

pub use auth_request::{CredentialsForm, OAuthCallbackQuery};
