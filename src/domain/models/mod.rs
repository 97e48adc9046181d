//! # Domain Models
//!
//! 영속되지 않는 도메인 모델입니다.
//!
//! - [`auth`] - 인증 증명(`AuthProof`), 요청별 세션 상태, 인가 게이트 정책
//! - [`oauth`] - Google/Facebook API 응답 모델

pub mod auth;
pub mod oauth;

pub use auth::*;
pub use oauth::*;
