//! 시크릿 서비스 모듈
//!
//! 인증된 사용자 본인의 시크릿 목록만 변경합니다.

pub mod secret_service;

pub use secret_service::*;
