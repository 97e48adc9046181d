//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 경계에서 주고받는 데이터 구조를 정의합니다.
//!
//! | 모듈 | 역할 |
//! |------|------|
//! | [`users`] | 로그인/회원가입 폼, OAuth 콜백 쿼리, 현재 사용자 응답 |
//! | [`secrets`] | 시크릿 제출/삭제 폼, 시크릿 목록 뷰 데이터 |
//!
//! 요청 DTO는 `validator`로 검증하고, 응답 DTO는 엔티티에서 `From`으로 변환합니다.
//! 엔티티를 그대로 뷰에 넘기지 않는 것이 이 계층의 규칙입니다.

pub mod users;
pub mod secrets;

pub use users::*;
pub use secrets::*;
