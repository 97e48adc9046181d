//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성 시 저장소 트레이트 객체를 주입받으며,
//! [`AppContext`](crate::core::AppContext)가 한 번 조립하여 핸들러에 공유합니다.
//!
//! - [`auth`] - 비밀번호, 로그인 증명 해석, 세션, OAuth
//! - [`secrets`] - 사용자별 시크릿 관리

pub mod auth;
pub mod secrets;
