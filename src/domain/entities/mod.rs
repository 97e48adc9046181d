//! # Domain Entities
//!
//! 영속되는 도메인 객체들입니다.
//!
//! - [`users`] - MongoDB `users` 컬렉션의 사용자 레코드
//! - [`sessions`] - Redis에 저장되는 서버 측 세션 레코드

pub mod users;
pub mod sessions;

pub use users::*;
pub use sessions::*;
