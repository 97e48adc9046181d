//! 세션 엔티티 모듈

pub mod session;

pub use session::{AuthMethod, SessionRecord};
