//! 사용자 도메인 DTO

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
