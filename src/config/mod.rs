//! # Configuration Module
//!
//! 환경 변수 기반 설정을 제공합니다.
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, 세션 쿠키 설정
//! - [`auth_config`] - Google/Facebook OAuth 및 OAuth state 설정
//!
//! `.env` 파일 로딩은 `main.rs`의 `load_env_file()`이 `PROFILE` 값에 따라 수행합니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
