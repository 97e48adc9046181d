//! # Core Module
//!
//! 애플리케이션 전역에서 쓰는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현 (리다이렉트 또는 JSON 에러)
//! - **자동 변환**: thiserror 기반, `validator` 에러 변환
//!
//! ### [`context`] - 의존성 조립
//! - **AppContext**: 저장소와 서비스를 생성 시 주입받아 보관
//! - `web::Data<AppContext>`로 모든 워커가 공유
//!
//! | 관심사 | 위치 |
//! |--------|------|
//! | 에러 → HTTP 응답 | `AppError::error_response()` |
//! | 저장소 선택 | `AppContext::from_env()` |
//! | 테스트 대역 주입 | `AppContext::builder()` |

pub mod errors;
pub mod context;

pub use errors::*;
pub use context::{AppContext, AppContextBuilder};
