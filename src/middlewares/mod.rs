//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인에서 라우트 로직보다 먼저 실행되는 미들웨어들을 제공합니다.
//!
//! ```text
//! 요청 → SessionMiddleware (세션 → SessionState) → AuthorizationGate (정책) → 핸들러
//! ```
//!
//! # 제공 미들웨어
//!
//! ### 1. 세션 미들웨어 (SessionMiddleware)
//! - 세션 쿠키를 읽어 `SessionState`를 결정하고 request extension에 저장
//! - 만료되었거나 알 수 없는 세션 쿠키는 응답에서 삭제
//! - 앱 전체에 한 번 등록
//!
//! ### 2. 인가 게이트 (AuthorizationGate)
//! - `GatePolicy::Required` 라우트에서 익명 요청을 `/login`으로 리다이렉트
//! - 핸들러와 저장소에 도달하기 전에 차단
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::{AuthorizationGate, SessionMiddleware};
//!
//! App::new()
//!     .wrap(SessionMiddleware::new(ctx.session_manager.clone()))
//!     .service(
//!         web::resource("/submit")
//!             .wrap(AuthorizationGate::required())
//!             .route(web::post().to(submit_secret))
//!     )
//! ```

pub mod session_middleware;
mod session_inner;
pub mod authorization_gate;
mod gate_inner;

// 미들웨어 재export
pub use session_middleware::SessionMiddleware;
pub use authorization_gate::AuthorizationGate;
