//! 시크릿 서비스 백엔드
//!
//! 로컬 계정과 Google/Facebook OAuth 로그인을 서버 측 세션 하나로 통합하고,
//! 로그인한 사용자가 짧은 텍스트 "시크릿"을 남기고 지울 수 있게 하는 웹 서비스입니다.
//!
//! # Features
//!
//! - **로컬 계정**: bcrypt 해시 기반 회원가입/로그인
//! - **OAuth 2.0**: Google, Facebook 로그인 (find-or-create)
//! - **서버 측 세션**: 불투명한 세션 쿠키 + Redis 세션 레코드
//! - **인가 게이트**: 보호된 경로의 익명 요청을 `/login`으로 리다이렉트
//! - **MongoDB**: 사용자 레코드와 시크릿 영구 저장
//! - **메모리 저장소**: 로컬 개발과 테스트용 대역
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 화면 라우트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Middlewares   │ ← 세션 해석 → 인가 게이트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 뷰 렌더링
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 인증, 세션, 시크릿
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / SessionStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소 (또는 메모리)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use secrets_service_backend::core::AppContext;
//! use secrets_service_backend::routes::configure_all_routes;
//! use secrets_service_backend::middlewares::SessionMiddleware;
//!
//! let ctx = web::Data::new(AppContext::from_env().await?);
//! App::new()
//!     .app_data(ctx.clone())
//!     .wrap(SessionMiddleware::new(ctx.session_manager.clone()))
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod views;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
