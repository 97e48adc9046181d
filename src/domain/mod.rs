//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 객체 (User, SessionRecord)
//! ├── dto       - 폼 입력과 뷰 데이터
//! └── models    - 인증 증명, 세션 상태, OAuth 응답
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, caching)
//! ```
//!
//! 엔티티는 저장소 계층에서만 직접 다루고, 화면으로 나가는 데이터는
//! 항상 `dto`의 뷰 타입을 거칩니다.

pub mod entities;
pub mod dto;
pub mod models;

