//! HTTP 핸들러 모듈
//!
//! | 모듈 | 경로 |
//! |------|------|
//! | [`pages`] | `/`, `/about`, `/contact` |
//! | [`auth`] | `/login`, `/register`, `/logout`, `/auth/google*`, `/auth/facebook*` |
//! | [`secrets`] | `/secrets`, `/profile`, `/submit` |
//!
//! 핸들러는 `web::Data<AppContext>`에서 서비스를 꺼내 쓰고,
//! 세션 상태는 `SessionState`/`CurrentUser` 추출자로 받습니다.

use actix_web::http::header;
use actix_web::{HttpResponse, HttpResponseBuilder};

pub mod pages;
pub mod auth;
pub mod secrets;

/// 303 See Other 응답 빌더
pub(crate) fn see_other(location: &str) -> HttpResponseBuilder {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((header::LOCATION, location));
    builder
}
