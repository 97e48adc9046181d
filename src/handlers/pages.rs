//! 정적 안내 페이지
//!
//! 인증 여부에 따라 다른 화면을 보여주는 것 외에는 상태가 없습니다.

use actix_web::{get, web, HttpResponse};
use serde_json::json;
use crate::core::{AppContext, AppError};
use crate::domain::models::auth::SessionState;
use crate::views::names;

#[get("/")]
pub async fn home(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    ctx.views.render(names::HOME, json!({}))
}

#[get("/about")]
pub async fn about(ctx: web::Data<AppContext>, session: SessionState) -> Result<HttpResponse, AppError> {
    let view = if session.is_authenticated() {
        names::ABOUT_AUTHENTICATED
    } else {
        names::ABOUT
    };
    ctx.views.render(view, json!({}))
}

#[get("/contact")]
pub async fn contact(ctx: web::Data<AppContext>, session: SessionState) -> Result<HttpResponse, AppError> {
    let view = if session.is_authenticated() {
        names::CONTACT_AUTHENTICATED
    } else {
        names::CONTACT
    };
    ctx.views.render(view, json!({}))
}
