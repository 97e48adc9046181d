//! 시크릿 핸들러
//!
//! `/secrets`는 누구나 볼 수 있고, `/profile`과 `/submit`은
//! `AuthorizationGate::required()` 아래에 등록되어 익명 요청이 여기까지 오지 않습니다.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::core::{AppContext, AppError};
use crate::domain::dto::secrets::{
    ProfileView, PublicSecretsView, RemoveSecretForm, SubmitSecretForm, UserSecretsView,
};
use crate::domain::dto::users::ViewerResponse;
use crate::domain::models::auth::{CurrentUser, OptionalUser};
use crate::handlers::see_other;
use crate::views::{names, view_data};

/// 시크릿 목록
///
/// 익명이면 `secrets`, 로그인했으면 `usersecrets` 화면입니다.
/// 어느 쪽이든 뷰 데이터에는 시크릿 본문만 들어갑니다.
#[get("")]
pub async fn list_secrets(ctx: web::Data<AppContext>, viewer: OptionalUser) -> Result<HttpResponse, AppError> {
    let users_with_secrets = ctx.secrets.list_secret_holders().await?;

    match viewer.0 {
        Some(current) => {
            let data = UserSecretsView {
                users_with_secrets,
                viewer: ViewerResponse::new(&current.user, current.auth_method),
            };
            ctx.views.render(names::USER_SECRETS, view_data(&data)?)
        }
        None => {
            let data = PublicSecretsView { users_with_secrets };
            ctx.views.render(names::SECRETS, view_data(&data)?)
        }
    }
}

/// 본인 시크릿 목록
#[get("")]
pub async fn profile(ctx: web::Data<AppContext>, current: CurrentUser) -> Result<HttpResponse, AppError> {
    let data = ProfileView {
        secrets: current.user.secrets.clone(),
        viewer: ViewerResponse::new(&current.user, current.auth_method),
    };
    ctx.views.render(names::PROFILE, view_data(&data)?)
}

/// 본인 시크릿 삭제 (일치하는 항목 모두)
#[post("")]
pub async fn remove_secret(
    ctx: web::Data<AppContext>,
    current: CurrentUser,
    form: web::Form<RemoveSecretForm>,
) -> Result<HttpResponse, AppError> {
    ctx.secrets.remove_secret(&current, &form.button).await?;
    Ok(see_other("/profile").finish())
}

#[get("")]
pub async fn submit_page(ctx: web::Data<AppContext>, current: CurrentUser) -> Result<HttpResponse, AppError> {
    let viewer = ViewerResponse::new(&current.user, current.auth_method);
    ctx.views.render(names::SUBMIT, serde_json::json!({ "viewer": view_data(&viewer)? }))
}

#[post("")]
pub async fn submit_secret(
    ctx: web::Data<AppContext>,
    current: CurrentUser,
    form: web::Form<SubmitSecretForm>,
) -> Result<HttpResponse, AppError> {
    form.validate()?;
    ctx.secrets.submit_secret(&current, &form.secret).await?;
    Ok(see_other("/secrets").finish())
}
