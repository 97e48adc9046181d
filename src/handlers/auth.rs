//! 인증 핸들러
//!
//! 로컬 로그인/회원가입, 로그아웃, Google/Facebook OAuth 흐름을 처리합니다.
//! 로그인에 성공하면 기존 세션을 무효화하고 새 세션 쿠키를 발급한 뒤 `/secrets`로 보냅니다.

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::config::AuthProvider;
use crate::core::{AppContext, AppError, AppResult, INVALID_CREDENTIALS_MESSAGE};
use crate::domain::dto::users::{CredentialsForm, OAuthCallbackQuery};
use crate::domain::entities::sessions::AuthMethod;
use crate::domain::entities::users::User;
use crate::domain::models::auth::{AuthProof, SessionState};
use crate::handlers::see_other;
use crate::services::auth::OAUTH_STATE_COOKIE;
use crate::views::names;

/// 새 세션을 발급하고 `/secrets`로 보냅니다.
///
/// 요청에 이미 세션이 있었다면 먼저 무효화하여 세션 고정을 막습니다.
async fn sign_in(
    ctx: &AppContext,
    previous: &SessionState,
    user: &User,
    auth_method: AuthMethod,
) -> AppResult<HttpResponse> {
    if let Some(current) = previous.current_user() {
        ctx.session_manager.invalidate(&current.session_id).await?;
    }

    let ticket = ctx.session_manager.establish(user, auth_method).await?;
    let cookie = ctx.session_manager.build_cookie(&ticket);

    Ok(see_other("/secrets").cookie(cookie).finish())
}

fn login_failed(ctx: &AppContext) -> AppResult<HttpResponse> {
    ctx.views.render_with_status(
        StatusCode::UNAUTHORIZED,
        names::LOGIN,
        json!({ "error": INVALID_CREDENTIALS_MESSAGE }),
    )
}

#[get("/login")]
pub async fn login_page(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    ctx.views.render(names::LOGIN, json!({}))
}

#[post("/login")]
pub async fn local_login(
    ctx: web::Data<AppContext>,
    session: SessionState,
    form: web::Form<CredentialsForm>,
) -> Result<HttpResponse, AppError> {
    // 빈 입력도 일반 로그인 실패와 같은 응답
    if form.validate().is_err() {
        return login_failed(&ctx);
    }

    let proof = AuthProof::Local {
        username: form.normalized_username(),
        password: form.password.clone(),
    };

    match ctx.identity.resolve(proof).await {
        Ok(user) => sign_in(&ctx, &session, &user, AuthMethod::Local).await,
        Err(AppError::InvalidCredentials) => login_failed(&ctx),
        Err(e) => Err(e),
    }
}

#[get("/register")]
pub async fn register_page(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    ctx.views.render(names::REGISTER, json!({}))
}

/// 회원가입은 곧 로그인입니다. 성공 시 바로 세션을 수립합니다.
#[post("/register")]
pub async fn register(
    ctx: web::Data<AppContext>,
    session: SessionState,
    form: web::Form<CredentialsForm>,
) -> Result<HttpResponse, AppError> {
    form.validate()?;

    let user = ctx
        .identity
        .register(&form.normalized_username(), &form.password)
        .await?;

    sign_in(&ctx, &session, &user, AuthMethod::Local).await
}

#[get("/logout")]
pub async fn logout(ctx: web::Data<AppContext>, session: SessionState) -> Result<HttpResponse, AppError> {
    if let Some(current) = session.current_user() {
        ctx.session_manager.invalidate(&current.session_id).await?;
        log::info!("로그아웃 - user_id: {}", current.user_id);
    }

    Ok(see_other("/").cookie(ctx.session_manager.removal_cookie()).finish())
}

/// OAuth 동의 화면으로 보내고, 같은 state를 단기 쿠키에 심습니다.
fn begin_oauth(ctx: &AppContext, provider: AuthProvider) -> AppResult<HttpResponse> {
    let client = ctx.oauth.get(provider)?;
    let state = ctx.state_signer.issue()?;

    let state_cookie = Cookie::build(OAUTH_STATE_COOKIE, state.clone())
        .path("/auth")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(ctx.session_manager.config().secure_cookie)
        .max_age(CookieDuration::seconds(ctx.state_signer.ttl_seconds()))
        .finish();

    log::debug!("{} OAuth 시작", provider);
    Ok(see_other(&client.authorize_url(&state)).cookie(state_cookie).finish())
}

/// OAuth 콜백: state 검증 → 코드 교환 → find-or-create → 세션 수립
async fn complete_oauth(
    ctx: &AppContext,
    req: &HttpRequest,
    session: &SessionState,
    query: &OAuthCallbackQuery,
    provider: AuthProvider,
) -> AppResult<HttpResponse> {
    if let Some(error) = &query.error {
        let description = query.error_description.as_deref().unwrap_or("no description");
        log::warn!("{} OAuth 에러: {} - {}", provider, error, description);
        return Err(AppError::OAuthFailure(format!("{} returned error {}", provider, error)));
    }

    let cookie_state = req.cookie(OAUTH_STATE_COOKIE).map(|c| c.value().to_string());
    ctx.state_signer
        .verify(query.state.as_deref().unwrap_or_default(), cookie_state.as_deref())?;

    let code = query
        .code
        .as_deref()
        .filter(|code| !code.is_empty())
        .ok_or_else(|| AppError::OAuthFailure(format!("{} callback without code", provider)))?;

    let client = ctx.oauth.get(provider)?;
    let subject_id = client.fetch_subject(code).await?;
    let user = ctx
        .identity
        .resolve(AuthProof::OAuth { provider, subject_id })
        .await?;

    let mut response = sign_in(ctx, session, &user, provider.into()).await?;

    let mut expired_state = Cookie::build(OAUTH_STATE_COOKIE, "").path("/auth").finish();
    expired_state.make_removal();
    if let Err(e) = response.add_cookie(&expired_state) {
        log::warn!("state 쿠키 삭제 실패: {}", e);
    }

    Ok(response)
}

#[get("/google")]
pub async fn google_login(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    begin_oauth(&ctx, AuthProvider::Google)
}

#[get("/google/secrets")]
pub async fn google_callback(
    ctx: web::Data<AppContext>,
    req: HttpRequest,
    session: SessionState,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    complete_oauth(&ctx, &req, &session, &query, AuthProvider::Google).await
}

#[get("/facebook")]
pub async fn facebook_login(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    begin_oauth(&ctx, AuthProvider::Facebook)
}

#[get("/facebook/secrets")]
pub async fn facebook_callback(
    ctx: web::Data<AppContext>,
    req: HttpRequest,
    session: SessionState,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    complete_oauth(&ctx, &req, &session, &query, AuthProvider::Facebook).await
}
