//! 라우트 설정 모듈
//!
//! 화면 라우트를 기능별로 묶어 등록합니다.
//!
//! | 경로 | 게이트 |
//! |------|--------|
//! | `/`, `/about`, `/contact` | 없음 (익명이면 공개 화면) |
//! | `/secrets` | `AuthorizationGate::optional()` (익명이면 공개 화면) |
//! | `/login`, `/register`, `/logout` | 없음 |
//! | `/auth/google*`, `/auth/facebook*` | 없음 (OAuth 콜백 포함) |
//! | `/profile`, `/submit` | `AuthorizationGate::required()` |
//! | `/health` | 없음 |
//!
//! 게이트가 있는 스코프는 익명 요청을 핸들러와 저장소에 닿기 전에 `/login`으로 보냅니다.
//! 세션 해석은 앱 전체에 등록된 `SessionMiddleware`가 먼저 수행합니다.

use crate::core::AppContext;
use crate::handlers;
use crate::middlewares::AuthorizationGate;
use actix_web::{get, web, HttpResponse};
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_page_routes(cfg);
    configure_auth_routes(cfg);
    configure_secret_routes(cfg);
}

fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pages::home)
        .service(handlers::pages::about)
        .service(handlers::pages::contact);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::login_page)
        .service(handlers::auth::local_login)
        .service(handlers::auth::register_page)
        .service(handlers::auth::register)
        .service(handlers::auth::logout);

    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::google_login)
            .service(handlers::auth::google_callback)
            .service(handlers::auth::facebook_login)
            .service(handlers::auth::facebook_callback)
    );
}

fn configure_secret_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/secrets")
            .wrap(AuthorizationGate::optional())
            .service(handlers::secrets::list_secrets)
    );

    cfg.service(
        web::scope("/profile")
            .wrap(AuthorizationGate::required())
            .service(handlers::secrets::profile)
            .service(handlers::secrets::remove_secret)
    );

    cfg.service(
        web::scope("/submit")
            .wrap(AuthorizationGate::required())
            .service(handlers::secrets::submit_page)
            .service(handlers::secrets::submit_secret)
    );
}

#[get("/health")]
async fn health_check(ctx: web::Data<AppContext>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "secrets_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "stores": {
            "users": ctx.users.backend_name(),
            "sessions": ctx.sessions.backend_name()
        },
        "oauth": ctx.oauth.configured()
    }))
}
