//! # View 렌더링
//!
//! 핸들러는 화면 이름과 뷰 데이터만 정하고, 실제 표현은 [`ViewRenderer`]가 담당합니다.
//!
//! 기본 구현인 [`JsonViewRenderer`]는 다음 형태의 JSON을 돌려줍니다.
//!
//! ```json
//! { "view": "usersecrets", "data": { "usersWithSecrets": [ { "secrets": ["..."] } ] } }
//! ```
//!
//! 템플릿 엔진을 붙이려면 같은 트레이트를 구현하여
//! [`AppContext`](crate::core::AppContext)에 주입하면 됩니다.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::{json, Value};
use crate::core::{AppError, AppResult};

/// 화면 이름
pub mod names {
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about";
    pub const ABOUT_AUTHENTICATED: &str = "about2";
    pub const CONTACT: &str = "contact";
    pub const CONTACT_AUTHENTICATED: &str = "contact2";
    pub const LOGIN: &str = "login";
    pub const REGISTER: &str = "register";
    pub const SECRETS: &str = "secrets";
    pub const USER_SECRETS: &str = "usersecrets";
    pub const PROFILE: &str = "profile";
    pub const SUBMIT: &str = "submit";
}

pub trait ViewRenderer: Send + Sync {
    fn render_with_status(&self, status: StatusCode, view: &str, data: Value) -> AppResult<HttpResponse>;

    fn render(&self, view: &str, data: Value) -> AppResult<HttpResponse> {
        self.render_with_status(StatusCode::OK, view, data)
    }
}

/// 직렬화 가능한 뷰 데이터를 `serde_json::Value`로 바꿉니다.
pub fn view_data<T: Serialize>(data: &T) -> AppResult<Value> {
    serde_json::to_value(data)
        .map_err(|e| AppError::InternalError(format!("뷰 데이터 직렬화 실패: {}", e)))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonViewRenderer;

impl ViewRenderer for JsonViewRenderer {
    fn render_with_status(&self, status: StatusCode, view: &str, data: Value) -> AppResult<HttpResponse> {
        Ok(HttpResponse::build(status).json(json!({
            "view": view,
            "data": data,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_json_renderer_wraps_view_and_data() {
        let response = JsonViewRenderer
            .render(names::HOME, json!({ "greeting": "hi" }))
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body()).await.unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["view"], "home");
        assert_eq!(value["data"]["greeting"], "hi");
    }

    #[test]
    fn test_render_with_status() {
        let response = JsonViewRenderer
            .render_with_status(StatusCode::UNAUTHORIZED, names::LOGIN, Value::Null)
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
