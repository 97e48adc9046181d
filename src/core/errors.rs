//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 시크릿 서비스 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 응답 정책
//!
//! | 에러 | 응답 |
//! |------|------|
//! | `InvalidCredentials` | 401, 일반화된 메시지 |
//! | `UsernameTaken` | 303 → `/register` |
//! | `OAuthFailure`, `Unauthorized` | 303 → `/login` |
//! | `StoreError`, `SessionStoreError`, `InternalError` | 500, 내부 정보 비노출 |
//! | `ValidationError` | 400 |
//! | `NotFound` | 404 |
//!
//! 어떤 에러도 자동으로 재시도되지 않습니다. 모든 실패는 해당 요청에서 종결됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::AppError;
//!
//! async fn submit(store: &dyn UserStore, id: &str, text: &str) -> Result<(), AppError> {
//!     if text.trim().is_empty() {
//!         return Err(AppError::ValidationError("시크릿 내용이 비어 있습니다".to_string()));
//!     }
//!     store.append_secret(id, text).await
//! }
//! ```

use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use thiserror::Error;

/// 로컬 로그인 실패 시 사용자에게 보여주는 유일한 메시지
///
/// 존재하지 않는 사용자와 잘못된 비밀번호를 구분하지 않습니다.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect email or password.";

/// 저장소 장애 등 내부 오류 시 사용자에게 보여주는 메시지
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// 애플리케이션 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 알 수 없는 사용자 또는 비밀번호 불일치
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// 회원가입 시 이미 존재하는 사용자명
    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    /// 사용자 저장소(MongoDB 또는 메모리) I/O 실패 및 타임아웃
    #[error("Store error: {0}")]
    StoreError(String),

    /// 세션 저장소(Redis 또는 메모리) I/O 실패
    #[error("Session store error: {0}")]
    SessionStoreError(String),

    /// OAuth 핸드셰이크, state 검증, 프로바이더 API 실패
    #[error("OAuth failure: {0}")]
    OAuthFailure(String),

    /// 인증된 세션 없이 보호된 동작을 시도함
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 리다이렉트로 처리되는 에러의 대상 경로
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            AppError::UsernameTaken(_) => Some("/register"),
            AppError::OAuthFailure(_) | AppError::Unauthorized => Some("/login"),
            _ => None,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::UsernameTaken(_) | AppError::OAuthFailure(_) | AppError::Unauthorized => {
                StatusCode::SEE_OTHER
            }
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StoreError(_)
            | AppError::SessionStoreError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Some(location) = self.redirect_target() {
            log::debug!("{} → {} 로 리다이렉트", self, location);
            return HttpResponse::SeeOther()
                .insert_header((header::LOCATION, location))
                .finish();
        }

        let message = match self {
            AppError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
            AppError::StoreError(_)
            | AppError::SessionStoreError(_)
            | AppError::InternalError(_) => {
                // 내부 상세 정보는 서버 로그에만 남깁니다
                log::error!("요청 처리 실패: {}", self);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": message
        }))
    }
}

/// 애플리케이션 결과 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    fn location(response: &HttpResponse) -> Option<&str> {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("secret is empty".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_username_taken_redirects_to_register() {
        let response = AppError::UsernameTaken("alice@example.com".to_string()).error_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), Some("/register"));
    }

    #[test]
    fn test_oauth_failure_and_unauthorized_redirect_to_login() {
        for error in [AppError::OAuthFailure("state mismatch".to_string()), AppError::Unauthorized] {
            let response = error.error_response();
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(location(&response), Some("/login"));
        }
    }

    #[actix_web::test]
    async fn test_invalid_credentials_uses_generic_message() {
        let response = AppError::InvalidCredentials.error_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], INVALID_CREDENTIALS_MESSAGE);
    }

    #[actix_web::test]
    async fn test_store_error_hides_internal_details() {
        let error = AppError::StoreError("connection refused at 10.0.0.7:27017".to_string());
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains(GENERIC_FAILURE_MESSAGE));
        assert!(!text.contains("10.0.0.7"));
    }
}
