use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use crate::core::AppError;
use crate::domain::entities::sessions::AuthMethod;
use crate::domain::entities::users::User;

/// 세션으로 확인된 현재 사용자
///
/// `user`는 이번 요청에서 저장소로부터 새로 읽은 레코드입니다.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: String,
    pub session_id: String,
    pub auth_method: AuthMethod,
    pub user: User,
}

/// 요청 하나의 세션 분류 결과
///
/// 세션 미들웨어가 모든 요청에 대해 라우트 로직보다 먼저 결정하여
/// Request Extensions에 저장합니다. 중간 상태는 없습니다.
#[derive(Debug, Clone)]
pub enum SessionState {
    Authenticated(CurrentUser),
    Anonymous,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous => None,
        }
    }

    pub fn into_current_user(self) -> Option<CurrentUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous => None,
        }
    }
}

/// 요청의 세션 상태를 읽습니다. 미들웨어가 없으면 익명으로 취급합니다.
fn session_state(req: &HttpRequest) -> SessionState {
    req.extensions()
        .get::<SessionState>()
        .cloned()
        .unwrap_or(SessionState::Anonymous)
}

impl FromRequest for SessionState {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(session_state(req)))
    }
}

/// 인증 필수 추출자
///
/// 익명 요청이면 `AppError::Unauthorized`로 실패하고, 이는 `/login` 리다이렉트가 됩니다.
impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match session_state(req) {
            SessionState::Authenticated(user) => ready(Ok(user)),
            SessionState::Anonymous => ready(Err(AppError::Unauthorized.into())),
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<CurrentUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(OptionalUser(session_state(req).into_current_user())))
    }
}
