//! 세션 미들웨어
//!
//! 모든 요청에 대해 세션 쿠키를 [`SessionManager`]로 해석하고,
//! 결과 [`SessionState`](crate::domain::models::auth::SessionState)를
//! request extension에 저장합니다. 핸들러는 추출자로 이 값을 읽습니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::session_inner::SessionMiddlewareService;
use crate::services::auth::SessionManager;

pub struct SessionMiddleware {
    session_manager: Arc<SessionManager>,
}

impl SessionMiddleware {
    pub fn new(session_manager: Arc<SessionManager>) -> Self {
        Self { session_manager }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
            session_manager: self.session_manager.clone(),
        }))
    }
}
