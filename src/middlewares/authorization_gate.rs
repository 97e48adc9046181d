//! 인가 게이트 미들웨어
//!
//! 라우트나 스코프 단위로 [`GatePolicy`]를 적용합니다.
//! 판단 자체는 [`authorize`](crate::domain::models::auth::authorize) 순수 함수가 하며,
//! 이 미들웨어는 그 결과를 리다이렉트 응답으로 바꿉니다.
//! [`SessionMiddleware`](crate::middlewares::SessionMiddleware)보다 안쪽에 등록되어야 합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::GatePolicy;
use crate::middlewares::gate_inner::AuthorizationGateService;

pub struct AuthorizationGate {
    policy: GatePolicy,
}

impl AuthorizationGate {
    pub fn new(policy: GatePolicy) -> Self {
        Self { policy }
    }

    /// 인증 필수 (익명 → `/login`)
    pub fn required() -> Self {
        Self::new(GatePolicy::Required)
    }

    /// 인증 선택 (익명도 통과, 핸들러가 화면을 고름)
    pub fn optional() -> Self {
        Self::new(GatePolicy::Optional)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthorizationGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthorizationGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthorizationGateService {
            service: Rc::new(service),
            policy: self.policy,
        }))
    }
}
