use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::{authorize, GateDecision, GatePolicy, SessionState};

pub struct AuthorizationGateService<S> {
    pub service: Rc<S>,
    pub policy: GatePolicy,
}

impl<S, B> Service<ServiceRequest> for AuthorizationGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let policy = self.policy;

        Box::pin(async move {
            let decision = match req.extensions().get::<SessionState>() {
                Some(state) => authorize(state, policy),
                None => authorize(&SessionState::Anonymous, policy),
            };

            if decision == GateDecision::RedirectToLogin {
                log::info!("인증 필요: {} {} → /login", req.method(), req.path());
                let response = HttpResponse::SeeOther()
                    .insert_header((header::LOCATION, "/login"))
                    .finish();
                let (req, _) = req.into_parts();
                return Ok(ServiceResponse::new(req, response).map_into_right_body());
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
