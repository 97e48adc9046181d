use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::core::AppResult;
use crate::domain::models::auth::SessionState;
use crate::services::auth::SessionManager;

pub struct SessionMiddlewareService<S> {
    pub service: Rc<S>,
    pub session_manager: Arc<SessionManager>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
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
        let session_manager = self.session_manager.clone();

        Box::pin(async move {
            let session_id = req
                .cookie(session_manager.cookie_name())
                .map(|cookie| cookie.value().to_string())
                .filter(|value| !value.is_empty());

            let state = match resolve_state(&session_manager, session_id.as_deref()).await {
                Ok(state) => state,
                Err(err) => {
                    // 세션 저장소 장애는 익명으로 강등하지 않고 요청을 실패시킵니다
                    log::error!("세션 해석 실패: {}", err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            };

            let stale_cookie = session_id.is_some() && !state.is_authenticated();
            if let SessionState::Authenticated(user) = &state {
                log::debug!("세션 확인: 사용자 ID {}", user.user_id);
            }

            // SessionState를 Request Extensions에 저장
            req.extensions_mut().insert(state);

            let mut res = service.call(req).await?;

            if stale_cookie {
                let cookie_name = session_manager.cookie_name();
                let already_set = res.response().cookies().any(|c| c.name() == cookie_name);
                if !already_set {
                    log::debug!("만료되었거나 알 수 없는 세션 쿠키 삭제");
                    if let Err(e) = res.response_mut().add_cookie(&session_manager.removal_cookie()) {
                        log::warn!("세션 쿠키 삭제 헤더 설정 실패: {}", e);
                    }
                }
            }

            Ok(res.map_into_left_body())
        })
    }
}

async fn resolve_state(session_manager: &SessionManager, session_id: Option<&str>) -> AppResult<SessionState> {
    match session_id {
        Some(session_id) => session_manager.resolve(session_id).await,
        None => Ok(SessionState::Anonymous),
    }
}
