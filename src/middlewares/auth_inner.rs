//! AuthMiddleware의 요청 처리 로직
use std::rc::Rc;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::auth::{extract_bearer_token, TokenService};

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            match authenticate(&req) {
                Some(user) => {
                    log::debug!("인증 성공: {}", user.email);
                    req.extensions_mut().insert(user);
                }
                None => log::debug!("인증 정보 없음: {} {}", req.method(), req.path()),
            }

            service.call(req).await
        })
    }
}

/// 헤더가 없거나 토큰이 유효하지 않으면 `None`입니다.
fn authenticate(req: &ServiceRequest) -> Option<AuthenticatedUser> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = extract_bearer_token(header)?;

    TokenService::instance()
        .verify_token(token)
        .ok()
        .map(AuthenticatedUser::from)
}
