//! 관리자 추출자
//!
//! 토큰 확인 후 DB에 저장된 사용자 역할을 조회합니다.
//! 토큰이 없으면 401, 사용자가 없거나 관리자가 아니면 403입니다.

use actix_web::{FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use crate::core::errors::AppError;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::users::user_service::UserService;

/// 관리자 권한이 확인된 사용자
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthenticatedUser);

impl AdminUser {
    pub fn email(&self) -> &str {
        &self.0.email
    }
}

impl FromRequest for AdminUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut actix_web::dev::Payload) -> Self::Future {
        let authenticated = AuthenticatedUser::from_request(req, payload).into_inner();

        Box::pin(async move {
            let user = authenticated?;

            if UserService::instance().is_admin(&user.email).await? {
                Ok(AdminUser(user))
            } else {
                log::warn!("관리자 권한 없음: {}", user.email);
                Err(AppError::forbidden())
            }
        })
    }
}
