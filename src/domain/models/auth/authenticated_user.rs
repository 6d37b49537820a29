//! 인증된 사용자 추출자
//!
//! `AuthMiddleware`가 유효한 Bearer 토큰을 확인하면 요청 extensions에
//! [`AuthenticatedUser`]를 넣습니다. 핸들러 인자로 선언하면 토큰이 없거나
//! 유효하지 않은 요청은 401로 거절됩니다.

use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;
use crate::domain::models::token::TokenClaims;
use crate::utils::string_utils::same_email;

/// JWT 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedUser {
    pub email: String,
    pub name: Option<String>,
}

impl AuthenticatedUser {
    /// 요청 대상 이메일이 토큰 소유자와 같은지 확인합니다. 다르면 403입니다.
    pub fn ensure_owner(&self, email: &str) -> Result<(), AppError> {
        if same_email(&self.email, email) {
            Ok(())
        } else {
            log::warn!("소유권 불일치: token={}, target={}", self.email, email);
            Err(AppError::forbidden())
        }
    }
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            email: claims.email,
            name: claims.name,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::unauthorized())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_owner() {
        let user = AuthenticatedUser { email: "buyer@example.com".to_string(), name: None };

        assert!(user.ensure_owner("Buyer@Example.com").is_ok());
        assert!(matches!(
            user.ensure_owner("other@example.com"),
            Err(AppError::AuthorizationError(_))
        ));
    }
}
