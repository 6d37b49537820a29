//! JWT 액세스 토큰 서비스
//!
//! HS256으로 서명한 액세스 토큰을 발급하고 검증합니다.
//! 서명 키와 만료 시간은 [`JwtConfig`]에서 읽습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;
use crate::{
    config::JwtConfig,
    core::errors::AppError,
    domain::dto::tokens::{TokenRequest, TokenResponse},
    domain::models::token::TokenClaims,
    utils::string_utils::normalize_email,
};

#[service(name = "token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// `POST /jwt` 요청으로 토큰을 발급합니다.
    pub fn issue_token(&self, request: &TokenRequest) -> Result<TokenResponse, AppError> {
        let claims = build_claims(
            &request.email,
            request.name.clone(),
            JwtConfig::expiration_hours(),
        );
        let token = sign_claims(&claims, &JwtConfig::secret())?;

        log::info!("액세스 토큰 발급: {}", claims.email);
        Ok(TokenResponse { token })
    }

    /// 서명과 만료를 확인합니다. 실패는 모두 401입니다.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode_claims(token, &JwtConfig::secret())
    }
}

/// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
///
/// 스킴은 대소문자를 구분하지 않으며, 토큰이 비어 있으면 `None`입니다.
pub fn extract_bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.trim().split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("Bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

fn build_claims(email: &str, name: Option<String>, expiration_hours: i64) -> TokenClaims {
    let now = Utc::now();
    let expiration = now + Duration::hours(expiration_hours);
    let email = normalize_email(email);

    TokenClaims {
        sub: email.clone(),
        email,
        name,
        iat: now.timestamp(),
        exp: expiration.timestamp(),
    }
}

fn sign_claims(claims: &TokenClaims, secret: &str) -> Result<String, AppError> {
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());

    encode(&Header::new(Algorithm::HS256), claims, &encoding_key)
        .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
}

fn decode_claims(token: &str, secret: &str) -> Result<TokenClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::new(Algorithm::HS256);

    decode::<TokenClaims>(token, &decoding_key, &validation)
        .map(|token_data| token_data.claims)
        .map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => log::debug!("만료된 토큰"),
                _ => log::warn!("토큰 검증 실패: {}", e),
            }
            AppError::unauthorized()
        })
}
