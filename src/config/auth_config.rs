//! # Authentication Configuration
//!
//! 액세스 토큰 서명/만료 설정을 관리합니다.
//!
//! ```bash
//! export ACCESS_TOKEN_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```

use std::env;
use super::data_config::parse_or;

/// 관리자 역할 이름 (`users.role`)
pub const ADMIN_ROLE: &str = "admin";

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// HMAC 서명 비밀키를 반환합니다.
    ///
    /// `ACCESS_TOKEN_SECRET`을 우선 사용하고, 없으면 `JWT_SECRET`을 확인합니다.
    /// 둘 다 없으면 개발용 기본값을 사용하며 경고를 남깁니다.
    pub fn secret() -> String {
        env::var("ACCESS_TOKEN_SECRET")
            .or_else(|_| env::var("JWT_SECRET"))
            .unwrap_or_else(|_| {
                log::warn!("ACCESS_TOKEN_SECRET not set, using default (not secure for production!)");
                "dev-access-token-secret".to_string()
            })
    }

    /// 액세스 토큰 유효 시간 (`JWT_EXPIRATION_HOURS`, 기본값 24)
    pub fn expiration_hours() -> i64 {
        parse_or(env::var("JWT_EXPIRATION_HOURS").ok(), 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expiration_is_one_day() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
    }

    #[test]
    fn test_secret_is_never_empty() {
        assert!(!JwtConfig::secret().is_empty());
    }
}
