//! JWT 액세스 토큰 클레임

use serde::{Deserialize, Serialize};

/// 액세스 토큰의 클레임(Payload)
///
/// - `sub`: 토큰 주체 (사용자 이메일)
/// - `email`: 사용자 이메일 (권한 확인에 사용)
/// - `name`: 표시 이름 (선택)
/// - `iat` / `exp`: 발급/만료 시각 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub iat: i64,
    pub exp: i64,
}
