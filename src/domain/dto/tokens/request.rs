use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

/// `POST /jwt` 요청 본문
///
/// 클라이언트는 외부 인증을 마친 사용자의 이메일과 이름을 보냅니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
}
