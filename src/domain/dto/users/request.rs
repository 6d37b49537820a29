//! 사용자 등록 요청 DTO

use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::users::user::User;
use crate::utils::string_utils::{deserialize_optional_string, normalize_email};

/// `POST /users` 요청 본문
///
/// 외부 인증 제공자로 로그인한 사용자를 처음 등록할 때 사용합니다.
/// `role`은 받지 않습니다. 관리자 승격은 별도 엔드포인트로만 가능합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 100, message = "이름은 100자 이하여야 합니다"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(url(message = "유효한 이미지 URL이 아닙니다"))]
    pub photo_url: Option<String>,
}

impl CreateUserRequest {
    pub fn into_entity(self) -> User {
        User::new(normalize_email(&self.email), self.name, self.photo_url)
    }
}
