use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, name, email, photo_url, role } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            photo_url,
            role,
        }
    }
}

/// `GET /users/admin/{email}` 응답
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminStatusResponse {
    pub admin: bool,
}
