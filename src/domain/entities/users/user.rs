//! User Entity Implementation
//!
//! 스토어 사용자 문서입니다. 인증은 외부 제공자(Firebase 등)가 담당하고,
//! 이 서비스는 프로필과 역할만 보관합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::config::ADMIN_ROLE;

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 표시 이름
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 프로필 이미지 URL
    #[serde(rename = "photoUrl", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// 역할. `"admin"`이면 관리자입니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl User {
    /// 역할이 없는 새 사용자
    pub fn new(email: String, name: Option<String>, photo_url: Option<String>) -> Self {
        Self {
            id: None,
            name,
            email,
            photo_url,
            role: None,
        }
    }

    /// 관리자 여부
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_is_admin_only_for_admin_role() {
        let mut user = User::new("a@b.com".to_string(), None, None);
        assert!(!user.is_admin());

        user.role = Some("editor".to_string());
        assert!(!user.is_admin());

        user.role = Some("admin".to_string());
        assert!(user.is_admin());
    }

    #[test]
    fn test_document_uses_camel_case_and_skips_empty_fields() {
        let user = User::new(
            "a@b.com".to_string(),
            Some("Mehan".to_string()),
            Some("https://img.example.com/a.png".to_string()),
        );
        let document = bson::to_document(&user).unwrap();

        assert_eq!(document.get_str("photoUrl").unwrap(), "https://img.example.com/a.png");
        assert!(!document.contains_key("_id"));
        assert!(!document.contains_key("role"));
    }
}
