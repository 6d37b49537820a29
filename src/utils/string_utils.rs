//! 문자열 처리 유틸리티
//!
//! 요청 DTO의 serde 훅과 validator 커스텀 함수에서 사용합니다.

use serde::Deserialize;
use validator::ValidationError;

/// 빈 문자열은 `None`으로 취급합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 이메일 비교용 정규화 (앞뒤 공백 제거, 소문자)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 두 이메일이 같은 계정을 가리키는지 확인합니다.
pub fn same_email(a: &str, b: &str) -> bool {
    normalize_email(a) == normalize_email(b)
}

/// validator 커스텀 함수: 공백만 있는 값 거부
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("값이 비어 있습니다".into()));
    }
    Ok(())
}

/// serde 훅: 선택 문자열 정리
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// serde 훅: 필수 문자열 앞뒤 공백 제거
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  Mehan ".to_string())), Some("Mehan".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_same_email_ignores_case_and_whitespace() {
        assert!(same_email("Buyer@Example.com ", "buyer@example.com"));
        assert!(!same_email("buyer@example.com", "seller@example.com"));
    }

    #[test]
    fn test_deserialize_hooks() {
        #[derive(Deserialize)]
        struct Listing {
            #[serde(deserialize_with = "deserialize_trimmed_string")]
            brand: String,
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            name: Option<String>,
        }

        let listing: Listing = serde_json::from_str(r#"{"brand":"  Asus ","name":"  "}"#).unwrap();
        assert_eq!(listing.brand, "Asus");
        assert_eq!(listing.name, None);

        let listing: Listing = serde_json::from_str(r#"{"brand":"Dell"}"#).unwrap();
        assert_eq!(listing.name, None);
    }
}
