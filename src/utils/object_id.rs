//! ObjectId 변환 유틸리티

use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppError;

const INVALID_ID_MESSAGE: &str = "유효하지 않은 ID 형식입니다";

/// 24자리 hex 문자열을 `ObjectId`로 변환합니다. 실패 시 400입니다.
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id.trim())
        .map_err(|_| AppError::ValidationError(format!("{}: {}", INVALID_ID_MESSAGE, id)))
}

/// 모든 ID를 변환합니다. 하나라도 잘못되면 전체가 실패합니다.
pub fn parse_object_ids<S: AsRef<str>>(ids: &[S]) -> Result<Vec<ObjectId>, AppError> {
    ids.iter()
        .map(|id| parse_object_id(id.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        let id = parse_object_id("65f1c0a2b3d4e5f601234567").unwrap();
        assert_eq!(id.to_hex(), "65f1c0a2b3d4e5f601234567");

        let err = parse_object_id("not-an-id").unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_parse_object_ids_fails_on_any_invalid_entry() {
        let ok = parse_object_ids(&["65f1c0a2b3d4e5f601234567", "65f1c0a2b3d4e5f601234568"]).unwrap();
        assert_eq!(ok.len(), 2);

        assert!(parse_object_ids(&["65f1c0a2b3d4e5f601234567", "xyz"]).is_err());
        assert!(parse_object_ids::<&str>(&[]).unwrap().is_empty());
    }
}
