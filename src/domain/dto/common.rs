//! 쓰기 결과 및 공통 응답 DTO

use mongodb::bson::Bson;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::{Deserialize, Serialize};

/// `insertOne` 결과
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsertResultResponse {
    pub acknowledged: bool,
    pub inserted_id: Option<String>,
}

impl From<InsertOneResult> for InsertResultResponse {
    fn from(result: InsertOneResult) -> Self {
        Self {
            acknowledged: true,
            inserted_id: bson_id_to_string(&result.inserted_id),
        }
    }
}

/// `updateOne` 결과
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResultResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl From<UpdateResult> for UpdateResultResponse {
    fn from(result: UpdateResult) -> Self {
        Self {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        }
    }
}

/// `deleteOne` / `deleteMany` 결과
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResultResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteResultResponse {
    fn from(result: DeleteResult) -> Self {
        Self::deleted(result.deleted_count)
    }
}

impl DeleteResultResponse {
    pub fn deleted(count: u64) -> Self {
        Self { acknowledged: true, deleted_count: count }
    }
}

/// 이미 존재하는 리소스에 대한 안내 응답
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlreadyExistsResponse {
    pub message: String,
    pub inserted_id: Option<String>,
}

impl AlreadyExistsResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), inserted_id: None }
    }
}

fn bson_id_to_string(id: &Bson) -> Option<String> {
    match id {
        Bson::ObjectId(oid) => Some(oid.to_hex()),
        Bson::String(s) => Some(s.clone()),
        Bson::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_write_results_serialize_camel_case() {
        let insert = InsertResultResponse {
            acknowledged: true,
            inserted_id: Some("65f1c0a2b3d4e5f601234567".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&insert).unwrap(),
            serde_json::json!({"acknowledged": true, "insertedId": "65f1c0a2b3d4e5f601234567"})
        );

        let update = UpdateResultResponse { acknowledged: true, matched_count: 1, modified_count: 0 };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"acknowledged": true, "matchedCount": 1, "modifiedCount": 0})
        );

        assert_eq!(
            serde_json::to_value(DeleteResultResponse::deleted(3)).unwrap(),
            serde_json::json!({"acknowledged": true, "deletedCount": 3})
        );
    }

    #[test]
    fn test_already_exists_has_null_inserted_id() {
        let body = serde_json::to_value(AlreadyExistsResponse::new("user already exists")).unwrap();
        assert_eq!(body, serde_json::json!({"message": "user already exists", "insertedId": null}));
    }

    #[test]
    fn test_bson_id_to_string() {
        let oid = ObjectId::new();
        assert_eq!(bson_id_to_string(&Bson::ObjectId(oid)), Some(oid.to_hex()));
        assert_eq!(bson_id_to_string(&Bson::Null), None);
    }
}
