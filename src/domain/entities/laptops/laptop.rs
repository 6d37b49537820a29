//! Laptop Entity
//!
//! 카탈로그에 노출되는 노트북 상품 문서입니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 노트북 상품 엔티티
///
/// 사양 필드(`ram`, `storage` 등)는 "16GB"처럼 표시용 문자열로 저장합니다.
/// 컬렉션에 스키마 검증이 없으므로 누락된 필드는 기본값으로 읽습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Laptop {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub brand: String,
    pub model: String,
    pub processor: String,
    pub ram: String,
    pub storage: String,
    pub graphics: String,
    pub price: f64,
    pub description: String,
    /// 상품 이미지 URL
    pub image: String,
}

impl Laptop {
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
