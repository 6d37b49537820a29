//! Cart Item Entity
//!
//! 장바구니에 담긴 상품 한 건입니다. 상품 정보는 담는 시점의 값을 복사해 둡니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 장바구니 항목 엔티티. 누락된 필드는 기본값으로 읽습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CartItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소유자 이메일
    pub email: String,
    /// 원본 상품 `_id` (hex 문자열)
    #[serde(rename = "laptopItemId")]
    pub laptop_item_id: String,
    pub brand: String,
    pub model: String,
    pub image: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_partial_document_uses_defaults() {
        let item: CartItem = bson::from_document(doc! {
            "email": "buyer@example.com",
            "laptopItemId": "65f1c0a2b3d4e5f601234567",
        }).unwrap();

        assert_eq!(item.email, "buyer@example.com");
        assert_eq!(item.laptop_item_id, "65f1c0a2b3d4e5f601234567");
        assert!(item.brand.is_empty());
        assert_eq!(item.price, 0.0);
    }
}
