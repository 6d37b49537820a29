//! Payment Entity
//!
//! Stripe 결제 완료 후 클라이언트가 기록하는 주문 문서입니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 결제 상태 기본값
pub const DEFAULT_PAYMENT_STATUS: &str = "pending";

/// 결제(주문) 엔티티. 누락된 필드는 기본값으로 읽습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    /// 결제 총액 (달러)
    pub price: f64,
    /// Stripe PaymentIntent ID
    pub transaction_id: String,
    /// 결제 일시 (클라이언트가 보낸 ISO 8601 문자열)
    pub date: String,
    /// 결제로 비워지는 장바구니 항목 ID 목록
    pub cart_ids: Vec<String>,
    /// 주문된 상품 ID 목록 (주문 통계 집계에 사용)
    pub laptop_item_ids: Vec<String>,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_payment_document_field_names() {
        let payment = Payment {
            id: None,
            email: "buyer@example.com".to_string(),
            price: 1299.99,
            transaction_id: "pi_123".to_string(),
            date: "2024-05-01T10:00:00Z".to_string(),
            cart_ids: vec!["65f1c0a2b3d4e5f601234567".to_string()],
            laptop_item_ids: vec!["65f1c0a2b3d4e5f601234568".to_string()],
            status: DEFAULT_PAYMENT_STATUS.to_string(),
        };

        let document = bson::to_document(&payment).unwrap();
        for key in ["transactionId", "cartIds", "laptopItemIds", "status", "date"] {
            assert!(document.contains_key(key), "missing {}", key);
        }
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let payment: Payment = bson::from_document(bson::doc! {
            "email": "buyer@example.com",
            "price": 1299.99,
            "transactionId": "pi_123",
        }).unwrap();

        assert_eq!(payment.transaction_id, "pi_123");
        assert!(payment.cart_ids.is_empty());
        assert!(payment.laptop_item_ids.is_empty());
        assert!(payment.date.is_empty());
    }
}
