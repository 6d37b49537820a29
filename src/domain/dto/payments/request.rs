//! 결제 요청 DTO

use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::domain::entities::payments::payment::{Payment, DEFAULT_PAYMENT_STATUS};
use crate::utils::string_utils::{clean_optional_string, normalize_email, validate_not_blank};

/// `POST /create-payment-intent` 요청 본문
///
/// `price`는 달러 단위 총액입니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaymentIntentRequest {
    #[validate(custom(function = "validate_price"))]
    pub price: f64,
}

/// `POST /payment` 요청 본문
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(custom(function = "validate_price"))]
    pub price: f64,

    #[validate(custom(function = "validate_not_blank"))]
    pub transaction_id: String,

    /// 생략하면 서버 시각을 사용합니다.
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub cart_ids: Vec<String>,

    #[serde(default)]
    pub laptop_item_ids: Vec<String>,

    #[serde(default)]
    pub status: Option<String>,
}

impl CreatePaymentRequest {
    pub fn into_entity(self) -> Payment {
        Payment {
            id: None,
            email: normalize_email(&self.email),
            price: self.price,
            transaction_id: self.transaction_id.trim().to_string(),
            date: clean_optional_string(self.date)
                .unwrap_or_else(|| chrono::Utc::now().to_rfc3339()),
            cart_ids: self.cart_ids,
            laptop_item_ids: self.laptop_item_ids,
            status: clean_optional_string(self.status)
                .unwrap_or_else(|| DEFAULT_PAYMENT_STATUS.to_string()),
        }
    }
}

/// 유한한 양수만 허용합니다.
fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::new("invalid_price")
            .with_message("가격은 0보다 큰 숫자여야 합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.5).is_ok());
        assert!(validate_price(0.0).is_err());
        assert!(validate_price(-10.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_create_payment_defaults() {
        let request: CreatePaymentRequest = serde_json::from_str(r#"{
            "email": "buyer@example.com",
            "price": 2598.5,
            "transactionId": " pi_3Pabc ",
            "cartIds": ["65f1c0a2b3d4e5f601234567"],
            "laptopItemIds": ["65f1c0a2b3d4e5f601234568"]
        }"#).unwrap();
        assert!(request.validate().is_ok());

        let payment = request.into_entity();
        assert_eq!(payment.transaction_id, "pi_3Pabc");
        assert_eq!(payment.status, "pending");
        assert!(!payment.date.is_empty());
    }

    #[test]
    fn test_payment_intent_request_rejects_zero() {
        let request: PaymentIntentRequest = serde_json::from_str(r#"{"price": 0}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
