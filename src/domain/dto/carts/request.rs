use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::carts::cart_item::CartItem;
use crate::utils::string_utils::{normalize_email, validate_not_blank};

/// `GET /carts?email=` 쿼리
#[derive(Debug, Clone, Deserialize)]
pub struct CartQuery {
    pub email: Option<String>,
}

/// `POST /carts` 요청 본문
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(equal = 24, message = "상품 ID 형식이 올바르지 않습니다"))]
    pub laptop_item_id: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub brand: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub model: String,

    #[serde(default)]
    pub image: String,

    #[validate(range(exclusive_min = 0.0, message = "가격은 0보다 커야 합니다"))]
    pub price: f64,
}

impl AddCartItemRequest {
    pub fn into_entity(self) -> CartItem {
        CartItem {
            id: None,
            email: normalize_email(&self.email),
            laptop_item_id: self.laptop_item_id,
            brand: self.brand,
            model: self.model,
            image: self.image,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_cart_item_request() {
        let request: AddCartItemRequest = serde_json::from_str(r#"{
            "email": "Buyer@Example.com",
            "laptopItemId": "65f1c0a2b3d4e5f601234567",
            "brand": "Apple",
            "model": "MacBook Air M3",
            "image": "https://img.example.com/air.png",
            "price": 1099.0
        }"#).unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.into_entity().email, "buyer@example.com");
    }

    #[test]
    fn test_add_cart_item_rejects_short_item_id() {
        let request: AddCartItemRequest = serde_json::from_str(r#"{
            "email": "buyer@example.com",
            "laptopItemId": "123",
            "brand": "Apple",
            "model": "MacBook Air M3",
            "price": 1099.0
        }"#).unwrap();

        assert!(request.validate().unwrap_err().field_errors().contains_key("laptop_item_id"));
    }
}
