//! 상품 등록/수정 요청 DTO

use mongodb::bson::{doc, Document};
use serde::Deserialize;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::entities::laptops::laptop::Laptop;
use crate::utils::string_utils::{deserialize_trimmed_string, validate_not_blank};

/// `POST /laptops` 요청 본문. 모든 필드가 필수입니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLaptopRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 50, message = "브랜드는 1-50자여야 합니다"))]
    pub brand: String,

    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 100, message = "모델명은 1-100자여야 합니다"))]
    pub model: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub processor: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub ram: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub storage: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub graphics: String,

    #[validate(range(exclusive_min = 0.0, message = "가격은 0보다 커야 합니다"))]
    pub price: f64,

    #[serde(default)]
    pub description: String,

    #[validate(url(message = "유효한 이미지 URL이 아닙니다"))]
    pub image: String,
}

impl CreateLaptopRequest {
    pub fn into_entity(self) -> Laptop {
        Laptop {
            id: None,
            brand: self.brand,
            model: self.model,
            processor: self.processor,
            ram: self.ram,
            storage: self.storage,
            graphics: self.graphics,
            price: self.price,
            description: self.description,
            image: self.image,
        }
    }
}

/// `PATCH /laptops/{id}` 요청 본문
///
/// 보낸 필드만 `$set`으로 갱신합니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateLaptopRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub brand: Option<String>,
    #[validate(custom(function = "validate_not_blank"))]
    pub model: Option<String>,
    #[validate(custom(function = "validate_not_blank"))]
    pub processor: Option<String>,
    #[validate(custom(function = "validate_not_blank"))]
    pub ram: Option<String>,
    #[validate(custom(function = "validate_not_blank"))]
    pub storage: Option<String>,
    #[validate(custom(function = "validate_not_blank"))]
    pub graphics: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "가격은 0보다 커야 합니다"))]
    pub price: Option<f64>,
    pub description: Option<String>,
    #[validate(url(message = "유효한 이미지 URL이 아닙니다"))]
    pub image: Option<String>,
}

impl UpdateLaptopRequest {
    /// `$set`에 넣을 문서를 만듭니다. 변경할 필드가 없으면 400입니다.
    pub fn to_set_document(&self) -> Result<Document, AppError> {
        let mut set = Document::new();

        let text_fields = [
            ("brand", &self.brand),
            ("model", &self.model),
            ("processor", &self.processor),
            ("ram", &self.ram),
            ("storage", &self.storage),
            ("graphics", &self.graphics),
            ("description", &self.description),
            ("image", &self.image),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value {
                set.insert(key, value.trim());
            }
        }
        if let Some(price) = self.price {
            set.insert("price", price);
        }

        if set.is_empty() {
            return Err(AppError::ValidationError("수정할 필드가 없습니다".to_string()));
        }

        Ok(doc! { "$set": set })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create_json() -> &'static str {
        r#"{
            "brand": " Lenovo ",
            "model": "ThinkPad X1 Carbon",
            "processor": "Intel Core i7-1365U",
            "ram": "16GB",
            "storage": "512GB SSD",
            "graphics": "Intel Iris Xe",
            "price": 1499.0,
            "description": "Business ultrabook",
            "image": "https://img.example.com/x1.png"
        }"#
    }

    #[test]
    fn test_create_request_validation() {
        let request: CreateLaptopRequest = serde_json::from_str(valid_create_json()).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.into_entity().brand, "Lenovo");
    }

    #[test]
    fn test_create_request_rejects_bad_price_and_blank_fields() {
        let mut request: CreateLaptopRequest = serde_json::from_str(valid_create_json()).unwrap();
        request.price = 0.0;
        request.ram = "  ".to_string();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("ram"));
    }

    #[test]
    fn test_update_builds_set_document_from_present_fields() {
        let request = UpdateLaptopRequest {
            price: Some(999.0),
            ram: Some(" 32GB ".to_string()),
            ..Default::default()
        };

        let update = request.to_set_document().unwrap();
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get_f64("price").unwrap(), 999.0);
        assert_eq!(set.get_str("ram").unwrap(), "32GB");
    }

    #[test]
    fn test_empty_update_is_rejected() {
        let err = UpdateLaptopRequest::default().to_set_document().unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
