use serde::{Deserialize, Serialize};
use crate::domain::entities::carts::cart_item::CartItem;

/// 장바구니 항목 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub laptop_item_id: String,
    pub brand: String,
    pub model: String,
    pub image: String,
    pub price: f64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id.map(|id| id.to_hex()).unwrap_or_default(),
            email: item.email,
            laptop_item_id: item.laptop_item_id,
            brand: item.brand,
            model: item.model,
            image: item.image,
            price: item.price,
        }
    }
}
