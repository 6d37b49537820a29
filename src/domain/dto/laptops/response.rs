use serde::{Deserialize, Serialize};
use crate::domain::entities::laptops::laptop::Laptop;

/// 상품 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaptopResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub brand: String,
    pub model: String,
    pub processor: String,
    pub ram: String,
    pub storage: String,
    pub graphics: String,
    pub price: f64,
    pub description: String,
    pub image: String,
}

impl From<Laptop> for LaptopResponse {
    fn from(laptop: Laptop) -> Self {
        Self {
            id: laptop.id_string().unwrap_or_default(),
            brand: laptop.brand,
            model: laptop.model,
            processor: laptop.processor,
            ram: laptop.ram,
            storage: laptop.storage,
            graphics: laptop.graphics,
            price: laptop.price,
            description: laptop.description,
            image: laptop.image,
        }
    }
}
