use serde::{Deserialize, Serialize};

/// `GET /admin-stats` 응답
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatsResponse {
    pub users: u64,
    pub laptop_items: u64,
    pub orders: u64,
    pub revenue: f64,
}

/// `GET /order-stats` 브랜드별 집계 행
///
/// 브랜드가 없는 상품은 `brand: null` 행으로 묶입니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderStat {
    #[serde(default)]
    pub brand: Option<String>,
    pub quantity: i64,
    pub revenue: f64,
}
