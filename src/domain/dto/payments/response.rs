use serde::{Deserialize, Serialize};
use crate::domain::dto::common::{DeleteResultResponse, InsertResultResponse};
use crate::domain::entities::payments::payment::Payment;

/// `POST /create-payment-intent` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

/// 결제 내역 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub price: f64,
    pub transaction_id: String,
    pub date: String,
    pub cart_ids: Vec<String>,
    pub laptop_item_ids: Vec<String>,
    pub status: String,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id.map(|id| id.to_hex()).unwrap_or_default(),
            email: payment.email,
            price: payment.price,
            transaction_id: payment.transaction_id,
            date: payment.date,
            cart_ids: payment.cart_ids,
            laptop_item_ids: payment.laptop_item_ids,
            status: payment.status,
        }
    }
}

/// `POST /payment` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentResponse {
    pub payment_result: InsertResultResponse,
    pub deleted_result: DeleteResultResponse,
}
