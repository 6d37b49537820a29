//! 결제 기록 서비스
//!
//! 결제 완료 후 주문을 저장하고 결제된 장바구니 항목을 비웁니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    core::errors::AppError,
    domain::dto::payments::{CreatePaymentRequest, PaymentResponse, RecordPaymentResponse},
    domain::dto::common::DeleteResultResponse,
    domain::models::auth::AuthenticatedUser,
    repositories::carts::cart_repo::CartRepository,
    repositories::payments::payment_repo::PaymentRepository,
    utils::{object_id::parse_object_ids, string_utils::normalize_email},
};

#[service(name = "payment")]
pub struct PaymentService {
    payment_repo: Arc<PaymentRepository>,
    cart_repo: Arc<CartRepository>,
}

impl PaymentService {
    /// 본인 결제 내역만 조회할 수 있습니다.
    pub async fn payment_history(&self, user: &AuthenticatedUser, email: &str) -> Result<Vec<PaymentResponse>, AppError> {
        user.ensure_owner(email)?;

        let payments = self.payment_repo.find_by_email(&normalize_email(email)).await?;
        Ok(payments.into_iter().map(PaymentResponse::from).collect())
    }

    /// 결제를 저장한 뒤 `cartIds`의 장바구니 항목을 삭제합니다.
    ///
    /// ID 형식 검사는 쓰기 전에 끝내므로, 잘못된 ID가 있으면 아무 것도 저장되지 않습니다.
    pub async fn record_payment(&self, user: &AuthenticatedUser, request: CreatePaymentRequest) -> Result<RecordPaymentResponse, AppError> {
        user.ensure_owner(&request.email)?;

        let cart_ids = parse_object_ids(&request.cart_ids)?;
        let payment = request.into_entity();

        let payment_result = self.payment_repo.insert(&payment).await?;
        log::info!(
            "결제 기록: {} {} (price={}, items={})",
            payment.email, payment.transaction_id, payment.price, payment.laptop_item_ids.len()
        );

        let deleted_result = if cart_ids.is_empty() {
            DeleteResultResponse::deleted(0)
        } else {
            let cleanup = self.cart_repo
                .delete_owned_many(&cart_ids, &payment.email)
                .await
                .map(DeleteResultResponse::from);
            settle_cart_cleanup(cleanup, &payment.transaction_id)
        };

        Ok(RecordPaymentResponse {
            payment_result: payment_result.into(),
            deleted_result,
        })
    }
}

/// 결제는 이미 저장되었으므로 장바구니 정리 실패는 삭제 0건으로 응답합니다.
fn settle_cart_cleanup(cleanup: Result<DeleteResultResponse, AppError>, transaction_id: &str) -> DeleteResultResponse {
    cleanup.unwrap_or_else(|e| {
        log::error!("결제 후 장바구니 정리 실패 ({}): {}", transaction_id, e);
        DeleteResultResponse::deleted(0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_cleanup_failure_keeps_payment_response() {
        let failed = Err(AppError::DatabaseError("connection reset".to_string()));
        assert_eq!(settle_cart_cleanup(failed, "pi_123"), DeleteResultResponse::deleted(0));

        let cleaned = Ok(DeleteResultResponse::deleted(2));
        assert_eq!(settle_cart_cleanup(cleaned, "pi_123"), DeleteResultResponse::deleted(2));
    }
}
