//! # Stripe 결제 연동 서비스
//!
//! Stripe REST API로 PaymentIntent를 생성하고 `client_secret`을 돌려줍니다.
//! 브라우저는 이 값으로 Stripe.js에서 카드 결제를 확정합니다.
//!
//! ```text
//! POST {STRIPE_API_BASE}/v1/payment_intents
//! Authorization: Bearer {STRIPE_SECRET_KEY}
//! Idempotency-Key: {uuid v5(email, amount, client key)}   # 클라이언트가 키를 보낸 경우
//! Content-Type: application/x-www-form-urlencoded
//!
//! amount=129999&currency=usd&payment_method_types[]=card
//! ```

use serde::Deserialize;
use singleton_macro::service;
use uuid::Uuid;
use crate::{
    config::StripeConfig,
    core::errors::AppError,
    domain::dto::payments::{PaymentIntentRequest, PaymentIntentResponse},
    utils::string_utils::normalize_email,
};

#[service(name = "stripe")]
pub struct StripeService {
    http: reqwest::Client,
}

/// PaymentIntent 생성 응답 중 사용하는 필드
#[derive(Debug, Deserialize)]
struct StripePaymentIntent {
    id: String,
    client_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    #[serde(default)]
    message: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

impl StripeService {
    /// `client_key`가 있으면 같은 사용자, 같은 금액의 재시도는 Stripe에서 같은 PaymentIntent를 돌려받습니다.
    pub async fn create_payment_intent(
        &self,
        email: &str,
        request: &PaymentIntentRequest,
        client_key: Option<Uuid>,
    ) -> Result<PaymentIntentResponse, AppError> {
        let amount = amount_in_cents(request.price)?;
        let secret_key = StripeConfig::secret_key().ok_or_else(|| {
            log::error!("STRIPE_SECRET_KEY not set");
            AppError::ExternalServiceError("Stripe 비밀키가 설정되지 않았습니다".to_string())
        })?;
        let form = payment_intent_form(amount, &StripeConfig::currency());

        let mut builder = self.http
            .post(StripeConfig::payment_intents_url())
            .bearer_auth(secret_key)
            .form(&form);
        if let Some(key) = client_key {
            builder = builder.header("Idempotency-Key", stripe_idempotency_key(email, amount, key));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Stripe 요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let detail = describe_stripe_error(&error_text);
            log::error!("Stripe PaymentIntent 생성 실패 ({}): {}", status, detail);
            return Err(AppError::ExternalServiceError(format!(
                "Stripe PaymentIntent 생성 실패 ({}): {}", status, detail
            )));
        }

        let intent = response
            .json::<StripePaymentIntent>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Stripe 응답 파싱 실패: {}", e)))?;

        let client_secret = intent.client_secret.ok_or_else(|| {
            AppError::ExternalServiceError(format!("client_secret 누락: {}", intent.id))
        })?;

        log::info!("PaymentIntent 생성: {} (amount={})", intent.id, amount);
        Ok(PaymentIntentResponse { client_secret })
    }
}

/// 달러 금액을 센트 정수로 변환합니다. 소수점 이하 센트는 버립니다.
pub fn amount_in_cents(price: f64) -> Result<i64, AppError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::ValidationError("가격은 0보다 큰 숫자여야 합니다".to_string()));
    }

    let cents = (price * 100.0).trunc();
    if cents < 1.0 || cents > i64::MAX as f64 {
        return Err(AppError::ValidationError(format!("결제할 수 없는 금액입니다: {}", price)));
    }

    Ok(cents as i64)
}

/// 사용자와 금액에 묶인 Stripe 멱등 키
///
/// 다른 사용자가 같은 클라이언트 키를 보내도 다른 PaymentIntent가 만들어집니다.
pub fn stripe_idempotency_key(email: &str, amount: i64, client_key: Uuid) -> String {
    let name = format!("{}:{}:{}", normalize_email(email), amount, client_key);
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).to_string()
}

/// PaymentIntent 생성 폼 필드
pub fn payment_intent_form(amount: i64, currency: &str) -> Vec<(&'static str, String)> {
    vec![
        ("amount", amount.to_string()),
        ("currency", currency.to_string()),
        ("payment_method_types[]", "card".to_string()),
    ]
}

fn describe_stripe_error(body: &str) -> String {
    match serde_json::from_str::<StripeErrorBody>(body) {
        Ok(parsed) => format!(
            "{}: {}",
            parsed.error.kind.unwrap_or_else(|| "unknown".to_string()),
            parsed.error.message.unwrap_or_default()
        ),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_in_cents_truncates() {
        assert_eq!(amount_in_cents(10.0).unwrap(), 1000);
        assert_eq!(amount_in_cents(1299.99).unwrap(), 129999);
        assert_eq!(amount_in_cents(0.019).unwrap(), 1);
        assert_eq!(amount_in_cents(19.999).unwrap(), 1999);
    }

    #[test]
    fn test_amount_in_cents_rejects_invalid_prices() {
        for price in [0.0, -5.0, 0.001, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(amount_in_cents(price), Err(AppError::ValidationError(_))),
                "price {} should be rejected",
                price
            );
        }
    }

    #[test]
    fn test_payment_intent_form() {
        let form = payment_intent_form(2500, "usd");
        assert_eq!(
            form,
            vec![
                ("amount", "2500".to_string()),
                ("currency", "usd".to_string()),
                ("payment_method_types[]", "card".to_string()),
            ]
        );
    }

    #[test]
    fn test_idempotency_key_is_stable_per_user_and_amount() {
        let client_key = Uuid::new_v4();
        let key = stripe_idempotency_key("buyer@example.com", 2500, client_key);

        assert_eq!(key, stripe_idempotency_key("Buyer@Example.com ", 2500, client_key));
        assert_ne!(key, stripe_idempotency_key("other@example.com", 2500, client_key));
        assert_ne!(key, stripe_idempotency_key("buyer@example.com", 2600, client_key));
        assert_ne!(key, stripe_idempotency_key("buyer@example.com", 2500, Uuid::new_v4()));
    }

    #[test]
    fn test_describe_stripe_error() {
        let body = r#"{"error":{"type":"invalid_request_error","message":"Amount must be at least $0.50 usd"}}"#;
        assert_eq!(
            describe_stripe_error(body),
            "invalid_request_error: Amount must be at least $0.50 usd"
        );
        assert_eq!(describe_stripe_error("gateway timeout"), "gateway timeout");
    }

    #[actix_web::test]
    async fn test_invalid_price_fails_before_calling_stripe() {
        let request = PaymentIntentRequest { price: -1.0 };
        let result = StripeService::instance()
            .create_payment_intent("buyer@example.com", &request, Some(Uuid::new_v4()))
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
