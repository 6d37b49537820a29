//! # Payment Handlers
//!
//! | 메서드 | 경로 | 권한 |
//! |--------|------|------|
//! | `POST` | `/create-payment-intent` | 토큰 |
//! | `GET` | `/payment/{email}` | 토큰 (본인) |
//! | `POST` | `/payment` | 토큰 (본인) |

use actix_web::http::header::HeaderMap;
use actix_web::{web, HttpRequest, HttpResponse, get, post};
use uuid::Uuid;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::payments::{CreatePaymentRequest, PaymentIntentRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::payments::payment_service::PaymentService;
use crate::services::payments::stripe_service::StripeService;

/// 클라이언트가 재시도에 재사용하는 멱등 키 헤더
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// 선택적 `Idempotency-Key` 헤더를 UUID로 읽습니다. 형식이 틀리면 400입니다.
pub fn extract_idempotency_key(headers: &HeaderMap) -> Result<Option<Uuid>, AppError> {
    let Some(value) = headers.get(IDEMPOTENCY_KEY_HEADER) else {
        return Ok(None);
    };

    value
        .to_str()
        .ok()
        .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
        .map(Some)
        .ok_or_else(|| AppError::ValidationError("Idempotency-Key는 UUID 형식이어야 합니다".to_string()))
}

#[post("/create-payment-intent")]
pub async fn create_payment_intent(
    req: HttpRequest,
    user: AuthenticatedUser,
    payload: web::Json<PaymentIntentRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;
    let client_key = extract_idempotency_key(req.headers())?;

    log::debug!("PaymentIntent 요청: {} (price={})", user.email, payload.price);
    let response = StripeService::instance()
        .create_payment_intent(&user.email, &payload, client_key)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/payment/{email}")]
pub async fn payment_history(
    user: AuthenticatedUser,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let payments = PaymentService::instance().payment_history(&user, &email).await?;

    Ok(HttpResponse::Ok().json(payments))
}

#[post("/payment")]
pub async fn record_payment(
    user: AuthenticatedUser,
    payload: web::Json<CreatePaymentRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = PaymentService::instance().record_payment(&user, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use crate::middlewares::AuthMiddleware;

    #[::core::prelude::v1::test]
    fn test_extract_idempotency_key() {
        let key = Uuid::new_v4();

        let req = test::TestRequest::default()
            .insert_header((IDEMPOTENCY_KEY_HEADER, key.to_string()))
            .to_http_request();
        assert_eq!(extract_idempotency_key(req.headers()).unwrap(), Some(key));

        let req = test::TestRequest::default().to_http_request();
        assert_eq!(extract_idempotency_key(req.headers()).unwrap(), None);

        let req = test::TestRequest::default()
            .insert_header((IDEMPOTENCY_KEY_HEADER, "retry-1"))
            .to_http_request();
        assert!(matches!(
            extract_idempotency_key(req.headers()),
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_payment_intent_requires_token() {
        let app = test::init_service(
            App::new()
                .wrap(AuthMiddleware::new())
                .service(create_payment_intent),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/create-payment-intent")
            .set_json(serde_json::json!({ "price": 10.0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
