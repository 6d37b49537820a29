//! 토큰 발급 핸들러

use actix_web::{web, HttpResponse, post};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::tokens::TokenRequest;
use crate::services::auth::TokenService;

/// `POST /jwt`
///
/// 외부 인증을 마친 사용자 정보로 액세스 토큰을 발급합니다.
#[post("/jwt")]
pub async fn issue_token(
    payload: web::Json<TokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = TokenService::instance().issue_token(&payload)?;

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_issue_token_returns_verifiable_token() {
        let app = test::init_service(App::new().service(issue_token)).await;

        let req = test::TestRequest::post()
            .uri("/jwt")
            .set_json(serde_json::json!({ "email": "buyer@example.com", "name": "Buyer" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        let token = body["token"].as_str().unwrap();
        let claims = TokenService::instance().verify_token(token).unwrap();
        assert_eq!(claims.email, "buyer@example.com");
        assert_eq!(claims.name.as_deref(), Some("Buyer"));
    }

    #[actix_web::test]
    async fn test_issue_token_rejects_invalid_email() {
        let app = test::init_service(App::new().service(issue_token)).await;

        let req = test::TestRequest::post()
            .uri("/jwt")
            .set_json(serde_json::json!({ "email": "nope" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
