//! JWT 인증 미들웨어
//!
//! 모든 요청의 `Authorization: Bearer <token>` 헤더를 확인합니다.
//! 토큰이 유효하면 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//! 요청 extensions에 넣고, 없거나 유효하지 않으면 그대로 통과시킵니다.
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(AuthMiddleware::new())
//!     .configure(configure_all_routes)
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

#[derive(Debug, Clone, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, test, web, App, HttpResponse};
    use serde_json::Value;
    use crate::core::errors::AppError;
    use crate::domain::dto::tokens::TokenRequest;
    use crate::domain::models::auth::{AdminUser, AuthenticatedUser};
    use crate::services::auth::TokenService;

    #[get("/me")]
    async fn me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
        Ok(HttpResponse::Ok().json(serde_json::json!({ "email": user.email })))
    }

    #[get("/admin-only")]
    async fn admin_only(admin: AdminUser) -> Result<HttpResponse, AppError> {
        Ok(HttpResponse::Ok().body(admin.email().to_string()))
    }

    async fn public() -> HttpResponse {
        HttpResponse::Ok().body("public")
    }

    fn issue_token(email: &str) -> String {
        let request = TokenRequest { email: email.to_string(), name: None };
        TokenService::instance().issue_token(&request).unwrap().token
    }

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .wrap(AuthMiddleware::new())
                    .service(me)
                    .service(admin_only)
                    .route("/public", web::get().to(public)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_missing_token_is_unauthorized() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "unauthorized access");
    }

    #[actix_web::test]
    async fn test_invalid_token_is_unauthorized() {
        let app = test_app!();

        for header in ["Bearer not.a.jwt", "Basic dXNlcjpwYXNz", "Bearer"] {
            let req = test::TestRequest::get()
                .uri("/me")
                .insert_header(("Authorization", header))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 401, "header {:?}", header);
        }
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let app = test_app!();
        let token = issue_token("buyer@example.com");

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["email"], "buyer@example.com");
    }

    #[actix_web::test]
    async fn test_public_route_ignores_bad_token() {
        let app = test_app!();

        let req = test::TestRequest::get()
            .uri("/public")
            .insert_header(("Authorization", "Bearer garbage"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_admin_route_without_token_is_unauthorized() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/admin-only").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
