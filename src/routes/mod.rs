//! API 라우트 설정 모듈
//!
//! 리소스 그룹별로 핸들러를 등록합니다. 인증은 앱 전역 `AuthMiddleware`가
//! 토큰을 해석하고, 각 핸들러가 `AuthenticatedUser` / `AdminUser` 인자로 요구합니다.
//!
//! | 그룹 | 경로 |
//! |------|------|
//! | 인증 | `POST /jwt` |
//! | 사용자 | `/users`, `/users/admin/{..}`, `/users/{id}` |
//! | 상품 | `/laptops`, `/laptops/{id}` |
//! | 장바구니 | `/carts`, `/carts/{id}` |
//! | 결제 | `/create-payment-intent`, `/payment`, `/payment/{email}` |
//! | 통계 | `/admin-stats`, `/order-stats` |
//! | 운영 | `/`, `/health` |
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(AuthMiddleware::new())
//!     .configure(configure_all_routes)
//! ```

use crate::core::errors::AppError;
use crate::handlers;
use actix_web::{get, web, HttpResponse};
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    cfg.service(root);
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg);
    configure_laptop_routes(cfg);
    configure_cart_routes(cfg);
    configure_payment_routes(cfg);
    configure_stats_routes(cfg);
}

/// JSON 본문/쿼리 파싱 실패도 `AppError` 형식(400)으로 응답합니다.
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(64 * 1024)
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::issue_token);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::check_admin)
            .service(handlers::users::make_admin)
            .service(handlers::users::delete_user)
    );
}

fn configure_laptop_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/laptops")
            .service(handlers::laptops::list_laptops)
            .service(handlers::laptops::create_laptop)
            .service(handlers::laptops::get_laptop)
            .service(handlers::laptops::update_laptop)
            .service(handlers::laptops::delete_laptop)
    );
}

fn configure_cart_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/carts")
            .service(handlers::carts::list_cart)
            .service(handlers::carts::add_to_cart)
            .service(handlers::carts::remove_from_cart)
    );
}

fn configure_payment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::payments::create_payment_intent)
        .service(handlers::payments::payment_history)
        .service(handlers::payments::record_payment);
}

fn configure_stats_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::stats::admin_stats)
        .service(handlers::stats::order_stats);
}

#[get("/")]
async fn root() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body("server is running...")
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "payments": "Stripe"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;
    use crate::middlewares::AuthMiddleware;

    #[actix_web::test]
    async fn test_root_and_health() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(test::read_body(resp).await, "server is running...");

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_protected_routes_reject_anonymous_requests() {
        let app = test::init_service(
            App::new()
                .wrap(AuthMiddleware::new())
                .configure(configure_all_routes),
        )
        .await;

        let cases = [
            test::TestRequest::get().uri("/users"),
            test::TestRequest::get().uri("/users/admin/buyer@example.com"),
            test::TestRequest::patch().uri("/users/admin/65f1c0a2b3d4e5f601234567"),
            test::TestRequest::delete().uri("/users/65f1c0a2b3d4e5f601234567"),
            test::TestRequest::delete().uri("/laptops/65f1c0a2b3d4e5f601234567"),
            test::TestRequest::get().uri("/carts?email=buyer@example.com"),
            test::TestRequest::delete().uri("/carts/65f1c0a2b3d4e5f601234567"),
            test::TestRequest::get().uri("/payment/buyer@example.com"),
            test::TestRequest::get().uri("/admin-stats"),
            test::TestRequest::get().uri("/order-stats"),
        ];

        for case in cases {
            let req = case.to_request();
            let path = req.path().to_string();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 401, "{}", path);
        }
    }

    #[actix_web::test]
    async fn test_malformed_json_is_validation_error() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/jwt")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "validation_error");
    }
}
