//! 애플리케이션 조립
//!
//! 미들웨어 스택과 라우트를 묶은 `App`을 만듭니다. `wrap`은 나중에 호출한 것이
//! 바깥쪽이므로 요청은 NormalizePath → Logger → CORS → Auth → Governor → 라우트 순으로 지나갑니다.
//!
//! Governor의 내부 서비스 future는 `Unpin`이어야 하므로 Governor는 라우트 바로 위에 둡니다.

use actix_cors::Cors;
use actix_governor::governor::middleware::StateInformationMiddleware;
use actix_governor::{Governor, GovernorConfig, PeerIpKeyExtractor};
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{middleware, App, Error};
use crate::middlewares::AuthMiddleware;
use crate::routes::configure_all_routes;

/// Rate Limiting 설정 (`X-RateLimit-*` 헤더 포함)
pub type RateLimitGovernorConfig = GovernorConfig<PeerIpKeyExtractor, StateInformationMiddleware>;

pub fn create_app(
    governor_conf: RateLimitGovernorConfig,
    allowed_origins: Vec<String>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Governor::new(&governor_conf))
        .wrap(AuthMiddleware::new())
        .wrap(configure_cors(&allowed_origins))
        .wrap(middleware::Logger::default())
        .wrap(middleware::NormalizePath::trim())
        .configure(configure_all_routes)
}

/// 허용 Origin이 비어 있으면 모든 Origin을 허용합니다.
pub fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600);

    if allowed_origins.is_empty() {
        return cors.allow_any_origin();
    }

    allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
        .supports_credentials()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_governor::GovernorConfigBuilder;
    use actix_web::test;
    use serde_json::Value;
    use std::net::SocketAddr;

    fn governor_conf(burst_size: u32) -> RateLimitGovernorConfig {
        GovernorConfigBuilder::default()
            .requests_per_second(1)
            .burst_size(burst_size)
            .use_headers()
            .finish()
            .unwrap()
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:40000".parse().unwrap()
    }

    #[actix_web::test]
    async fn test_full_stack_serves_public_routes() {
        let app = test::init_service(create_app(governor_conf(50), Vec::new())).await;

        let req = test::TestRequest::get().uri("/health/").peer_addr(peer()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert!(resp.headers().contains_key("x-ratelimit-remaining"));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_full_stack_rejects_anonymous_cart_access() {
        let app = test::init_service(create_app(governor_conf(50), Vec::new())).await;

        let req = test::TestRequest::get()
            .uri("/carts?email=buyer@example.com")
            .peer_addr(peer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_full_stack_applies_rate_limit() {
        let app = test::init_service(create_app(governor_conf(1), Vec::new())).await;

        let first = test::TestRequest::get().uri("/").peer_addr(peer()).to_request();
        assert_eq!(test::call_service(&app, first).await.status(), 200);

        let second = test::TestRequest::get().uri("/").peer_addr(peer()).to_request();
        assert_eq!(test::call_service(&app, second).await.status(), 429);
    }

    #[actix_web::test]
    async fn test_configured_origin_is_allowed() {
        let origins = vec!["http://localhost:5173".to_string()];
        let app = test::init_service(create_app(governor_conf(50), origins)).await;

        let req = test::TestRequest::get()
            .uri("/")
            .peer_addr(peer())
            .insert_header((header::ORIGIN, "http://localhost:5173"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
    }
}
