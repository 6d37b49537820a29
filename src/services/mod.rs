//! # Service Layer
//!
//! 핸들러와 리포지토리 사이의 비즈니스 로직 계층입니다.
//! 모든 서비스는 `#[service]` 매크로로 싱글톤 등록되며 `instance()`로 접근합니다.
//!
//! | 서비스 | 역할 |
//! |--------|------|
//! | [`auth::token_service::TokenService`] | 액세스 토큰 발급/검증 |
//! | [`users::user_service::UserService`] | 사용자 등록, 관리자 확인/승격 |
//! | [`laptops::laptop_service::LaptopService`] | 상품 카탈로그 |
//! | [`carts::cart_service::CartService`] | 장바구니 |
//! | [`payments::payment_service::PaymentService`] | 결제 기록/내역 |
//! | [`payments::stripe_service::StripeService`] | Stripe PaymentIntent 생성 |
//! | [`stats::stats_service::StatsService`] | 관리자 통계 |

pub mod auth;
pub mod users;
pub mod laptops;
pub mod carts;
pub mod payments;
pub mod stats;
