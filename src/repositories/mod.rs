//! # Repository Layer
//!
//! 컬렉션별 데이터 액세스 계층입니다. 모든 리포지토리는 `#[repository]` 매크로로
//! 싱글톤 등록되며 `Database`(및 캐시가 필요한 경우 `RedisClient`)를 주입받습니다.
//!
//! | 리포지토리 | 컬렉션 | 캐시 |
//! |------------|--------|------|
//! | [`users::user_repo::UserRepository`] | `users` | 이메일 조회 |
//! | [`laptops::laptop_repo::LaptopRepository`] | `laptops` | 목록, 단건 |
//! | [`carts::cart_repo::CartRepository`] | `carts` | - |
//! | [`payments::payment_repo::PaymentRepository`] | `payments` | - |
//!
//! 캐시 읽기/쓰기 실패는 요청을 실패시키지 않고 MongoDB 결과를 그대로 사용합니다.

pub mod users;
pub mod laptops;
pub mod carts;
pub mod payments;

/// 캐시 항목 TTL (10분)
pub(crate) const CACHE_TTL_SECONDS: usize = 600;
