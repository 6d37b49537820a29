//! # Configuration Module
//!
//! 환경 변수 기반 설정을 정적 접근자로 제공합니다.
//! 값은 호출 시점에 읽으며, 누락/파싱 실패 시 개발용 기본값을 사용합니다.
//!
//! - [`data_config`] - 실행 환경, 서버, CORS, Rate Limiting
//! - [`auth_config`] - JWT 서명 및 만료
//! - [`payment_config`] - Stripe 연동
//!
//! ## 환경 변수
//!
//! ```bash
//! export HOST="0.0.0.0"
//! export PORT="4000"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="mehanDB"
//! export REDIS_URL="redis://localhost:6379"
//! export ACCESS_TOKEN_SECRET="..."
//! export STRIPE_SECRET_KEY="sk_test_..."
//! export CORS_ALLOWED_ORIGINS="http://localhost:5173"
//! ```

pub mod data_config;
pub mod auth_config;
pub mod payment_config;

pub use data_config::*;
pub use auth_config::*;
pub use payment_config::*;
