//! # Laptop Store Backend
//!
//! 노트북 쇼핑몰 백엔드 API 라이브러리입니다.
//!
//! ```text
//! routes → handlers → services → repositories → MongoDB / Redis
//!                        └──────→ Stripe REST API
//! ```
//!
//! 서비스와 리포지토리는 `singleton_macro`로 등록되는 프로세스 단위 싱글톤이며,
//! [`core::registry::ServiceLocator`]가 의존성을 해석합니다.

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
pub mod app;
