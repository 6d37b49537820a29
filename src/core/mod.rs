//! # Core Module
//!
//! 애플리케이션 전반에서 공유하는 기반 기능입니다.
//!
//! - [`registry`] - `singleton_macro`가 사용하는 싱글톤 레지스트리 (`ServiceLocator`)
//! - [`errors`] - 전역 에러 타입 `AppError`와 HTTP 응답 변환
//!
//! ```rust,ignore
//! use crate::core::{AppError, ServiceLocator};
//!
//! ServiceLocator::set(Arc::new(database));
//! ServiceLocator::initialize_all().await?;
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
