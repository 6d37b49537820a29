//! # Middlewares
//!
//! - [`AuthMiddleware`] - Bearer 토큰을 해석해 `AuthenticatedUser`를 요청에 첨부
//!
//! 인증 강제는 미들웨어가 아니라 핸들러 인자(`AuthenticatedUser`, `AdminUser`)로
//! 라우트마다 선언합니다. 같은 경로 접두사 아래 공개/인증/관리자 라우트가
//! 섞여 있기 때문입니다.

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
