//! # Domain Models
//!
//! 저장되지 않는 요청 범위 모델입니다.
//!
//! - [`token`] - JWT 클레임
//! - [`auth`] - 인증/관리자 요청 추출자 (`FromRequest`)

pub mod auth;
pub mod token;
