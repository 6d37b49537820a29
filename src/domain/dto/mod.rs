//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문 타입입니다. 요청 DTO는 `validator`로 검증하고,
//! 응답 DTO는 `_id`를 hex 문자열로 노출합니다.
//!
//! 쓰기 작업 응답은 MongoDB 드라이버 결과와 같은 모양
//! (`acknowledged`, `insertedId`, `modifiedCount`, `deletedCount`)을 유지합니다.

pub mod common;
pub mod tokens;
pub mod users;
pub mod laptops;
pub mod carts;
pub mod payments;
pub mod stats;

pub use common::*;
