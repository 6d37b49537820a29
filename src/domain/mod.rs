//! # Domain Layer Module
//!
//! ```text
//! domain
//! ├── entities  - MongoDB 문서 (User, Laptop, CartItem, Payment)
//! ├── dto       - HTTP 요청/응답 본문
//! └── models    - 요청 범위 모델 (JWT 클레임, 인증 추출자)
//! ```
//!
//! 엔티티는 저장 형식을, DTO는 API 계약을 표현합니다. 응답 DTO는 엔티티에서
//! `From`으로 변환하며 `_id`를 hex 문자열로 바꿉니다.

pub mod entities;
pub mod dto;
pub mod models;
