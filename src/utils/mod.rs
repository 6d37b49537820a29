//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 입력 문자열 정리 및 검증
//! - [`object_id`] - 경로/본문의 hex ID를 `ObjectId`로 변환
//!
//! ```rust,ignore
//! use crate::utils::object_id::parse_object_id;
//!
//! let id = parse_object_id(&path_id)?; // 형식 오류는 400
//! ```

pub mod string_utils;
pub mod object_id;
