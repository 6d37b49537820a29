//! # HTTP Handlers
//!
//! 리소스 그룹별 actix-web 핸들러입니다. 핸들러는 입력 검증 후
//! 서비스 한 곳을 호출하고 결과를 JSON으로 반환합니다.
//!
//! 인증 요구 수준은 핸들러 인자로 표현합니다.
//!
//! | 인자 | 요구 사항 | 실패 |
//! |------|-----------|------|
//! | (없음) | 공개 | - |
//! | `AuthenticatedUser` | 유효한 Bearer 토큰 | 401 |
//! | `AdminUser` | 토큰 + 저장된 `role == "admin"` | 401 / 403 |

pub mod auth;
pub mod users;
pub mod laptops;
pub mod carts;
pub mod payments;
pub mod stats;
