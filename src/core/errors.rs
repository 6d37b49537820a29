//! # Application Error Handling
//!
//! 스토어 백엔드 전역에서 사용하는 에러 타입입니다.
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `actix_web::ResponseError` 구현을 통해 일관된 JSON 에러 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 잘못된 ObjectId, 가격, 이메일 등 |
//! | `AuthenticationError` | 401 Unauthorized | 토큰 없음/만료/위조 |
//! | `AuthorizationError` | 403 Forbidden | 관리자 아님, 다른 사용자의 이메일 접근 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ConflictError` | 409 Conflict | 중복 데이터 |
//! | `DatabaseError` | 500 | MongoDB 오류 |
//! | `RedisError` | 500 | 캐시 오류 |
//! | `ExternalServiceError` | 500 | Stripe API 오류 |
//! | `InternalError` | 500 | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": "forbidden",
//!   "message": "forbidden access"
//! }
//! ```
//!
//! 401/403 응답의 `message`는 기존 프론트엔드가 기대하는
//! `"unauthorized access"` / `"forbidden access"` 문구를 그대로 사용합니다.

use actix_web::http::StatusCode;
use thiserror::Error;

/// 인증 실패 시 클라이언트에게 전달되는 메시지
pub const UNAUTHORIZED_MESSAGE: &str = "unauthorized access";

/// 권한 부족 시 클라이언트에게 전달되는 메시지
pub const FORBIDDEN_MESSAGE: &str = "forbidden access";

/// 애플리케이션 전역 에러 타입
///
/// 인프라(MongoDB, Redis, Stripe) 에러와 비즈니스/보안 에러를 하나의 열거형으로
/// 표현합니다. 인프라 에러는 호출 지점에서 `map_err`로 문자열화하여 감쌉니다.
///
/// ```rust,ignore
/// let laptop = collection.find_one(doc! { "_id": oid }).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500)
    ///
    /// 캐시는 보조 저장소이므로 리포지토리에서는 대부분 로그만 남기고 무시합니다.
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 (401)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 (403)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스(Stripe) 에러 (500)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 기본 메시지를 사용하는 인증 실패 에러
    pub fn unauthorized() -> Self {
        AppError::AuthenticationError(UNAUTHORIZED_MESSAGE.to_string())
    }

    /// 기본 메시지를 사용하는 권한 부족 에러
    pub fn forbidden() -> Self {
        AppError::AuthorizationError(FORBIDDEN_MESSAGE.to_string())
    }

    /// 응답 본문의 `error` 필드에 들어갈 에러 코드
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "database_error",
            AppError::RedisError(_) => "cache_error",
            AppError::ValidationError(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
            AppError::ConflictError(_) => "conflict",
            AppError::AuthenticationError(_) => "unauthorized",
            AppError::AuthorizationError(_) => "forbidden",
            AppError::ExternalServiceError(_) => "external_service_error",
            AppError::InternalError(_) => "internal_error",
        }
    }

    /// 클라이언트에게 노출할 메시지
    ///
    /// 5xx 에러는 내부 정보를 숨기고 일반 메시지만 반환합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg) => msg.clone(),
            AppError::ExternalServiceError(_) => "payment provider request failed".to_string(),
            _ => "internal server error".to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 원본 메시지를 서버 로그에만 기록합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.kind(),
                "message": self.public_message()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
