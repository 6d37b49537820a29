//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 권한 |
//! |--------|------|------|
//! | `GET` | `/users` | 관리자 |
//! | `POST` | `/users` | 공개 |
//! | `GET` | `/users/admin/{email}` | 토큰 (본인) |
//! | `PATCH` | `/users/admin/{id}` | 관리자 |
//! | `DELETE` | `/users/{id}` | 관리자 |

use actix_web::{web, HttpResponse, get, post, patch, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::users::CreateUserRequest;
use crate::domain::models::auth::{AdminUser, AuthenticatedUser};
use crate::services::users::user_service::{CreateUserOutcome, UserService};

#[get("")]
pub async fn list_users(
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    let users = UserService::instance().list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 이미 등록된 이메일이면 저장하지 않고 안내 메시지를 200으로 반환합니다.
#[post("")]
pub async fn create_user(
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    match service.create_user(payload.into_inner()).await? {
        CreateUserOutcome::Created(result) => Ok(HttpResponse::Ok().json(result)),
        CreateUserOutcome::AlreadyExists(body) => Ok(HttpResponse::Ok().json(body)),
    }
}

#[get("/admin/{email}")]
pub async fn check_admin(
    user: AuthenticatedUser,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let status = UserService::instance().admin_status(&user, &email).await?;

    Ok(HttpResponse::Ok().json(status))
}

#[patch("/admin/{user_id}")]
pub async fn make_admin(
    admin: AdminUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("관리자 승격 요청: {} by {}", user_id, admin.email());
    let result = UserService::instance().promote_to_admin(&user_id).await?;

    Ok(HttpResponse::Ok().json(result))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    admin: AdminUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("사용자 삭제 요청: {} by {}", user_id, admin.email());
    let result = UserService::instance().delete_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(result))
}
