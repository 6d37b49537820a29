//! # Laptop Catalog Handlers
//!
//! 조회는 공개, 등록/수정/삭제는 관리자 전용입니다.

use actix_web::{web, HttpResponse, get, post, patch, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::laptops::{CreateLaptopRequest, UpdateLaptopRequest};
use crate::domain::models::auth::AdminUser;
use crate::services::laptops::laptop_service::LaptopService;

#[get("")]
pub async fn list_laptops() -> Result<HttpResponse, AppError> {
    let laptops = LaptopService::instance().list_laptops().await?;

    Ok(HttpResponse::Ok().json(laptops))
}

/// 항목이 없으면 빈 배열을 반환합니다.
#[get("/{laptop_id}")]
pub async fn get_laptop(
    laptop_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let laptop = LaptopService::instance().find_laptop(&laptop_id).await?;

    Ok(HttpResponse::Ok().json(laptop))
}

#[post("")]
pub async fn create_laptop(
    _admin: AdminUser,
    payload: web::Json<CreateLaptopRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let result = LaptopService::instance().create_laptop(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(result))
}

#[patch("/{laptop_id}")]
pub async fn update_laptop(
    _admin: AdminUser,
    laptop_id: web::Path<String>,
    payload: web::Json<UpdateLaptopRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let result = LaptopService::instance().update_laptop(&laptop_id, &payload).await?;

    Ok(HttpResponse::Ok().json(result))
}

#[delete("/{laptop_id}")]
pub async fn delete_laptop(
    _admin: AdminUser,
    laptop_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let result = LaptopService::instance().delete_laptop(&laptop_id).await?;

    Ok(HttpResponse::Ok().json(result))
}
