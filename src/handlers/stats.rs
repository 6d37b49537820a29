//! # Admin Statistics Handlers

use actix_web::{HttpResponse, get};
use crate::core::errors::AppError;
use crate::domain::models::auth::AdminUser;
use crate::services::stats::stats_service::StatsService;

/// `GET /admin-stats`
#[get("/admin-stats")]
pub async fn admin_stats(
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    let stats = StatsService::instance().admin_stats().await?;

    Ok(HttpResponse::Ok().json(stats))
}

/// `GET /order-stats`
#[get("/order-stats")]
pub async fn order_stats(
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    let stats = StatsService::instance().order_stats().await?;

    Ok(HttpResponse::Ok().json(stats))
}
