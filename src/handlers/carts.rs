//! # Cart Handlers
//!
//! 모든 장바구니 엔드포인트는 토큰이 필요하며 본인 데이터만 다룹니다.

use actix_web::{web, HttpResponse, get, post, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::carts::{AddCartItemRequest, CartQuery};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::carts::cart_service::CartService;

#[get("")]
pub async fn list_cart(
    user: AuthenticatedUser,
    query: web::Query<CartQuery>,
) -> Result<HttpResponse, AppError> {
    let items = CartService::instance().list_items(&user, query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(items))
}

#[post("")]
pub async fn add_to_cart(
    user: AuthenticatedUser,
    payload: web::Json<AddCartItemRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let result = CartService::instance().add_item(&user, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(result))
}

#[delete("/{cart_id}")]
pub async fn remove_from_cart(
    user: AuthenticatedUser,
    cart_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let result = CartService::instance().remove_item(&user, &cart_id).await?;

    Ok(HttpResponse::Ok().json(result))
}
