//! 장바구니 서비스
//!
//! 모든 작업은 토큰 소유자 본인의 장바구니로 제한됩니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    core::errors::AppError,
    domain::dto::carts::{AddCartItemRequest, CartItemResponse, CartQuery},
    domain::dto::common::{DeleteResultResponse, InsertResultResponse},
    domain::models::auth::AuthenticatedUser,
    repositories::carts::cart_repo::CartRepository,
    utils::{object_id::parse_object_id, string_utils::{clean_optional_string, normalize_email}},
};

#[service(name = "cart")]
pub struct CartService {
    cart_repo: Arc<CartRepository>,
}

impl CartService {
    /// `email` 쿼리가 없으면 400, 본인이 아니면 403입니다.
    pub async fn list_items(&self, user: &AuthenticatedUser, query: CartQuery) -> Result<Vec<CartItemResponse>, AppError> {
        let email = clean_optional_string(query.email)
            .ok_or_else(|| AppError::ValidationError("email 쿼리 파라미터가 필요합니다".to_string()))?;
        user.ensure_owner(&email)?;

        let items = self.cart_repo.find_by_email(&normalize_email(&email)).await?;
        Ok(items.into_iter().map(CartItemResponse::from).collect())
    }

    pub async fn add_item(&self, user: &AuthenticatedUser, request: AddCartItemRequest) -> Result<InsertResultResponse, AppError> {
        user.ensure_owner(&request.email)?;

        let item = request.into_entity();
        let result = self.cart_repo.insert(&item).await?;

        log::debug!("장바구니 추가: {} -> {}", item.email, item.laptop_item_id);
        Ok(result.into())
    }

    /// 본인 장바구니의 항목만 삭제됩니다. 다른 사용자의 항목이면 `deletedCount`가 0입니다.
    pub async fn remove_item(&self, user: &AuthenticatedUser, id: &str) -> Result<DeleteResultResponse, AppError> {
        let object_id = parse_object_id(id)?;
        let result = self.cart_repo
            .delete_owned(&object_id, &normalize_email(&user.email))
            .await?;

        Ok(result.into())
    }
}
