//! # 장바구니 리포지토리
//!
//! 장바구니는 사용자별로 자주 바뀌므로 캐싱하지 않습니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, Document}, options::IndexOptions, IndexModel};
use mongodb::results::{DeleteResult, InsertOneResult};
use singleton_macro::repository;
use crate::{
    core::errors::AppError,
    db::Database,
    domain::entities::carts::cart_item::CartItem,
};

#[repository(name = "cart", collection = "carts")]
pub struct CartRepository {
    db: Arc<Database>,
}

impl CartRepository {
    pub async fn find_by_email(&self, email: &str) -> Result<Vec<CartItem>, AppError> {
        self.collection::<CartItem>()
            .find(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn insert(&self, item: &CartItem) -> Result<InsertOneResult, AppError> {
        self.collection::<CartItem>()
            .insert_one(item)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// `email` 소유의 항목만 삭제합니다.
    pub async fn delete_owned(&self, id: &ObjectId, email: &str) -> Result<DeleteResult, AppError> {
        self.collection::<CartItem>()
            .delete_one(doc! { "_id": id, "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// `_id`가 `ids`에 포함된 `email` 소유 항목을 모두 삭제합니다.
    pub async fn delete_owned_many(&self, ids: &[ObjectId], email: &str) -> Result<DeleteResult, AppError> {
        self.collection::<CartItem>()
            .delete_many(owned_items_filter(ids, email))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .name("email_idx".to_string())
                .build())
            .build();

        self.collection::<CartItem>()
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// 결제 후 정리 대상: 요청한 ID 중 결제자 소유 항목
pub fn owned_items_filter(ids: &[ObjectId], email: &str) -> Document {
    doc! { "_id": { "$in": ids }, "email": email }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_owned_items_filter_scopes_to_email() {
        let ids = vec![ObjectId::new(), ObjectId::new()];
        let filter = owned_items_filter(&ids, "buyer@example.com");

        assert_eq!(filter.get_str("email").unwrap(), "buyer@example.com");

        let in_ids = filter.get_document("_id").unwrap().get_array("$in").unwrap();
        let expected: Vec<Bson> = ids.iter().map(|id| Bson::ObjectId(*id)).collect();
        assert_eq!(in_ids, &expected);
    }
}
