//! # 상품 리포지토리
//!
//! 카탈로그 조회는 읽기 비중이 높으므로 목록과 단건 조회를 모두 캐싱하고,
//! 쓰기 시 해당 키를 무효화합니다.
//!
//! | 캐시 키 | 내용 |
//! |---------|------|
//! | `laptop_repository:collection` | 전체 목록 |
//! | `laptop_repository:{id}` | 단건 |

use std::sync::Arc;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::{errors::AppError, registry::Repository},
    db::Database,
    domain::entities::laptops::laptop::Laptop,
};
use super::super::CACHE_TTL_SECONDS;

#[repository(name = "laptop", collection = "laptops")]
pub struct LaptopRepository {
    db: Arc<Database>,

    redis: Arc<RedisClient>,
}

impl LaptopRepository {
    pub async fn find_all(&self) -> Result<Vec<Laptop>, AppError> {
        let cache_key = self.collection_cache_key(None);

        if let Ok(Some(cached)) = self.redis.get::<Vec<Laptop>>(&cache_key).await {
            return Ok(cached);
        }
        debug!("캐시 미스: {}", cache_key);

        let laptops: Vec<Laptop> = self.collection::<Laptop>()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.redis
            .set_with_expiry(&cache_key, &laptops, CACHE_TTL_SECONDS)
            .await;

        Ok(laptops)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Laptop>, AppError> {
        let cache_key = self.cache_key(&id.to_hex());

        if let Ok(Some(cached)) = self.redis.get::<Laptop>(&cache_key).await {
            return Ok(Some(cached));
        }

        let laptop = self.collection::<Laptop>()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref laptop) = laptop {
            let _ = self.redis
                .set_with_expiry(&cache_key, laptop, CACHE_TTL_SECONDS)
                .await;
        }

        Ok(laptop)
    }

    pub async fn insert(&self, laptop: &Laptop) -> Result<InsertOneResult, AppError> {
        let result = self.collection::<Laptop>()
            .insert_one(laptop)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.invalidate_collection_cache(None).await;

        Ok(result)
    }

    /// `update`는 `$set` 연산자 문서여야 합니다.
    pub async fn update(&self, id: &ObjectId, update: Document) -> Result<UpdateResult, AppError> {
        let result = self.collection::<Laptop>()
            .update_one(doc! { "_id": id }, update)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count > 0 {
            let _ = self.invalidate_cache(&id.to_hex()).await;
            let _ = self.invalidate_collection_cache(None).await;
        }

        Ok(result)
    }

    pub async fn delete(&self, id: &ObjectId) -> Result<DeleteResult, AppError> {
        let result = self.collection::<Laptop>()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            let _ = self.invalidate_cache(&id.to_hex()).await;
            let _ = self.invalidate_collection_cache(None).await;
        }

        Ok(result)
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        self.collection::<Laptop>()
            .estimated_document_count()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
