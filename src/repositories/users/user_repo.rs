//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션을 다루며, 관리자 확인에 쓰이는 이메일 조회 결과를
//! Redis에 캐싱합니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    config::ADMIN_ROLE,
    core::{errors::AppError, registry::Repository},
    db::Database,
    domain::entities::users::user::User,
};
use super::super::CACHE_TTL_SECONDS;

const DUPLICATE_KEY_CODE: i32 = 11000;

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    db: Arc<Database>,

    redis: Arc<RedisClient>,
}

impl UserRepository {
    fn email_cache_key(&self, email: &str) -> String {
        self.cache_key(&format!("email:{}", email))
    }

    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        self.collection::<User>()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let cache_key = self.email_cache_key(email);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }
        debug!("캐시 미스: {}", cache_key);

        let user = self.collection::<User>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            let _ = self.redis
                .set_with_expiry(&cache_key, user, CACHE_TTL_SECONDS)
                .await;
        }

        Ok(user)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 이메일 유니크 인덱스 위반은 `ConflictError`입니다.
    pub async fn insert(&self, user: &User) -> Result<InsertOneResult, AppError> {
        self.collection::<User>()
            .insert_one(user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })
    }

    /// 역할을 `"admin"`으로 설정합니다.
    pub async fn promote_to_admin(&self, id: &ObjectId) -> Result<UpdateResult, AppError> {
        let existing = self.find_by_id(id).await?;

        let result = self.collection::<User>()
            .update_one(doc! { "_id": id }, doc! { "$set": { "role": ADMIN_ROLE } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(user) = existing {
            self.evict(&user).await;
        }

        Ok(result)
    }

    pub async fn delete(&self, id: &ObjectId) -> Result<DeleteResult, AppError> {
        let existing = self.find_by_id(id).await?;

        let result = self.collection::<User>()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(user) = existing {
            self.evict(&user).await;
        }

        Ok(result)
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        self.collection::<User>()
            .estimated_document_count()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn evict(&self, user: &User) {
        let _ = self.redis.del(&self.email_cache_key(&user.email)).await;
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection::<User>()
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
