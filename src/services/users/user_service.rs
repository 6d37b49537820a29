//! # 사용자 관리 서비스
//!
//! 사용자 등록, 관리자 확인/승격, 삭제를 담당합니다.
//! 관리자 여부는 토큰이 아니라 저장된 `role`로 판단합니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    core::errors::AppError,
    domain::{
        dto::common::{AlreadyExistsResponse, DeleteResultResponse, InsertResultResponse, UpdateResultResponse},
        dto::users::{AdminStatusResponse, CreateUserRequest, UserResponse},
        models::auth::AuthenticatedUser,
    },
    repositories::users::user_repo::UserRepository,
    utils::{object_id::parse_object_id, string_utils::normalize_email},
};

/// 이미 등록된 이메일일 때의 응답 메시지
pub const USER_EXISTS_MESSAGE: &str = "user already exists";

/// 사용자 등록 결과
#[derive(Debug)]
pub enum CreateUserOutcome {
    Created(InsertResultResponse),
    AlreadyExists(AlreadyExistsResponse),
}

#[service(name = "user")]
pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.user_repo.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 저장된 사용자가 관리자인지 확인합니다. 사용자가 없으면 `false`입니다.
    pub async fn is_admin(&self, email: &str) -> Result<bool, AppError> {
        let user = self.user_repo.find_by_email(&normalize_email(email)).await?;
        Ok(user.map(|u| u.is_admin()).unwrap_or(false))
    }

    /// 본인 이메일에 대해서만 관리자 여부를 알려줍니다.
    pub async fn admin_status(&self, requester: &AuthenticatedUser, email: &str) -> Result<AdminStatusResponse, AppError> {
        requester.ensure_owner(email)?;

        Ok(AdminStatusResponse {
            admin: self.is_admin(email).await?,
        })
    }

    /// 같은 이메일이 이미 있으면 저장하지 않습니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<CreateUserOutcome, AppError> {
        let user = request.into_entity();

        if self.user_repo.find_by_email(&user.email).await?.is_some() {
            return Ok(CreateUserOutcome::AlreadyExists(AlreadyExistsResponse::new(USER_EXISTS_MESSAGE)));
        }

        match self.user_repo.insert(&user).await {
            Ok(result) => {
                log::info!("사용자 등록: {}", user.email);
                Ok(CreateUserOutcome::Created(result.into()))
            }
            // 동시 등록으로 유니크 인덱스에 걸린 경우
            Err(AppError::ConflictError(_)) => {
                Ok(CreateUserOutcome::AlreadyExists(AlreadyExistsResponse::new(USER_EXISTS_MESSAGE)))
            }
            Err(e) => Err(e),
        }
    }

    pub async fn promote_to_admin(&self, id: &str) -> Result<UpdateResultResponse, AppError> {
        let object_id = parse_object_id(id)?;
        let result = self.user_repo.promote_to_admin(&object_id).await?;

        log::info!("관리자 승격: {} (matched={})", id, result.matched_count);
        Ok(result.into())
    }

    pub async fn delete_user(&self, id: &str) -> Result<DeleteResultResponse, AppError> {
        let object_id = parse_object_id(id)?;
        let result = self.user_repo.delete(&object_id).await?;

        log::info!("사용자 삭제: {} (deleted={})", id, result.deleted_count);
        Ok(result.into())
    }
}
