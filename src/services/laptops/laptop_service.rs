//! 상품 카탈로그 서비스

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    core::errors::AppError,
    domain::dto::common::{DeleteResultResponse, InsertResultResponse, UpdateResultResponse},
    domain::dto::laptops::{CreateLaptopRequest, LaptopResponse, UpdateLaptopRequest},
    repositories::laptops::laptop_repo::LaptopRepository,
    utils::object_id::parse_object_id,
};

#[service(name = "laptop")]
pub struct LaptopService {
    laptop_repo: Arc<LaptopRepository>,
}

impl LaptopService {
    pub async fn list_laptops(&self) -> Result<Vec<LaptopResponse>, AppError> {
        let laptops = self.laptop_repo.find_all().await?;
        Ok(laptops.into_iter().map(LaptopResponse::from).collect())
    }

    /// 단건 조회. 프런트엔드 호환을 위해 0개 또는 1개짜리 배열을 반환합니다.
    pub async fn find_laptop(&self, id: &str) -> Result<Vec<LaptopResponse>, AppError> {
        let object_id = parse_object_id(id)?;
        let laptop = self.laptop_repo.find_by_id(&object_id).await?;

        Ok(laptop.into_iter().map(LaptopResponse::from).collect())
    }

    pub async fn create_laptop(&self, request: CreateLaptopRequest) -> Result<InsertResultResponse, AppError> {
        let laptop = request.into_entity();
        let result = self.laptop_repo.insert(&laptop).await?;

        log::info!("상품 등록: {} {}", laptop.brand, laptop.model);
        Ok(result.into())
    }

    pub async fn update_laptop(&self, id: &str, request: &UpdateLaptopRequest) -> Result<UpdateResultResponse, AppError> {
        let object_id = parse_object_id(id)?;
        let update = request.to_set_document()?;
        let result = self.laptop_repo.update(&object_id, update).await?;

        log::info!("상품 수정: {} (matched={}, modified={})", id, result.matched_count, result.modified_count);
        Ok(result.into())
    }

    pub async fn delete_laptop(&self, id: &str) -> Result<DeleteResultResponse, AppError> {
        let object_id = parse_object_id(id)?;
        let result = self.laptop_repo.delete(&object_id).await?;

        log::info!("상품 삭제: {} (deleted={})", id, result.deleted_count);
        Ok(result.into())
    }
}
