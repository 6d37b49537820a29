//! # 결제 리포지토리
//!
//! 결제 내역 저장/조회와 관리자 통계용 집계 파이프라인을 담당합니다.
//! 파이프라인 문서는 순수 함수로 분리해 DB 없이 검증합니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, Bson, Document}, options::IndexOptions, IndexModel};
use mongodb::results::InsertOneResult;
use singleton_macro::repository;
use crate::{
    core::errors::AppError,
    db::Database,
    domain::dto::stats::OrderStat,
    domain::entities::payments::payment::Payment,
};

#[repository(name = "payment", collection = "payments")]
pub struct PaymentRepository {
    db: Arc<Database>,
}

impl PaymentRepository {
    /// 최신 결제가 먼저 오도록 정렬합니다.
    pub async fn find_by_email(&self, email: &str) -> Result<Vec<Payment>, AppError> {
        self.collection::<Payment>()
            .find(doc! { "email": email })
            .sort(doc! { "date": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn insert(&self, payment: &Payment) -> Result<InsertOneResult, AppError> {
        self.collection::<Payment>()
            .insert_one(payment)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        self.collection::<Payment>()
            .estimated_document_count()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 전체 결제 금액 합계. 결제가 없으면 0입니다.
    pub async fn total_revenue(&self) -> Result<f64, AppError> {
        let rows = self.aggregate(revenue_pipeline()).await?;
        Ok(extract_revenue(rows.first()))
    }

    /// 브랜드별 판매 수량/매출
    pub async fn order_stats(&self, laptops_collection: &str) -> Result<Vec<OrderStat>, AppError> {
        self.aggregate(order_stats_pipeline(laptops_collection))
            .await?
            .into_iter()
            .map(|row| {
                mongodb::bson::from_document::<OrderStat>(row)
                    .map_err(|e| AppError::InternalError(format!("주문 통계 변환 실패: {}", e)))
            })
            .collect()
    }

    async fn aggregate(&self, pipeline: Vec<Document>) -> Result<Vec<Document>, AppError> {
        self.collection::<Payment>()
            .aggregate(pipeline)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1, "date": -1 })
            .options(IndexOptions::builder()
                .name("email_date_idx".to_string())
                .build())
            .build();

        self.collection::<Payment>()
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// `{ _id: null, totalRevenue: Σ price }` 한 행을 만드는 파이프라인
pub fn revenue_pipeline() -> Vec<Document> {
    vec![doc! {
        "$group": {
            "_id": Bson::Null,
            "totalRevenue": { "$sum": "$price" },
        }
    }]
}

/// 결제의 상품 ID 목록을 풀어 상품 문서와 조인한 뒤 브랜드별로 묶습니다.
///
/// 상품 ID는 문자열로 저장되어 있으므로 `$convert`로 ObjectId로 바꾸며,
/// 변환에 실패하거나 삭제된 상품은 `$unwind`에서 제외됩니다.
pub fn order_stats_pipeline(laptops_collection: &str) -> Vec<Document> {
    vec![
        doc! { "$unwind": "$laptopItemIds" },
        doc! {
            "$addFields": {
                "laptopObjectId": {
                    "$convert": {
                        "input": "$laptopItemIds",
                        "to": "objectId",
                        "onError": Bson::Null,
                        "onNull": Bson::Null,
                    }
                }
            }
        },
        doc! {
            "$lookup": {
                "from": laptops_collection,
                "localField": "laptopObjectId",
                "foreignField": "_id",
                "as": "laptop",
            }
        },
        doc! { "$unwind": "$laptop" },
        doc! {
            "$group": {
                "_id": "$laptop.brand",
                "quantity": { "$sum": 1 },
                "revenue": { "$sum": "$laptop.price" },
            }
        },
        doc! {
            "$project": {
                "_id": 0,
                "brand": "$_id",
                "quantity": 1,
                "revenue": 1,
            }
        },
        doc! { "$sort": { "brand": 1 } },
    ]
}

/// 집계 결과 행에서 `totalRevenue`를 숫자로 꺼냅니다.
pub fn extract_revenue(row: Option<&Document>) -> f64 {
    match row.and_then(|row| row.get("totalRevenue")) {
        Some(Bson::Double(value)) => *value,
        Some(Bson::Int32(value)) => f64::from(*value),
        Some(Bson::Int64(value)) => *value as f64,
        _ => 0.0,
    }
}
