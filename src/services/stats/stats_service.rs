//! # 관리자 통계 서비스
//!
//! 대시보드용 요약 지표와 브랜드별 주문 집계를 제공합니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    core::errors::AppError,
    domain::dto::stats::{AdminStatsResponse, OrderStat},
    repositories::laptops::laptop_repo::LaptopRepository,
    repositories::payments::payment_repo::PaymentRepository,
    repositories::users::user_repo::UserRepository,
};

#[service(name = "stats")]
pub struct StatsService {
    user_repo: Arc<UserRepository>,
    laptop_repo: Arc<LaptopRepository>,
    payment_repo: Arc<PaymentRepository>,
}

impl StatsService {
    /// 문서 수는 컬렉션 메타데이터 기반 추정치입니다.
    pub async fn admin_stats(&self) -> Result<AdminStatsResponse, AppError> {
        let (users, laptop_items, orders, revenue) = futures_util::try_join!(
            self.user_repo.count(),
            self.laptop_repo.count(),
            self.payment_repo.count(),
            self.payment_repo.total_revenue(),
        )?;

        Ok(AdminStatsResponse {
            users,
            laptop_items,
            orders,
            revenue,
        })
    }

    pub async fn order_stats(&self) -> Result<Vec<OrderStat>, AppError> {
        self.payment_repo
            .order_stats(self.laptop_repo.collection_name())
            .await
    }
}
