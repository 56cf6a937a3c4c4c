//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use sqlx::PgPool;

use crate::repository::{
    ActivityRepository, PersonRepository, PhotoRepository, RedemptionRepository, RequestRepository,
};
use crate::service::{QueryService, RedemptionService, RequestService};

/// 基于 Postgres 仓储的查询服务
pub type PgQueryService =
    QueryService<PersonRepository, ActivityRepository, RedemptionRepository, PhotoRepository>;
/// 基于 Postgres 仓储的兑换服务
pub type PgRedemptionService = RedemptionService<ActivityRepository, RedemptionRepository>;
/// 基于 Postgres 仓储的请求受理服务
pub type PgRequestService = RequestService<PersonRepository, RequestRepository>;

/// Axum 应用共享状态
///
/// 服务通过 Arc 在 handler 间共享
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL 连接池
    pub pool: PgPool,
    pub query: Arc<PgQueryService>,
    pub redemption: Arc<PgRedemptionService>,
    pub requests: Arc<PgRequestService>,
}

impl AppState {
    /// 基于连接池装配全部仓储与服务
    pub fn new(pool: PgPool) -> Self {
        let person_repo = Arc::new(PersonRepository::new(pool.clone()));
        let activity_repo = Arc::new(ActivityRepository::new(pool.clone()));
        let redemption_repo = Arc::new(RedemptionRepository::new(pool.clone()));
        let photo_repo = Arc::new(PhotoRepository::new(pool.clone()));
        let request_repo = Arc::new(RequestRepository::new(pool.clone()));

        Self {
            query: Arc::new(QueryService::new(
                person_repo.clone(),
                activity_repo.clone(),
                redemption_repo.clone(),
                photo_repo,
            )),
            redemption: Arc::new(RedemptionService::new(activity_repo, redemption_repo)),
            requests: Arc::new(RequestService::new(person_repo, request_repo)),
            pool,
        }
    }
}
