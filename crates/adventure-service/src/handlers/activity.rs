//! 活动列表 API 处理器

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ServiceError, models::Activity, state::AppState};

/// 活动查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ActivityQuery {
    /// 按人员名过滤排除名单
    pub person: Option<String>,
}

/// 活动列表响应
#[derive(Debug, Serialize)]
pub struct ActivitiesResponse {
    pub activities: Vec<Activity>,
}

/// 活动列表
///
/// GET /activities?person=name
///
/// 给定 person 时剔除排除名单命中该人员的活动。
#[instrument(skip(state))]
pub async fn list_activities(
    State(state): State<AppState>,
    Query(params): Query<ActivityQuery>,
) -> Result<Json<ActivitiesResponse>, ServiceError> {
    let activities = state.query.activities_for(params.person.as_deref()).await?;
    Ok(Json(ActivitiesResponse { activities }))
}
