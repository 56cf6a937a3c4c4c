//! 兑换 API 处理器

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;
use validator::Validate;

use crate::{
    error::ServiceError,
    service::dto::{RedeemActivityRequest, RedeemActivityResponse},
    state::AppState,
};

/// 兑换请求体
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RedeemBody {
    #[validate(length(min = 1, message = "personId 不能为空"))]
    pub person_id: String,
    #[validate(length(min = 1, message = "activityId 不能为空"))]
    pub activity_id: String,
    #[validate(range(min = 0, message = "currentBalance 不能为负"))]
    pub current_balance: i64,
    #[validate(range(min = 0, message = "activityCost 不能为负"))]
    pub activity_cost: i64,
}

/// 兑换活动
///
/// POST /redeem
///
/// 缺失或非法字段返回 400；余额不足同样是 400（请求方可修正的拒绝结果）。
#[instrument(skip(state, body))]
pub async fn redeem_activity(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<RedeemActivityResponse>, ServiceError> {
    // 手动反序列化，缺字段按 400 处理
    let body: RedeemBody = serde_json::from_value(body)
        .map_err(|e| ServiceError::Validation(format!("请求体缺失或非法字段: {}", e)))?;
    body.validate()?;

    let response = state
        .redemption
        .redeem(RedeemActivityRequest {
            person_id: body.person_id,
            activity_id: body.activity_id,
            current_balance: body.current_balance,
            activity_cost: body.activity_cost,
        })
        .await?;

    Ok(Json(response))
}
