//! 冒险请求 API 处理器

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;
use validator::Validate;

use crate::{
    error::ServiceError,
    service::dto::{SubmitRequestDto, SubmitRequestResponse},
    state::AppState,
};

/// 提交请求体
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequestBody {
    #[validate(length(min = 1, message = "personId 不能为空"))]
    pub person_id: String,
    #[validate(length(min = 1, message = "personName 不能为空"))]
    pub person_name: String,
    #[validate(length(min = 1, max = 500, message = "requestText 长度必须在 1-500 个字符之间"))]
    pub request_text: String,
}

/// 提交冒险请求
///
/// POST /request
///
/// 文本超过 500 个字符或为空时返回 400，校验先于任何存储访问。
#[instrument(skip(state, body))]
pub async fn submit_request(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SubmitRequestResponse>, ServiceError> {
    // 手动反序列化，缺字段按 400 处理
    let body: SubmitRequestBody = serde_json::from_value(body)
        .map_err(|e| ServiceError::Validation(format!("请求体缺失或非法字段: {}", e)))?;
    body.validate()?;

    let response = state
        .requests
        .submit(SubmitRequestDto {
            person_id: body.person_id,
            person_name: body.person_name,
            request_text: body.request_text,
        })
        .await?;

    Ok(Json(response))
}
