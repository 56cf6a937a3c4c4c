//! 照片 API 处理器

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ServiceError, models::Photo, state::AppState};

/// 照片查询参数
#[derive(Debug, Default, Deserialize)]
pub struct PhotoQuery {
    pub person: Option<String>,
}

/// 照片列表响应
#[derive(Debug, Serialize)]
pub struct PhotosResponse {
    pub photos: Vec<Photo>,
}

/// 某人的照片列表
///
/// GET /photos?person=name
///
/// person 为必填参数，缺失返回 400。
#[instrument(skip(state))]
pub async fn list_photos(
    State(state): State<AppState>,
    Query(params): Query<PhotoQuery>,
) -> Result<Json<PhotosResponse>, ServiceError> {
    let person = params
        .person
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| ServiceError::Validation("缺少 person 查询参数".to_string()))?;

    let photos = state.query.photos_for(&person).await?;
    Ok(Json(PhotosResponse { photos }))
}
