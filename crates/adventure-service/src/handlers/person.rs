//! 人员页面 API 处理器

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use crate::{error::ServiceError, service::dto::PersonPageDto, state::AppState};

/// 人员页面数据
///
/// GET /person/{slug}
///
/// 返回人员、主题与兑换历史；未知 slug 返回 404。
#[instrument(skip(state))]
pub async fn get_person(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PersonPageDto>, ServiceError> {
    let page = state.query.person_page(&slug).await?;
    Ok(Json(page))
}
