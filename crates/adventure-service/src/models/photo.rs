//! 照片实体定义

use serde::{Deserialize, Serialize};

/// 照片
///
/// 按人员显示名归属；person 字段名沿用既有前端契约。
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    #[serde(rename = "person")]
    pub person_name: String,
    pub url: String,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}
