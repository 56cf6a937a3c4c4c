//! 活动实体定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 可兑换的活动
///
/// exclude 为排除名单：名单中的人员（大小写不敏感）看不到
/// 也不应兑换此活动。存储层在读取时已完成形状校验。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    /// 兑换成本（非负）
    pub cost: i64,
    pub description: String,
    /// 展示用 emoji
    pub icon: String,
    /// 排除名单（人员显示名）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
