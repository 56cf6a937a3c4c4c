//! 兑换账本实体定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 兑换事实（账本行）
///
/// 只追加，从不更新或删除。余额以人员记录为准，
/// 账本不用于重放推导余额。
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Redemption {
    pub id: String,
    pub person_id: String,
    pub activity_id: String,
    pub redeemed_at: DateTime<Utc>,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
