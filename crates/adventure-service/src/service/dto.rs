//! 服务层数据传输对象定义

use serde::{Deserialize, Serialize};

use crate::models::{Person, Redemption, Theme};

/// 兑换活动请求
///
/// current_balance 与 activity_cost 由调用方提供（既有契约），
/// 服务端会以存储中的权威值做最终判定。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemActivityRequest {
    pub person_id: String,
    pub activity_id: String,
    pub current_balance: i64,
    pub activity_cost: i64,
}

impl RedeemActivityRequest {
    pub fn new(
        person_id: impl Into<String>,
        activity_id: impl Into<String>,
        current_balance: i64,
        activity_cost: i64,
    ) -> Self {
        Self {
            person_id: person_id.into(),
            activity_id: activity_id.into(),
            current_balance,
            activity_cost,
        }
    }
}

/// 兑换活动响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemActivityResponse {
    pub success: bool,
    pub new_balance: i64,
    pub redemption_id: String,
}

impl RedeemActivityResponse {
    /// 创建成功响应
    pub fn applied(new_balance: i64, redemption_id: String) -> Self {
        Self {
            success: true,
            new_balance,
            redemption_id,
        }
    }
}

/// 人员页面聚合
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPageDto {
    pub person: Person,
    /// 主题可能缺失（未知主题键且 slug 前缀无映射），序列化为 null
    pub theme: Option<&'static Theme>,
    pub redemptions: Vec<Redemption>,
}

/// 提交冒险请求
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequestDto {
    pub person_id: String,
    pub person_name: String,
    pub request_text: String,
}

/// 提交冒险请求响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequestResponse {
    pub success: bool,
    pub request_id: String,
}
