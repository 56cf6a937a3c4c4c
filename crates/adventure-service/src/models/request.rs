//! 冒险请求实体定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 请求状态
///
/// 本服务只以 Pending 入库；后续状态流转由外部完成。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
pub enum RequestStatus {
    /// 待处理
    #[default]
    Pending,
    /// 已批准
    Approved,
    /// 已完成
    Completed,
}

/// 冒险请求
///
/// 与人员绑定的不可变自由文本提交。
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AdventureRequest {
    pub id: String,
    pub person_id: String,
    pub person_name: String,
    pub request: String,
    pub status: RequestStatus,
    pub submitted_at: DateTime<Utc>,
}

impl AdventureRequest {
    /// 是否仍待处理
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(RequestStatus::Pending).unwrap(),
            "pending"
        );
        assert_eq!(
            serde_json::to_value(RequestStatus::Approved).unwrap(),
            "approved"
        );
        assert_eq!(
            serde_json::to_value(RequestStatus::Completed).unwrap(),
            "completed"
        );
    }

    #[test]
    fn test_is_pending() {
        let request = AdventureRequest {
            id: "AR20251225120000000001".to_string(),
            person_id: "p1".to_string(),
            person_name: "Ella".to_string(),
            request: "Go see a musical".to_string(),
            status: RequestStatus::Pending,
            submitted_at: Utc::now(),
        };
        assert!(request.is_pending());
    }
}
