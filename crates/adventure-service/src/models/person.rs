//! 人员实体定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 人员
///
/// 每位家庭成员一条记录。balance 是唯一可变字段，
/// 只能经由兑换服务的原子扣减发生变化。
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    /// 显示名称
    pub name: String,
    /// 积分余额（Adventure Bucks），永不为负
    pub balance: i64,
    /// 主题键（指向静态主题表）
    pub theme: String,
    /// 不可猜测的 URL 标识，代替登录认证
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Person {
    /// 余额是否足以覆盖给定成本
    pub fn can_afford(&self, cost: i64) -> bool {
        self.balance >= cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_person(balance: i64) -> Person {
        Person {
            id: "p1".to_string(),
            name: "Riley".to_string(),
            balance,
            theme: "aviation".to_string(),
            slug: "riley-a8f3k2".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_can_afford() {
        let person = sample_person(300);
        assert!(person.can_afford(300));
        assert!(person.can_afford(299));
        assert!(!person.can_afford(301));
        assert!(person.can_afford(0));
    }

    #[test]
    fn test_serialization_is_camel_case() {
        let person = sample_person(1000);
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["name"], "Riley");
        assert_eq!(json["balance"], 1000);
        assert_eq!(json["slug"], "riley-a8f3k2");
        assert!(json.get("createdAt").is_some());
    }
}
