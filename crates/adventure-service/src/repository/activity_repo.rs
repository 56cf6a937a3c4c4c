//! 活动仓储
//!
//! 提供活动记录的数据访问。exclude 列以 JSONB 存储，
//! 读取时显式校验形状，损坏的记录以 MalformedRecord 快速失败，
//! 绝不静默误读。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;

use super::traits::ActivityRepositoryTrait;
use crate::error::{Result, ServiceError};
use crate::models::Activity;

/// 活动行（数据库形状）
#[derive(sqlx::FromRow)]
struct ActivityRow {
    id: String,
    name: String,
    cost: i64,
    description: String,
    icon: String,
    exclude: Option<Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ActivityRow {
    /// 行 -> 领域模型，校验存储层无法表达的约束
    fn into_activity(self) -> Result<Activity> {
        if self.cost < 0 {
            return Err(ServiceError::MalformedRecord {
                entity: "activity",
                reason: format!("id={} 的成本为负: {}", self.id, self.cost),
            });
        }

        let exclude = match self.exclude {
            None => Vec::new(),
            Some(value) => serde_json::from_value::<Vec<String>>(value).map_err(|e| {
                ServiceError::MalformedRecord {
                    entity: "activity",
                    reason: format!("id={} 的 exclude 不是字符串数组: {}", self.id, e),
                }
            })?,
        };

        Ok(Activity {
            id: self.id,
            name: self.name,
            cost: self.cost,
            description: self.description,
            icon: self.icon,
            exclude,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// 活动仓储
pub struct ActivityRepository {
    pool: PgPool,
}

impl ActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepositoryTrait for ActivityRepository {
    /// 获取单个活动
    async fn get(&self, id: &str) -> Result<Option<Activity>> {
        let row = sqlx::query_as::<_, ActivityRow>(
            r#"
            SELECT id, name, cost, description, icon, exclude, created_at, updated_at
            FROM activities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ActivityRow::into_activity).transpose()
    }

    /// 列出全部活动
    async fn list(&self) -> Result<Vec<Activity>> {
        let rows = sqlx::query_as::<_, ActivityRow>(
            r#"
            SELECT id, name, cost, description, icon, exclude, created_at, updated_at
            FROM activities
            ORDER BY cost ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ActivityRow::into_activity).collect()
    }
}
