//! 人员仓储
//!
//! 提供人员记录的数据访问。余额变更不在此处——
//! 那是兑换仓储事务的一部分。

use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::PersonRepositoryTrait;
use crate::error::Result;
use crate::models::Person;

/// 人员仓储
pub struct PersonRepository {
    pool: PgPool,
}

impl PersonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonRepositoryTrait for PersonRepository {
    /// 按 slug 查找人员
    async fn get_by_slug(&self, slug: &str) -> Result<Option<Person>> {
        let person = sqlx::query_as::<_, Person>(
            r#"
            SELECT id, name, balance, theme, slug, created_at, updated_at
            FROM people
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(person)
    }

    /// 按 ID 查找人员
    async fn get_by_id(&self, id: &str) -> Result<Option<Person>> {
        let person = sqlx::query_as::<_, Person>(
            r#"
            SELECT id, name, balance, theme, slug, created_at, updated_at
            FROM people
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(person)
    }
}
