//! 冒险请求仓储

use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::RequestRepositoryTrait;
use crate::error::Result;
use crate::models::AdventureRequest;

/// 冒险请求仓储
pub struct RequestRepository {
    pool: PgPool,
}

impl RequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RequestRepositoryTrait for RequestRepository {
    /// 追加一条请求（只增不改）
    async fn append(&self, request: &AdventureRequest) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO adventure_requests (id, person_id, person_name, request, status, submitted_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&request.id)
        .bind(&request.person_id)
        .bind(&request.person_name)
        .bind(&request.request)
        .bind(request.status)
        .bind(request.submitted_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// 查询某人的请求历史（新到旧）
    async fn list_by_person(&self, person_id: &str) -> Result<Vec<AdventureRequest>> {
        let requests = sqlx::query_as::<_, AdventureRequest>(
            r#"
            SELECT id, person_id, person_name, request, status, submitted_at
            FROM adventure_requests
            WHERE person_id = $1
            ORDER BY submitted_at DESC
            "#,
        )
        .bind(person_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }
}
