//! 照片仓储

use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::PhotoRepositoryTrait;
use crate::error::Result;
use crate::models::Photo;

/// 照片仓储
pub struct PhotoRepository {
    pool: PgPool,
}

impl PhotoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoRepositoryTrait for PhotoRepository {
    /// 按人员显示名查询照片（大小写不敏感）
    async fn list_for_person(&self, person_name: &str) -> Result<Vec<Photo>> {
        let photos = sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, person_name, url, caption
            FROM photos
            WHERE LOWER(person_name) = LOWER($1)
            ORDER BY id ASC
            "#,
        )
        .bind(person_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(photos)
    }
}
