//! 兑换仓储
//!
//! 提供账本查询，以及核心的"校验-扣减-记账"事务。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::traits::{DeductOutcome, RedemptionRepositoryTrait};
use crate::error::Result;
use crate::models::Redemption;

/// 兑换仓储
pub struct RedemptionRepository {
    pool: PgPool,
}

impl RedemptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RedemptionRepositoryTrait for RedemptionRepository {
    /// 原子化的"校验-扣减-记账"
    ///
    /// 条件 UPDATE 以余额前值为判定键：`balance >= cost` 不满足时不命中任何行。
    /// 同一人员的并发兑换在行锁上串行化，第二个到达的请求会看到扣减后的余额，
    /// 余额与账本行在同一事务内落盘，不存在半完成状态。
    async fn deduct_and_record(
        &self,
        person_id: &str,
        activity_id: &str,
        cost: i64,
        redemption_id: &str,
        redeemed_at: DateTime<Utc>,
    ) -> Result<DeductOutcome> {
        let mut tx = self.pool.begin().await?;

        let updated: Option<(i64,)> = sqlx::query_as(
            r#"
            UPDATE people
            SET balance = balance - $2, updated_at = NOW()
            WHERE id = $1 AND balance >= $2
            RETURNING balance
            "#,
        )
        .bind(person_id)
        .bind(cost)
        .fetch_optional(&mut *tx)
        .await?;

        match updated {
            Some((new_balance,)) => {
                sqlx::query(
                    r#"
                    INSERT INTO redemptions (id, person_id, activity_id, redeemed_at, notes)
                    VALUES ($1, $2, $3, $4, $5)
                    "#,
                )
                .bind(redemption_id)
                .bind(person_id)
                .bind(activity_id)
                .bind(redeemed_at)
                .bind(Option::<String>::None)
                .execute(&mut *tx)
                .await?;

                tx.commit().await?;

                Ok(DeductOutcome::Applied { new_balance })
            }
            None => {
                // 区分"人不存在"与"余额不足"，两者都未产生写入
                let balance: Option<(i64,)> =
                    sqlx::query_as("SELECT balance FROM people WHERE id = $1")
                        .bind(person_id)
                        .fetch_optional(&mut *tx)
                        .await?;

                tx.rollback().await?;

                match balance {
                    Some((balance,)) => Ok(DeductOutcome::Insufficient { balance }),
                    None => Ok(DeductOutcome::PersonMissing),
                }
            }
        }
    }

    /// 查询某人的兑换历史（新到旧）
    async fn list_by_person(&self, person_id: &str) -> Result<Vec<Redemption>> {
        let redemptions = sqlx::query_as::<_, Redemption>(
            r#"
            SELECT id, person_id, activity_id, redeemed_at, notes
            FROM redemptions
            WHERE person_id = $1
            ORDER BY redeemed_at DESC
            "#,
        )
        .bind(person_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(redemptions)
    }
}
