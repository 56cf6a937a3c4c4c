//! 余额兑换服务
//!
//! 处理用余额兑换活动的核心业务逻辑，包括：
//! - 调用方提供值的前置校验（余额不足快速失败）
//! - 服务端权威成本核对
//! - 原子化的"校验-扣减-记账"（经由兑换仓储的单事务操作）
//!
//! ## 兑换流程
//!
//! 1. 前置校验 -> 2. 取权威活动 -> 3. 生成账本标识 -> 4. 事务扣减并记账
//!
//! 同一人员的并发兑换在存储层按余额行串行化：携带同一份过期余额的
//! 第二个请求会在条件扣减处被拒绝，余额永不为负。

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::error::{Result, ServiceError};
use crate::repository::{ActivityRepositoryTrait, DeductOutcome, RedemptionRepositoryTrait};
use crate::service::dto::{RedeemActivityRequest, RedeemActivityResponse};

/// 余额兑换服务
///
/// 负责兑换的完整流程。写路径不重试：没有幂等键的写操作
/// 重复执行会造成重复扣减。
pub struct RedemptionService<AR, RR>
where
    AR: ActivityRepositoryTrait,
    RR: RedemptionRepositoryTrait,
{
    activity_repo: Arc<AR>,
    redemption_repo: Arc<RR>,
}

impl<AR, RR> RedemptionService<AR, RR>
where
    AR: ActivityRepositoryTrait,
    RR: RedemptionRepositoryTrait,
{
    pub fn new(activity_repo: Arc<AR>, redemption_repo: Arc<RR>) -> Self {
        Self {
            activity_repo,
            redemption_repo,
        }
    }

    /// 用余额兑换活动
    ///
    /// 成功时返回新余额与账本行标识；余额不足是正常的被拒绝结果，
    /// 以 InsufficientBalance 返回且不产生任何写入。
    #[instrument(
        skip(self, request),
        fields(person_id = %request.person_id, activity_id = %request.activity_id)
    )]
    pub async fn redeem(&self, request: RedeemActivityRequest) -> Result<RedeemActivityResponse> {
        // 1. 调用方宣称的余额必须覆盖宣称的成本（既有契约的快速失败）
        check_affordability(request.current_balance, request.activity_cost)?;

        // 2. 服务端取权威活动，成本以存储值为准
        let activity = self
            .activity_repo
            .get(&request.activity_id)
            .await?
            .ok_or_else(|| ServiceError::ActivityNotFound(request.activity_id.clone()))?;

        if activity.cost != request.activity_cost {
            warn!(
                activity_id = %activity.id,
                supplied = request.activity_cost,
                stored = activity.cost,
                "调用方提供的活动成本与存储值不一致，以存储值为准"
            );
        }

        // 3. 生成账本标识与时间戳
        let redemption_id = generate_redemption_id();
        let redeemed_at = Utc::now();

        // 4. 原子扣减 + 记账
        let outcome = self
            .redemption_repo
            .deduct_and_record(
                &request.person_id,
                &activity.id,
                activity.cost,
                &redemption_id,
                redeemed_at,
            )
            .await?;

        match outcome {
            DeductOutcome::Applied { new_balance } => {
                info!(
                    person_id = %request.person_id,
                    activity_name = %activity.name,
                    new_balance,
                    redemption_id = %redemption_id,
                    "兑换成功"
                );
                Ok(RedeemActivityResponse::applied(new_balance, redemption_id))
            }
            DeductOutcome::Insufficient { balance } => Err(ServiceError::InsufficientBalance {
                required: activity.cost,
                available: balance,
            }),
            DeductOutcome::PersonMissing => {
                Err(ServiceError::PersonNotFound(request.person_id.clone()))
            }
        }
    }
}

/// 前置校验：调用方宣称的余额必须覆盖成本
fn check_affordability(current_balance: i64, activity_cost: i64) -> Result<()> {
    if current_balance < activity_cost {
        return Err(ServiceError::InsufficientBalance {
            required: activity_cost,
            available: current_balance,
        });
    }
    Ok(())
}

/// 生成账本行标识
///
/// 格式: R{yyyyMMddHHmmss}{6位随机数}，随机数取自 UUID v4。
fn generate_redemption_id() -> String {
    let now = Utc::now();
    let uuid = Uuid::new_v4();
    let random = uuid.as_u128() % 1_000_000;
    format!("R{}{:06}", now.format("%Y%m%d%H%M%S"), random)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;
    use crate::repository::{MockActivityRepositoryTrait, MockRedemptionRepositoryTrait};

    fn test_activity(id: &str, cost: i64) -> Activity {
        Activity {
            id: id.to_string(),
            name: "Movie Night".to_string(),
            cost,
            description: "Pick the movie".to_string(),
            icon: "🎬".to_string(),
            exclude: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(
        activity_repo: MockActivityRepositoryTrait,
        redemption_repo: MockRedemptionRepositoryTrait,
    ) -> RedemptionService<MockActivityRepositoryTrait, MockRedemptionRepositoryTrait> {
        RedemptionService::new(Arc::new(activity_repo), Arc::new(redemption_repo))
    }

    // ---- 纯函数 ----

    #[test]
    fn test_check_affordability_boundary() {
        assert!(check_affordability(300, 300).is_ok());
        assert!(check_affordability(301, 300).is_ok());

        let err = check_affordability(299, 300).unwrap_err();
        match err {
            ServiceError::InsufficientBalance {
                required,
                available,
            } => {
                assert_eq!(required, 300);
                assert_eq!(available, 299);
            }
            other => panic!("期望 InsufficientBalance，实际: {:?}", other),
        }
    }

    #[test]
    fn test_generate_redemption_id_format() {
        let id = generate_redemption_id();

        // "R" + 14 位时间戳 + 6 位随机数 = 21
        assert!(id.starts_with('R'));
        assert_eq!(id.len(), 21);
        assert!(id[1..].chars().all(|c| c.is_ascii_digit()));
    }

    // ---- 兑换流程 ----

    /// 余额 1000、成本 300：扣减成功，新余额 700，账本行引用正确的人员与活动
    #[tokio::test]
    async fn test_redeem_success() {
        let mut activity_repo = MockActivityRepositoryTrait::new();
        activity_repo
            .expect_get()
            .withf(|id| id == "a1")
            .times(1)
            .returning(|_| Ok(Some(test_activity("a1", 300))));

        let mut redemption_repo = MockRedemptionRepositoryTrait::new();
        redemption_repo
            .expect_deduct_and_record()
            .withf(|person_id, activity_id, cost, redemption_id, _at| {
                person_id == "p1" && activity_id == "a1" && *cost == 300
                    && redemption_id.starts_with('R')
            })
            .times(1)
            .returning(|_, _, _, _, _| Ok(DeductOutcome::Applied { new_balance: 700 }));

        let response = service(activity_repo, redemption_repo)
            .redeem(RedeemActivityRequest::new("p1", "a1", 1000, 300))
            .await
            .expect("redeem failed");

        assert!(response.success);
        assert_eq!(response.new_balance, 700);
        assert!(!response.redemption_id.is_empty());
    }

    /// 余额 100、成本 300：前置校验直接拒绝，不触达任何仓储
    #[tokio::test]
    async fn test_redeem_rejected_before_store_access() {
        // 不设置任何期望：mock 被调用即 panic
        let activity_repo = MockActivityRepositoryTrait::new();
        let redemption_repo = MockRedemptionRepositoryTrait::new();

        let err = service(activity_repo, redemption_repo)
            .redeem(RedeemActivityRequest::new("p1", "a1", 100, 300))
            .await
            .unwrap_err();

        match err {
            ServiceError::InsufficientBalance {
                required,
                available,
            } => {
                assert_eq!(required, 300);
                assert_eq!(available, 100);
            }
            other => panic!("期望 InsufficientBalance，实际: {:?}", other),
        }
    }

    /// 调用方余额已过期：前置校验通过，但存储层条件扣减拒绝，
    /// 返回的是权威余额而非调用方宣称的
    #[tokio::test]
    async fn test_redeem_rejected_on_stale_balance() {
        let mut activity_repo = MockActivityRepositoryTrait::new();
        activity_repo
            .expect_get()
            .returning(|_| Ok(Some(test_activity("a1", 300))));

        let mut redemption_repo = MockRedemptionRepositoryTrait::new();
        redemption_repo
            .expect_deduct_and_record()
            .times(1)
            .returning(|_, _, _, _, _| Ok(DeductOutcome::Insufficient { balance: 50 }));

        let err = service(activity_repo, redemption_repo)
            .redeem(RedeemActivityRequest::new("p1", "a1", 1000, 300))
            .await
            .unwrap_err();

        match err {
            ServiceError::InsufficientBalance {
                required,
                available,
            } => {
                assert_eq!(required, 300);
                assert_eq!(available, 50);
            }
            other => panic!("期望 InsufficientBalance，实际: {:?}", other),
        }
    }

    /// 存储中的成本为权威值：调用方报低价不奏效
    #[tokio::test]
    async fn test_stored_cost_wins_over_supplied() {
        let mut activity_repo = MockActivityRepositoryTrait::new();
        activity_repo
            .expect_get()
            .returning(|_| Ok(Some(test_activity("a1", 500))));

        let mut redemption_repo = MockRedemptionRepositoryTrait::new();
        redemption_repo
            .expect_deduct_and_record()
            .withf(|_, _, cost, _, _| *cost == 500)
            .times(1)
            .returning(|_, _, _, _, _| Ok(DeductOutcome::Applied { new_balance: 500 }));

        let response = service(activity_repo, redemption_repo)
            .redeem(RedeemActivityRequest::new("p1", "a1", 1000, 300))
            .await
            .expect("redeem failed");

        assert_eq!(response.new_balance, 500);
    }

    #[tokio::test]
    async fn test_redeem_unknown_activity() {
        let mut activity_repo = MockActivityRepositoryTrait::new();
        activity_repo.expect_get().returning(|_| Ok(None));

        let redemption_repo = MockRedemptionRepositoryTrait::new();

        let err = service(activity_repo, redemption_repo)
            .redeem(RedeemActivityRequest::new("p1", "missing", 1000, 300))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::ActivityNotFound(id) if id == "missing"));
    }

    #[tokio::test]
    async fn test_redeem_unknown_person() {
        let mut activity_repo = MockActivityRepositoryTrait::new();
        activity_repo
            .expect_get()
            .returning(|_| Ok(Some(test_activity("a1", 300))));

        let mut redemption_repo = MockRedemptionRepositoryTrait::new();
        redemption_repo
            .expect_deduct_and_record()
            .returning(|_, _, _, _, _| Ok(DeductOutcome::PersonMissing));

        let err = service(activity_repo, redemption_repo)
            .redeem(RedeemActivityRequest::new("ghost", "a1", 1000, 300))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::PersonNotFound(id) if id == "ghost"));
    }

    /// 存储故障原样上抛，不吞错也不重试
    #[tokio::test]
    async fn test_redeem_backend_failure_propagates() {
        let mut activity_repo = MockActivityRepositoryTrait::new();
        activity_repo
            .expect_get()
            .returning(|_| Ok(Some(test_activity("a1", 300))));

        let mut redemption_repo = MockRedemptionRepositoryTrait::new();
        redemption_repo
            .expect_deduct_and_record()
            .times(1)
            .returning(|_, _, _, _, _| Err(ServiceError::Database(sqlx::Error::PoolTimedOut)));

        let err = service(activity_repo, redemption_repo)
            .redeem(RedeemActivityRequest::new("p1", "a1", 1000, 300))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Database(_)));
    }
}
