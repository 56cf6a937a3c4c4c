//! 仓储 Trait 定义
//!
//! 定义仓储接口，便于服务层依赖抽象而非具体实现，支持 mock 测试，
//! 也让持久化后端可以整体替换而不触及兑换逻辑。

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{Activity, AdventureRequest, Person, Photo, Redemption};

/// 余额扣减结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeductOutcome {
    /// 扣减成功，携带新余额
    Applied { new_balance: i64 },
    /// 余额不足，未发生任何写入；携带当前权威余额
    Insufficient { balance: i64 },
    /// 人员不存在
    PersonMissing,
}

/// 人员仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepositoryTrait: Send + Sync {
    async fn get_by_slug(&self, slug: &str) -> Result<Option<Person>>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Person>>;
}

/// 活动仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityRepositoryTrait: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<Activity>>;
    async fn list(&self) -> Result<Vec<Activity>>;
}

/// 兑换仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedemptionRepositoryTrait: Send + Sync {
    /// 原子化的"校验-扣减-记账"
    ///
    /// 在单个事务内：仅当余额足够时扣减余额，并追加账本行。
    /// 对同一人员的并发调用按余额行串行化，余额不足时不产生任何写入。
    async fn deduct_and_record(
        &self,
        person_id: &str,
        activity_id: &str,
        cost: i64,
        redemption_id: &str,
        redeemed_at: DateTime<Utc>,
    ) -> Result<DeductOutcome>;

    async fn list_by_person(&self, person_id: &str) -> Result<Vec<Redemption>>;
}

/// 照片仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoRepositoryTrait: Send + Sync {
    async fn list_for_person(&self, person_name: &str) -> Result<Vec<Photo>>;
}

/// 冒险请求仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RequestRepositoryTrait: Send + Sync {
    async fn append(&self, request: &AdventureRequest) -> Result<()>;
    async fn list_by_person(&self, person_id: &str) -> Result<Vec<AdventureRequest>>;
}
