//! 数据库仓储层
//!
//! 提供所有实体的数据访问接口，封装 SQL 操作细节。
//!
//! ## 设计原则
//!
//! - 仓储只负责数据持久化，不包含业务逻辑
//! - 使用 SQLx 进行类型安全的数据库操作，列名显式列出
//! - 定义 trait 接口以支持 mock 测试和存储后端替换
//! - "校验-扣减-记账"作为单个事务性操作由兑换仓储提供

mod activity_repo;
mod person_repo;
mod photo_repo;
mod redemption_repo;
mod request_repo;
mod traits;

pub use activity_repo::ActivityRepository;
pub use person_repo::PersonRepository;
pub use photo_repo::PhotoRepository;
pub use redemption_repo::RedemptionRepository;
pub use request_repo::RequestRepository;
pub use traits::*;
