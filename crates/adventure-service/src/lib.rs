//! Adventure Bucks 服务
//!
//! 家庭成员专属页面的后端：每人通过不可猜测的 slug 访问自己的主题页面，
//! 查看积分余额（Adventure Bucks）、用余额兑换活动、浏览照片、提交冒险请求。
//!
//! ## 核心功能
//!
//! - **人员查询**：按 slug 查询人员、主题和兑换历史
//! - **活动列表**：按人员过滤排除名单后的可兑换活动
//! - **余额兑换**：原子化的"校验-扣减-记账"，余额永不为负
//! - **账本记录**：每次兑换追加一条不可变账本行，支持审计追溯
//! - **冒险请求**：受理自由文本请求，以待处理状态入库
//!
//! ## 模块结构
//!
//! - `models`: 领域模型定义
//! - `error`: 错误类型定义
//! - `repository`: 数据库仓储层
//! - `service`: 业务服务层
//! - `handlers`: HTTP 处理器
//! - `routes`: 路由表
//! - `state`: 应用共享状态

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

pub use error::{Result, ServiceError};
pub use models::*;
pub use repository::{
    ActivityRepository, DeductOutcome, PersonRepository, PhotoRepository, RedemptionRepository,
    RequestRepository,
};
pub use service::{QueryService, RedemptionService, RequestService, dto};
pub use state::AppState;
