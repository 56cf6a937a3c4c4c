//! 服务层
//!
//! 实现业务逻辑，协调仓储层。
//!
//! ## 模块结构
//!
//! - `dto`: 数据传输对象定义
//! - `redemption_service`: 余额兑换服务（核心写路径）
//! - `eligibility`: 活动可见性过滤（纯函数）
//! - `query_service`: 只读查询服务
//! - `request_service`: 冒险请求受理服务

pub mod dto;
pub mod eligibility;
pub mod query_service;
pub mod redemption_service;
pub mod request_service;

pub use query_service::QueryService;
pub use redemption_service::RedemptionService;
pub use request_service::RequestService;
