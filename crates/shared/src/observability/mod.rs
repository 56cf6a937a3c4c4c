//! 统一可观测性模块
//!
//! 提供日志与追踪的统一初始化，以及 HTTP 请求级别的中间件。
//! 所有服务通过单一入口点配置，确保一致的日志格式和请求关联字段。

pub mod middleware;
pub mod tracing;

pub use self::tracing::init;
