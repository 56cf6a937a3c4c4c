//! 领域模型定义
//!
//! 所有实体的结构体与枚举。余额类字段统一用 i64，
//! 标识沿用外部系统的字符串形式。

mod activity;
mod person;
mod photo;
mod redemption;
mod request;
mod theme;

pub use activity::Activity;
pub use person::Person;
pub use photo::Photo;
pub use redemption::Redemption;
pub use request::{AdventureRequest, RequestStatus};
pub use theme::{THEMES, Theme, theme_by_id, theme_for_slug};
