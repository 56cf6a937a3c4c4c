//! 活动可见性过滤
//!
//! 纯函数：给定活动清单和人员显示名，剔除排除名单命中该人员的活动。
//! 名单比较大小写不敏感；空名单表示对所有人可见。

use crate::models::Activity;

/// 活动对给定人员是否可见
pub fn visible_to(activity: &Activity, person_name: &str) -> bool {
    let person = person_name.to_lowercase();
    !activity
        .exclude
        .iter()
        .any(|name| name.to_lowercase() == person)
}

/// 过滤出人员可见的活动列表
pub fn filter_for_person(activities: Vec<Activity>, person_name: &str) -> Vec<Activity> {
    activities
        .into_iter()
        .filter(|activity| visible_to(activity, person_name))
        .collect()
}
