//! 只读查询服务
//!
//! 聚合人员、活动、账本、照片仓储提供页面所需的查询能力。
//! 只读路径是幂等的，对瞬时存储故障应用有界退避重试；
//! 写路径（兑换、请求受理）不经过本服务。

use std::sync::Arc;

use tracing::instrument;

use adventure_shared::retry::{RetryPolicy, retry_with_policy};

use crate::error::{Result, ServiceError};
use crate::models::{Activity, Photo, theme_by_id, theme_for_slug};
use crate::repository::{
    ActivityRepositoryTrait, PersonRepositoryTrait, PhotoRepositoryTrait,
    RedemptionRepositoryTrait,
};
use crate::service::dto::PersonPageDto;
use crate::service::eligibility;

/// 只读查询服务
pub struct QueryService<PR, AR, RR, PH>
where
    PR: PersonRepositoryTrait,
    AR: ActivityRepositoryTrait,
    RR: RedemptionRepositoryTrait,
    PH: PhotoRepositoryTrait,
{
    person_repo: Arc<PR>,
    activity_repo: Arc<AR>,
    redemption_repo: Arc<RR>,
    photo_repo: Arc<PH>,
    retry: RetryPolicy,
}

impl<PR, AR, RR, PH> QueryService<PR, AR, RR, PH>
where
    PR: PersonRepositoryTrait,
    AR: ActivityRepositoryTrait,
    RR: RedemptionRepositoryTrait,
    PH: PhotoRepositoryTrait,
{
    pub fn new(
        person_repo: Arc<PR>,
        activity_repo: Arc<AR>,
        redemption_repo: Arc<RR>,
        photo_repo: Arc<PH>,
    ) -> Self {
        Self {
            person_repo,
            activity_repo,
            redemption_repo,
            photo_repo,
            retry: RetryPolicy::for_reads(),
        }
    }

    /// 人员页面聚合：人员 + 主题 + 兑换历史
    ///
    /// 主题优先按人员记录的 theme 键解析，键未命中时回退到 slug 前缀映射。
    #[instrument(skip(self))]
    pub async fn person_page(&self, slug: &str) -> Result<PersonPageDto> {
        let person = retry_with_policy(
            &self.retry,
            "get_person_by_slug",
            ServiceError::is_retryable,
            || self.person_repo.get_by_slug(slug),
        )
        .await?
        .ok_or_else(|| ServiceError::PersonNotFound(slug.to_string()))?;

        let theme = theme_by_id(&person.theme).or_else(|| theme_for_slug(&person.slug));

        let redemptions = retry_with_policy(
            &self.retry,
            "list_redemptions_by_person",
            ServiceError::is_retryable,
            || self.redemption_repo.list_by_person(&person.id),
        )
        .await?;

        Ok(PersonPageDto {
            person,
            theme,
            redemptions,
        })
    }

    /// 活动列表，可按人员名过滤排除项
    #[instrument(skip(self))]
    pub async fn activities_for(&self, person_name: Option<&str>) -> Result<Vec<Activity>> {
        let activities = retry_with_policy(
            &self.retry,
            "list_activities",
            ServiceError::is_retryable,
            || self.activity_repo.list(),
        )
        .await?;

        Ok(match person_name {
            Some(name) => eligibility::filter_for_person(activities, name),
            None => activities,
        })
    }

    /// 某人的照片列表
    #[instrument(skip(self))]
    pub async fn photos_for(&self, person_name: &str) -> Result<Vec<Photo>> {
        retry_with_policy(
            &self.retry,
            "list_photos_for_person",
            ServiceError::is_retryable,
            || self.photo_repo.list_for_person(person_name),
        )
        .await
    }
}
