//! 冒险请求受理服务
//!
//! 校验自由文本并以待处理状态入库。状态流转（批准、完成）由外部完成。

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::error::{Result, ServiceError};
use crate::models::{AdventureRequest, RequestStatus};
use crate::repository::{PersonRepositoryTrait, RequestRepositoryTrait};
use crate::service::dto::{SubmitRequestDto, SubmitRequestResponse};

/// 请求文本长度上限（按字符计）
pub const MAX_REQUEST_CHARS: usize = 500;

/// 冒险请求受理服务
pub struct RequestService<PR, RQ>
where
    PR: PersonRepositoryTrait,
    RQ: RequestRepositoryTrait,
{
    person_repo: Arc<PR>,
    request_repo: Arc<RQ>,
}

impl<PR, RQ> RequestService<PR, RQ>
where
    PR: PersonRepositoryTrait,
    RQ: RequestRepositoryTrait,
{
    pub fn new(person_repo: Arc<PR>, request_repo: Arc<RQ>) -> Self {
        Self {
            person_repo,
            request_repo,
        }
    }

    /// 受理一条冒险请求
    ///
    /// 文本校验先于任何存储访问；人员以存储记录为准，
    /// 调用方提供的名字不一致时记日志并采用存储值。
    #[instrument(skip(self, dto), fields(person_id = %dto.person_id))]
    pub async fn submit(&self, dto: SubmitRequestDto) -> Result<SubmitRequestResponse> {
        let text = validate_request_text(&dto.request_text)?;

        let person = self
            .person_repo
            .get_by_id(&dto.person_id)
            .await?
            .ok_or_else(|| ServiceError::PersonNotFound(dto.person_id.clone()))?;

        if !dto.person_name.is_empty() && dto.person_name != person.name {
            warn!(
                supplied = %dto.person_name,
                stored = %person.name,
                "调用方提供的人员名与存储值不一致，以存储值为准"
            );
        }

        let request = AdventureRequest {
            id: generate_request_id(),
            person_id: person.id.clone(),
            person_name: person.name.clone(),
            request: text.to_string(),
            status: RequestStatus::Pending,
            submitted_at: Utc::now(),
        };

        self.request_repo.append(&request).await?;

        info!(request_id = %request.id, "冒险请求已受理");

        Ok(SubmitRequestResponse {
            success: true,
            request_id: request.id,
        })
    }
}

/// 校验请求文本：去除首尾空白后非空，且不超过 500 个字符
fn validate_request_text(text: &str) -> Result<&str> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(ServiceError::Validation("请求内容不能为空".to_string()));
    }

    if trimmed.chars().count() > MAX_REQUEST_CHARS {
        return Err(ServiceError::Validation(format!(
            "请求内容过长（最多 {} 个字符）",
            MAX_REQUEST_CHARS
        )));
    }

    Ok(trimmed)
}

/// 生成请求标识
///
/// 格式: AR{yyyyMMddHHmmss}{6位随机数}
fn generate_request_id() -> String {
    let now = Utc::now();
    let uuid = Uuid::new_v4();
    let random = uuid.as_u128() % 1_000_000;
    format!("AR{}{:06}", now.format("%Y%m%d%H%M%S"), random)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::models::Person;
    use crate::repository::{MockPersonRepositoryTrait, MockRequestRepositoryTrait};

    fn test_person() -> Person {
        Person {
            id: "p1".to_string(),
            name: "Ella".to_string(),
            balance: 500,
            theme: "theater".to_string(),
            slug: "ella-77xyz".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn dto(text: &str) -> SubmitRequestDto {
        SubmitRequestDto {
            person_id: "p1".to_string(),
            person_name: "Ella".to_string(),
            request_text: text.to_string(),
        }
    }

    fn service(
        person_repo: MockPersonRepositoryTrait,
        request_repo: MockRequestRepositoryTrait,
    ) -> RequestService<MockPersonRepositoryTrait, MockRequestRepositoryTrait> {
        RequestService::new(Arc::new(person_repo), Arc::new(request_repo))
    }

    // ---- 文本校验 ----

    #[test]
    fn test_validate_request_text_trims() {
        assert_eq!(validate_request_text("  see a musical  ").unwrap(), "see a musical");
    }

    #[test]
    fn test_validate_request_text_rejects_blank() {
        assert!(validate_request_text("").is_err());
        assert!(validate_request_text("   \n\t  ").is_err());
    }

    #[test]
    fn test_validate_request_text_boundary() {
        let exactly_500: String = "x".repeat(500);
        assert!(validate_request_text(&exactly_500).is_ok());

        let too_long: String = "x".repeat(501);
        let err = validate_request_text(&too_long).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn test_generate_request_id_format() {
        let id = generate_request_id();
        assert!(id.starts_with("AR"));
        assert_eq!(id.len(), 22);
    }

    // ---- 受理流程 ----

    #[tokio::test]
    async fn test_submit_appends_pending_request() {
        let mut person_repo = MockPersonRepositoryTrait::new();
        person_repo
            .expect_get_by_id()
            .withf(|id| id == "p1")
            .returning(|_| Ok(Some(test_person())));

        let mut request_repo = MockRequestRepositoryTrait::new();
        request_repo
            .expect_append()
            .withf(|request| {
                request.person_id == "p1"
                    && request.person_name == "Ella"
                    && request.request == "Go see a musical"
                    && request.status == RequestStatus::Pending
            })
            .times(1)
            .returning(|_| Ok(()));

        let response = service(person_repo, request_repo)
            .submit(dto("  Go see a musical  "))
            .await
            .expect("submit failed");

        assert!(response.success);
        assert!(response.request_id.starts_with("AR"));
    }

    /// 501 个字符在触达存储之前就被拒绝
    #[tokio::test]
    async fn test_submit_overlong_text_rejected_before_store() {
        // 不设置任何期望：mock 被调用即 panic
        let person_repo = MockPersonRepositoryTrait::new();
        let request_repo = MockRequestRepositoryTrait::new();

        let err = service(person_repo, request_repo)
            .submit(dto(&"x".repeat(501)))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_submit_unknown_person() {
        let mut person_repo = MockPersonRepositoryTrait::new();
        person_repo.expect_get_by_id().returning(|_| Ok(None));

        let request_repo = MockRequestRepositoryTrait::new();

        let err = service(person_repo, request_repo)
            .submit(dto("anything"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::PersonNotFound(id) if id == "p1"));
    }

    /// 调用方报错误的名字时，以存储中的权威名字入库
    #[tokio::test]
    async fn test_submit_uses_stored_person_name() {
        let mut person_repo = MockPersonRepositoryTrait::new();
        person_repo
            .expect_get_by_id()
            .returning(|_| Ok(Some(test_person())));

        let mut request_repo = MockRequestRepositoryTrait::new();
        request_repo
            .expect_append()
            .withf(|request| request.person_name == "Ella")
            .times(1)
            .returning(|_| Ok(()));

        let mut submit_dto = dto("camping trip");
        submit_dto.person_name = "Somebody Else".to_string();

        let response = service(person_repo, request_repo)
            .submit(submit_dto)
            .await
            .expect("submit failed");

        assert!(response.success);
    }
}
