use super::call::{ApiClient, ApiResponse};
use super::resource::ResourceClient;
use crate::utils::error::Result;
use std::sync::Arc;

/// Audit trail reads. Lenient family: scenarios inspect the trail for
/// diagnostics and must not fail just because the trail is unavailable.
pub struct AuditApi {
    res: ResourceClient,
}

impl AuditApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            res: ResourceClient::new(api, "/audit", "audit records").lenient(),
        }
    }

    pub async fn get_all(&self, page: Option<u32>, page_size: Option<u32>) -> Result<ApiResponse> {
        self.res.get_all(false, page, page_size).await
    }

    pub async fn for_entity(&self, entity: &str, entity_id: i64) -> Result<ApiResponse> {
        self.res
            .get_sub(
                "entries",
                &[
                    ("entity", Some(entity.to_string())),
                    ("entityId", Some(entity_id.to_string())),
                ],
            )
            .await
    }

    pub async fn by_user(&self, user_id: &str) -> Result<ApiResponse> {
        self.res
            .get_sub("entries", &[("userId", Some(user_id.to_string()))])
            .await
    }
}
