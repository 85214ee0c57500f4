use super::call::{ApiClient, ApiResponse};
use super::resource::ResourceClient;
use crate::utils::error::Result;
use serde_json::Value;
use std::sync::Arc;

/// Document metadata records. Binary payloads never travel through the
/// suite, only their registration entries.
pub struct DocumentsApi {
    res: ResourceClient,
}

impl DocumentsApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            res: ResourceClient::new(api, "/documents", "document"),
        }
    }

    pub async fn create(&self, payload: Value, user_id: &str) -> Result<ApiResponse> {
        self.res.create(payload, Some(user_id)).await
    }

    pub async fn get_all(
        &self,
        full: bool,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<ApiResponse> {
        self.res.get_all(full, page, page_size).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse> {
        self.res.get_by_id(id).await
    }

    pub async fn delete(&self, id: i64, user_id: &str) -> Result<ApiResponse> {
        self.res.delete(id, Some(user_id)).await
    }

    pub async fn for_entity(&self, entity: &str, entity_id: i64) -> Result<ApiResponse> {
        self.res
            .get_sub(
                "by-entity",
                &[
                    ("entity", Some(entity.to_string())),
                    ("entityId", Some(entity_id.to_string())),
                ],
            )
            .await
    }
}
