use super::call::{ApiClient, ApiResponse};
use super::resource::ResourceClient;
use crate::utils::error::Result;
use serde_json::Value;
use std::sync::Arc;

pub struct ContactsApi {
    res: ResourceClient,
}

impl ContactsApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            res: ResourceClient::new(api, "/contacts", "contact"),
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

    pub async fn update(&self, id: i64, payload: Value, user_id: &str) -> Result<ApiResponse> {
        self.res.update(id, payload, Some(user_id)).await
    }

    pub async fn delete(&self, id: i64, user_id: &str) -> Result<ApiResponse> {
        self.res.delete(id, Some(user_id)).await
    }

    /// Free-text search across name, phone and organization.
    pub async fn search(&self, query: &str) -> Result<ApiResponse> {
        self.res
            .get_sub("search", &[("q", Some(query.to_string()))])
            .await
    }
}
