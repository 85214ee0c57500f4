use super::call::{ApiClient, ApiResponse, Verb};
use super::resource::ResourceClient;
use crate::utils::error::Result;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct QualityApi {
    res: ResourceClient,
}

impl QualityApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            res: ResourceClient::new(api, "/quality", "quality record"),
        }
    }

    pub async fn inspections(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<ApiResponse> {
        self.res.get_all(false, page, page_size).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse> {
        self.res.get_by_id(id).await
    }

    pub async fn record_defect(&self, payload: Value, user_id: &str) -> Result<ApiResponse> {
        self.res.create(payload, Some(user_id)).await
    }

    pub async fn resolve_defect(
        &self,
        id: i64,
        resolution: &str,
        user_id: &str,
    ) -> Result<ApiResponse> {
        self.res
            .action(
                id,
                "resolve",
                Some(json!({ "resolution": resolution })),
                Verb::Custom {
                    base: "resolve",
                    progressive: "Resolving",
                    past: "resolved",
                },
                Some(user_id),
            )
            .await
    }
}
