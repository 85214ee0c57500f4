use super::call::{ApiClient, ApiResponse, Verb};
use super::resource::ResourceClient;
use crate::utils::error::Result;
use serde_json::{json, Value};
use std::sync::Arc;

/// Tool crib: issue and return of instruments against employees.
pub struct ToolsApi {
    res: ResourceClient,
}

impl ToolsApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            res: ResourceClient::new(api, "/tools", "tool"),
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

    pub async fn delete(&self, id: i64, user_id: &str) -> Result<ApiResponse> {
        self.res.delete(id, Some(user_id)).await
    }

    pub async fn issue_tool(
        &self,
        id: i64,
        employee_id: i64,
        user_id: &str,
    ) -> Result<ApiResponse> {
        self.res
            .action(
                id,
                "issue",
                Some(json!({ "employeeId": employee_id })),
                Verb::Custom {
                    base: "issue",
                    progressive: "Issuing",
                    past: "issued",
                },
                Some(user_id),
            )
            .await
    }

    pub async fn return_tool(&self, id: i64, user_id: &str) -> Result<ApiResponse> {
        self.res
            .action(
                id,
                "return",
                None,
                Verb::Custom {
                    base: "return",
                    progressive: "Returning",
                    past: "returned",
                },
                Some(user_id),
            )
            .await
    }
}
