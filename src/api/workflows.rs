use super::call::{ApiClient, ApiResponse, Verb};
use super::resource::ResourceClient;
use crate::utils::error::Result;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct WorkflowsApi {
    res: ResourceClient,
}

impl WorkflowsApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            res: ResourceClient::new(api, "/workflows", "workflow"),
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

    pub async fn start(&self, id: i64, user_id: &str) -> Result<ApiResponse> {
        self.res
            .action(
                id,
                "start",
                None,
                Verb::Custom {
                    base: "start",
                    progressive: "Starting",
                    past: "started",
                },
                Some(user_id),
            )
            .await
    }

    pub async fn complete_task(
        &self,
        workflow_id: i64,
        task_id: i64,
        user_id: &str,
    ) -> Result<ApiResponse> {
        self.res
            .action(
                workflow_id,
                "tasks/complete",
                Some(json!({ "taskId": task_id })),
                Verb::Custom {
                    base: "complete task in",
                    progressive: "Completing task in",
                    past: "task-completed",
                },
                Some(user_id),
            )
            .await
    }
}
