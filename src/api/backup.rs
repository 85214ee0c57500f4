use super::call::{ApiCall, ApiClient, ApiResponse, Verb};
use super::resource::ResourceClient;
use crate::utils::error::Result;
use reqwest::Method;
use std::sync::Arc;

pub struct BackupApi {
    res: ResourceClient,
}

impl BackupApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            res: ResourceClient::new(api, "/backup", "backup").lenient(),
        }
    }

    pub async fn get_all(&self, page: Option<u32>, page_size: Option<u32>) -> Result<ApiResponse> {
        self.res.get_all(false, page, page_size).await
    }

    pub async fn latest(&self) -> Result<ApiResponse> {
        self.res.get_sub("latest", &[]).await
    }

    /// Kicks off a backup run; the application answers 202 with a job id.
    pub async fn trigger(&self, user_id: &str) -> Result<ApiResponse> {
        let call = ApiCall::new(Method::POST, "/backup/run")
            .describe(
                "backup",
                Verb::Custom {
                    base: "trigger",
                    progressive: "Triggering",
                    past: "triggered",
                },
            )
            .as_user(user_id)
            .lenient();
        self.res.api().send(call).await
    }
}
