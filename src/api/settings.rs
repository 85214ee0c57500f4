use super::call::{ApiCall, ApiClient, ApiResponse, Verb};
use crate::utils::error::Result;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

/// Application settings are keyed by section name, not by numeric id, so
/// this client talks to the call helper directly.
pub struct SettingsApi {
    api: Arc<ApiClient>,
}

impl SettingsApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn get_all(&self) -> Result<ApiResponse> {
        let call = ApiCall::new(Method::GET, "/settings").describe("settings", Verb::Fetch);
        self.api.send(call).await
    }

    pub async fn section(&self, name: &str) -> Result<ApiResponse> {
        let call = ApiCall::new(Method::GET, format!("/settings/{}", name))
            .describe("settings section", Verb::Fetch);
        self.api.send(call).await
    }

    pub async fn update_section(
        &self,
        name: &str,
        payload: Value,
        user_id: &str,
    ) -> Result<ApiResponse> {
        let call = ApiCall::new(Method::PUT, format!("/settings/{}", name))
            .describe("settings section", Verb::Update)
            .json(payload)
            .as_user(user_id);
        self.api.send(call).await
    }
}
