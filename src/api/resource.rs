use super::call::{ApiCall, ApiClient, ApiResponse, FailureMode, Verb};
use crate::utils::error::Result;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

/// Generic client for one REST resource area. Every per-module API client
/// delegates its CRUD surface here so request construction lives in exactly
/// one place.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    api: Arc<ApiClient>,
    base_path: String,
    noun: String,
    mode: FailureMode,
}

impl ResourceClient {
    pub fn new(api: Arc<ApiClient>, base_path: &str, noun: &str) -> Self {
        Self {
            api,
            base_path: base_path.trim_end_matches('/').to_string(),
            noun: noun.to_string(),
            mode: FailureMode::Strict,
        }
    }

    /// Switch the whole family to lenient non-2xx handling.
    pub fn lenient(mut self) -> Self {
        self.mode = FailureMode::Lenient;
        self
    }

    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    pub fn noun(&self) -> &str {
        &self.noun
    }

    fn prepare(&self, method: Method, path: String, verb: Verb) -> ApiCall {
        let call = ApiCall::new(method, path).describe(&self.noun, verb);
        match self.mode {
            FailureMode::Lenient => call.lenient(),
            FailureMode::Strict => call,
        }
    }

    fn attributed(call: ApiCall, user_id: Option<&str>) -> ApiCall {
        match user_id {
            Some(user) => call.as_user(user),
            None => call,
        }
    }

    pub async fn create(&self, payload: Value, user_id: Option<&str>) -> Result<ApiResponse> {
        let call = self
            .prepare(Method::POST, self.base_path.clone(), Verb::Create)
            .json(payload);
        self.api.send(Self::attributed(call, user_id)).await
    }

    pub async fn get_all(
        &self,
        full: bool,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<ApiResponse> {
        let call = self
            .prepare(Method::GET, self.base_path.clone(), Verb::Fetch)
            .query("full", Some(full))
            .query("page", page)
            .query("pageSize", page_size);
        self.api.send(call).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse> {
        let call = self.prepare(
            Method::GET,
            format!("{}/{}", self.base_path, id),
            Verb::Fetch,
        );
        self.api.send(call).await
    }

    pub async fn update(
        &self,
        id: i64,
        payload: Value,
        user_id: Option<&str>,
    ) -> Result<ApiResponse> {
        let call = self
            .prepare(
                Method::PUT,
                format!("{}/{}", self.base_path, id),
                Verb::Update,
            )
            .json(payload);
        self.api.send(Self::attributed(call, user_id)).await
    }

    pub async fn delete(&self, id: i64, user_id: Option<&str>) -> Result<ApiResponse> {
        let call = self.prepare(
            Method::DELETE,
            format!("{}/{}", self.base_path, id),
            Verb::Delete,
        );
        self.api.send(Self::attributed(call, user_id)).await
    }

    /// POST `{base}/{id}/{action}`: ban, dispatch, clone and friends.
    pub async fn action(
        &self,
        id: i64,
        action: &str,
        payload: Option<Value>,
        verb: Verb,
        user_id: Option<&str>,
    ) -> Result<ApiResponse> {
        let mut call = self.prepare(
            Method::POST,
            format!("{}/{}/{}", self.base_path, id, action),
            verb,
        );
        if let Some(payload) = payload {
            call = call.json(payload);
        }
        self.api.send(Self::attributed(call, user_id)).await
    }

    /// GET `{base}/{suffix}` with optional query pairs, for list-style
    /// endpoints that hang off the resource root.
    pub async fn get_sub(
        &self,
        suffix: &str,
        query: &[(&str, Option<String>)],
    ) -> Result<ApiResponse> {
        let mut call = self.prepare(
            Method::GET,
            format!("{}/{}", self.base_path, suffix.trim_start_matches('/')),
            Verb::Fetch,
        );
        for (key, value) in query {
            call = call.query(key, value.clone());
        }
        self.api.send(call).await
    }
}
