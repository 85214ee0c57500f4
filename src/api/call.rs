use crate::config::EnvConfig;
use crate::utils::error::{Result, SuiteError};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde_json::{json, Value};
use std::time::Duration;

/// Normalized outcome of one REST call: HTTP status plus the decoded body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub data: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Convenience accessor for a top-level body field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }
}

/// How a non-2xx response surfaces. `Strict` endpoint families error out
/// with the status embedded in the message; `Lenient` families hand the
/// error payload back to the caller as a normal `ApiResponse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    Strict,
    Lenient,
}

/// Verb used in log lines and in the substitute message for empty bodies.
/// Keeping all three grammatical forms in one place means a method declares
/// its verb once and every message stays consistent.
#[derive(Debug, Clone, Copy)]
pub enum Verb {
    Fetch,
    Create,
    Update,
    Delete,
    Ban,
    Search,
    Custom {
        base: &'static str,
        progressive: &'static str,
        past: &'static str,
    },
}

impl Verb {
    pub fn base(&self) -> &'static str {
        match self {
            Verb::Fetch => "fetch",
            Verb::Create => "create",
            Verb::Update => "update",
            Verb::Delete => "delete",
            Verb::Ban => "ban",
            Verb::Search => "search",
            Verb::Custom { base, .. } => base,
        }
    }

    pub fn progressive(&self) -> &'static str {
        match self {
            Verb::Fetch => "Fetching",
            Verb::Create => "Creating",
            Verb::Update => "Updating",
            Verb::Delete => "Deleting",
            Verb::Ban => "Banning",
            Verb::Search => "Searching",
            Verb::Custom { progressive, .. } => progressive,
        }
    }

    pub fn past(&self) -> &'static str {
        match self {
            Verb::Fetch => "fetched",
            Verb::Create => "created",
            Verb::Update => "updated",
            Verb::Delete => "deleted",
            Verb::Ban => "banned",
            Verb::Search => "searched",
            Verb::Custom { past, .. } => past,
        }
    }
}

/// One REST call, built up method-chain style and handed to
/// [`ApiClient::send`].
#[derive(Debug, Clone)]
pub struct ApiCall {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
    headers: Vec<(String, String)>,
    user_id: Option<String>,
    resource: String,
    verb: Verb,
    mode: FailureMode,
}

impl ApiCall {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            method,
            resource: path.trim_start_matches('/').to_string(),
            path,
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
            user_id: None,
            verb: Verb::Fetch,
            mode: FailureMode::Strict,
        }
    }

    /// Resource noun and verb used for logging and substitute messages.
    pub fn describe(mut self, resource: &str, verb: Verb) -> Self {
        self.resource = resource.to_string();
        self.verb = verb;
        self
    }

    /// Appends a query pair; `None` values are omitted entirely rather than
    /// rendered empty.
    pub fn query(mut self, key: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.query.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Caller-supplied header; wins over the defaults the client attaches.
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    /// Attribute this call to a user via the `user-id` header.
    pub fn as_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn lenient(mut self) -> Self {
        self.mode = FailureMode::Lenient;
        self
    }

    pub fn mode(&self) -> FailureMode {
        self.mode
    }
}

/// HTTP call helper shared by every API client. Owns the base URL, the
/// reqwest client and the default attribution user.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    default_user_id: Option<String>,
}

fn header_pair(key: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let name =
        HeaderName::from_bytes(key.as_bytes()).map_err(|e| SuiteError::InvalidConfigValue {
            field: format!("header '{}'", key),
            value: key.to_string(),
            reason: e.to_string(),
        })?;
    let value = HeaderValue::from_str(value).map_err(|e| SuiteError::InvalidConfigValue {
        field: format!("header '{}'", key),
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    Ok((name, value))
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            default_user_id: None,
        }
    }

    pub fn from_env(env: &EnvConfig) -> Self {
        Self::new(env.api_base_url.clone()).with_default_user(env.default_user_id.clone())
    }

    pub fn with_default_user(mut self, user_id: impl Into<String>) -> Self {
        self.default_user_id = Some(user_id.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn send(&self, call: ApiCall) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), call.path);
        tracing::info!("{} {}...", call.verb.progressive(), call.resource);

        let mut headers = HeaderMap::new();
        if call.body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        if let Some(user) = call.user_id.as_deref().or(self.default_user_id.as_deref()) {
            let (name, value) = header_pair("user-id", user)?;
            headers.insert(name, value);
        }
        // Caller-supplied headers land last: insert() replaces, so an
        // explicit Content-Type or user-id override wins.
        for (key, value) in &call.headers {
            let (name, value) = header_pair(key, value)?;
            headers.insert(name, value);
        }

        let mut request = self.http.request(call.method.clone(), &url).headers(headers);
        if !call.query.is_empty() {
            request = request.query(&call.query);
        }
        if let Some(body) = &call.body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if (200..300).contains(&status) {
            let data = if text.trim().is_empty() {
                // Delete-style endpoints answer with an empty body.
                json!({
                    "message": format!("{} {} successfully", call.resource, call.verb.past())
                })
            } else {
                serde_json::from_str(&text).unwrap_or(Value::String(text))
            };
            tracing::info!(
                "✅ Successfully {} {} (status {})",
                call.verb.past(),
                call.resource,
                status
            );
            return Ok(ApiResponse { status, data });
        }

        tracing::error!(
            "❌ Failed to {} {}, status: {}",
            call.verb.base(),
            call.resource,
            status
        );
        match call.mode {
            FailureMode::Strict => Err(SuiteError::UnexpectedStatus {
                resource: call.resource,
                action: call.verb.base().to_string(),
                status,
                body: text,
            }),
            FailureMode::Lenient => {
                let data = serde_json::from_str(&text).unwrap_or(Value::String(text));
                Ok(ApiResponse { status, data })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_omits_none_values() {
        let call = ApiCall::new(Method::GET, "/cbed")
            .query("full", Some(true))
            .query("page", None::<u32>)
            .query("pageSize", None::<u32>);
        assert_eq!(call.query, vec![("full".to_string(), "true".to_string())]);
    }

    #[test]
    fn query_keeps_declaration_order() {
        let call = ApiCall::new(Method::GET, "/cbed")
            .query("full", Some(true))
            .query("page", Some(1))
            .query("pageSize", Some(20));
        let keys: Vec<&str> = call.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["full", "page", "pageSize"]);
    }

    #[test]
    fn default_resource_comes_from_path() {
        let call = ApiCall::new(Method::GET, "/orders");
        assert_eq!(call.resource, "orders");
    }

    #[test]
    fn verb_forms() {
        assert_eq!(Verb::Delete.past(), "deleted");
        assert_eq!(Verb::Create.progressive(), "Creating");
        let custom = Verb::Custom {
            base: "dispatch",
            progressive: "Dispatching",
            past: "dispatched",
        };
        assert_eq!(custom.base(), "dispatch");
    }

    #[test]
    fn lenient_flag() {
        let call = ApiCall::new(Method::GET, "/monitoring/health").lenient();
        assert_eq!(call.mode(), FailureMode::Lenient);
    }
}
