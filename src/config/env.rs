use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use std::path::PathBuf;

/// Environment the suite runs against. All values come from process
/// environment variables so the same binaries work across stands.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// UI entry point, e.g. `http://localhost:3000`.
    pub base_url: String,
    /// REST API root, e.g. `http://localhost:4000/api`.
    pub api_base_url: String,
    /// Extra diagnostic logging in the UI helpers.
    pub debug: bool,
    /// Attributed to every mutating API call via the `user-id` header.
    pub default_user_id: String,
    /// UI credentials of the autotest account.
    pub login: String,
    pub password: String,
    /// Where screenshots and scenario reports land.
    pub artifacts_dir: PathBuf,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// `DEBUG=1` / `DEBUG=true` gates verbose diagnostics in the UI helpers.
pub fn debug_enabled() -> bool {
    matches!(
        std::env::var("DEBUG").as_deref(),
        Ok("1") | Ok("true") | Ok("TRUE")
    )
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env_or("BASE_URL", "http://localhost:3000"),
            api_base_url: env_or("API_BASE_URL", "http://localhost:4000/api"),
            debug: debug_enabled(),
            default_user_id: env_or("E2E_USER_ID", "autotest"),
            login: env_or("E2E_LOGIN", "autotest"),
            password: env_or("E2E_PASSWORD", "autotest"),
            artifacts_dir: PathBuf::from(env_or("E2E_ARTIFACTS_DIR", "./artifacts")),
        }
    }
}

impl Validate for EnvConfig {
    fn validate(&self) -> Result<()> {
        validate_url("BASE_URL", &self.base_url)?;
        validate_url("API_BASE_URL", &self.api_base_url)?;
        validate_non_empty_string("E2E_USER_ID", &self.default_user_id)?;
        validate_non_empty_string("E2E_LOGIN", &self.login)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EnvConfig {
            base_url: "http://localhost:3000".to_string(),
            api_base_url: "http://localhost:4000/api".to_string(),
            debug: false,
            default_user_id: "autotest".to_string(),
            login: "autotest".to_string(),
            password: "autotest".to_string(),
            artifacts_dir: PathBuf::from("./artifacts"),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_api_url() {
        let config = EnvConfig {
            base_url: "http://localhost:3000".to_string(),
            api_base_url: "ftp://somewhere".to_string(),
            debug: false,
            default_user_id: "autotest".to_string(),
            login: "autotest".to_string(),
            password: "autotest".to_string(),
            artifacts_dir: PathBuf::from("./artifacts"),
        };
        assert!(config.validate().is_err());
    }
}
