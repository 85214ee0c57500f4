use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to {action} {resource}, status: {status}, body: {body}")]
    UnexpectedStatus {
        resource: String,
        action: String,
        status: u16,
        body: String,
    },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("UI interaction failed on '{selector}': {reason}")]
    Ui { selector: String, reason: String },

    #[error("Timed out waiting for {what} after {waited_ms}ms")]
    Timeout { what: String, waited_ms: u64 },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Scenario '{scenario}': {count} soft assertion(s) failed:\n{details}")]
    SoftAssertionFailures {
        scenario: String,
        count: usize,
        details: String,
    },

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SuiteError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Api,
    Browser,
    Assertion,
    Config,
    System,
}

impl SuiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SuiteError::Http(_) | SuiteError::UnexpectedStatus { .. } | SuiteError::Json(_) => {
                ErrorCategory::Api
            }
            SuiteError::Browser(_) | SuiteError::Ui { .. } | SuiteError::Timeout { .. } => {
                ErrorCategory::Browser
            }
            SuiteError::SoftAssertionFailures { .. } => ErrorCategory::Assertion,
            SuiteError::MissingConfig { .. }
            | SuiteError::InvalidConfigValue { .. }
            | SuiteError::Toml(_) => ErrorCategory::Config,
            SuiteError::Io(_) => ErrorCategory::System,
        }
    }

    /// Exit code for the runner binary, by category.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Assertion => 1,
            ErrorCategory::Api | ErrorCategory::Browser => 2,
            ErrorCategory::Config => 3,
            ErrorCategory::System => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SuiteError::Http(e) => format!("Could not reach the application API: {}", e),
            SuiteError::UnexpectedStatus {
                resource,
                action,
                status,
                ..
            } => format!(
                "The application rejected the attempt to {} {} (HTTP {})",
                action, resource, status
            ),
            SuiteError::Browser(e) => format!("Browser automation failed: {}", e),
            SuiteError::Ui { selector, reason } => {
                format!("Could not interact with '{}': {}", selector, reason)
            }
            SuiteError::Timeout { what, waited_ms } => {
                format!("Gave up waiting for {} after {}ms", what, waited_ms)
            }
            SuiteError::MissingConfig { field } => {
                format!("Configuration is missing '{}'", field)
            }
            SuiteError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}
