pub mod api;
pub mod config;
pub mod pages;
pub mod scenario;
pub mod scenarios;
pub mod ui;
pub mod utils;

pub use api::{Api, ApiCall, ApiClient, ApiResponse, FailureMode, Verb};
pub use config::{EnvConfig, RunnerConfig, SelectorMap, SuiteConfig};
pub use scenario::{
    FnStep, ScenarioContext, ScenarioReport, ScenarioRunner, ScenarioStep, SoftAssertions,
    TableSnapshot,
};
pub use ui::{CdpDriver, PageDriver};
pub use utils::error::{Result, SuiteError};
