pub mod assert;
pub mod context;
pub mod runner;
pub mod step;

pub use assert::{SoftAssertions, SoftFailure};
pub use context::{ScenarioContext, TableSnapshot};
pub use runner::{
    ScenarioReport, ScenarioRunner, StepReport, StepStatus, DEFAULT_SCENARIO_TIMEOUT_SECS,
    MAX_SCENARIO_TIMEOUT_SECS,
};
pub use step::{FnStep, ScenarioStep, StepFuture};
