pub mod env;
pub mod fixtures;
pub mod selectors;
pub mod suite;

pub use env::{debug_enabled, EnvConfig};
pub use fixtures::{default_product_specs, product_specs_from_file, ProductSpec};
pub use selectors::SelectorMap;
pub use suite::{ScenarioDef, SuiteConfig, SuitePlan};

use clap::Parser;

/// CLI surface of the `mes-e2e` runner binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "mes-e2e")]
#[command(about = "End-to-end scenario runner for the MES web application")]
pub struct RunnerConfig {
    /// Scenario plan to execute.
    #[arg(long, default_value = "suite.toml")]
    pub suite: String,

    /// Only run scenarios carrying this tag.
    #[arg(long)]
    pub tag: Option<String>,

    /// Run the browser with a visible window instead of headless.
    #[arg(long)]
    pub headed: bool,

    /// Per-scenario timeout override in seconds (capped at 900).
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Selector registry override; the built-in map is used when absent.
    #[arg(long)]
    pub selectors: Option<String>,

    /// Product fixture override file.
    #[arg(long)]
    pub fixtures: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit JSON log lines instead of the compact console format.
    #[arg(long)]
    pub ci: bool,

    /// List the scenarios selected by the plan and exit.
    #[arg(long)]
    pub list: bool,
}
