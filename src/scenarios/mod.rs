pub mod order_editing;
pub mod warehouse_stock;

use crate::api::Api;
use crate::config::{EnvConfig, ProductSpec, SelectorMap};
use crate::scenario::ScenarioRunner;
use crate::ui::PageDriver;
use std::sync::Arc;

/// Everything a scenario script needs to assemble its steps. Built once by
/// the runner binary and shared by reference; each step clones the handles
/// it uses.
#[derive(Clone)]
pub struct ScenarioDeps {
    pub driver: Arc<dyn PageDriver>,
    pub api: Arc<Api>,
    pub selectors: Arc<SelectorMap>,
    pub env: EnvConfig,
    pub fixtures: Arc<Vec<ProductSpec>>,
}

impl ScenarioDeps {
    /// First configured product fixture; scenarios operate on one item.
    pub fn fixture(&self) -> ProductSpec {
        self.fixtures.first().cloned().unwrap_or(ProductSpec {
            name: "Gear housing assembly".to_string(),
            designation: "SB-101.00.00".to_string(),
            quantity: 4,
            expected_rows: Vec::new(),
        })
    }
}

pub struct ScenarioEntry {
    pub name: &'static str,
    pub tags: &'static [&'static str],
    pub build: fn(&ScenarioDeps) -> ScenarioRunner,
}

/// Every scenario the suite knows about, keyed by the names used in
/// `suite.toml`.
pub fn registry() -> Vec<ScenarioEntry> {
    vec![order_editing::entry(), warehouse_stock::entry()]
}

pub fn find(name: &str) -> Option<ScenarioEntry> {
    registry().into_iter().find(|entry| entry.name == name)
}
