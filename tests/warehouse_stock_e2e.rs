//! Live warehouse-stock scenario against a running stand.
//!
//! Gated on `MES_E2E=1`; see `order_editing_e2e.rs` for the required
//! environment.

use mes_e2e::api::Api;
use mes_e2e::config::{default_product_specs, EnvConfig, SelectorMap};
use mes_e2e::scenario::ScenarioContext;
use mes_e2e::scenarios::{self, ScenarioDeps};
use mes_e2e::ui::{CdpDriver, PageDriver};
use mes_e2e::utils::validation::Validate;
use std::sync::Arc;

macro_rules! require_e2e {
    () => {
        if std::env::var("MES_E2E").is_err() {
            eprintln!(
                "[SKIP] {} requires MES_E2E=1 and a live stand",
                module_path!()
            );
            return;
        }
    };
}

#[tokio::test]
async fn warehouse_stock_against_live_stand() {
    require_e2e!();

    let env = EnvConfig::from_env();
    env.validate().unwrap();

    let driver = Arc::new(CdpDriver::launch(true).await.unwrap());
    let page_driver: Arc<dyn PageDriver> = driver.clone();

    let deps = ScenarioDeps {
        driver: page_driver,
        api: Arc::new(Api::from_env(&env)),
        selectors: Arc::new(SelectorMap::builtin().unwrap()),
        env: env.clone(),
        fixtures: Arc::new(default_product_specs()),
    };

    let entry = scenarios::find("warehouse-stock").unwrap();
    let runner = (entry.build)(&deps).with_timeout_secs(300);
    let mut ctx = ScenarioContext::new("warehouse-stock", &env.artifacts_dir).unwrap();

    let report = runner.run(&mut ctx).await.unwrap();

    drop(deps);
    if let Ok(driver) = Arc::try_unwrap(driver) {
        let _ = driver.shutdown().await;
    }

    assert!(
        report.passed,
        "warehouse-stock failed: {} soft failure(s), failed step: {:?}",
        report.soft_failures,
        report.failed_step().map(|s| s.name.clone())
    );
}
