//! Warehouse stock workflow: read the balance through the API, book a
//! receipt through the UI, then poll the API until the balance reflects it
//! and cross-check the on-screen table.

use super::{ScenarioDeps, ScenarioEntry};
use crate::pages::{LoginPage, WarehousePage};
use crate::scenario::{FnStep, ScenarioRunner};
use crate::ui::retry_with_timeout;
use crate::utils::error::SuiteError;
use serde_json::Value;
use std::time::Duration;

pub fn entry() -> ScenarioEntry {
    ScenarioEntry {
        name: "warehouse-stock",
        tags: &["warehouse", "ui", "api"],
        build,
    }
}

fn build(deps: &ScenarioDeps) -> ScenarioRunner {
    ScenarioRunner::new("warehouse-stock")
        .step(login(deps))
        .step(stock_before(deps))
        .step(receive_via_ui(deps))
        .step(verify_stock_increase(deps))
        .step(cross_check_table(deps))
}

/// Picks the fixture's quantity out of a stock-balance payload. The
/// endpoint answers either a bare array or `{"items": [...]}`.
fn balance_of(data: &Value, designation: &str) -> Option<i64> {
    let items = data.as_array().or_else(|| data.get("items")?.as_array())?;
    items
        .iter()
        .find(|item| {
            item.get("designation")
                .and_then(Value::as_str)
                .map(|d| d == designation)
                .unwrap_or(false)
        })
        .and_then(|item| item.get("quantity"))
        .and_then(Value::as_i64)
}

fn login(deps: &ScenarioDeps) -> FnStep {
    let driver = deps.driver.clone();
    let selectors = deps.selectors.clone();
    let env = deps.env.clone();
    FnStep::new("login", move |_ctx| {
        let driver = driver.clone();
        let selectors = selectors.clone();
        let env = env.clone();
        Box::pin(async move {
            let page = LoginPage::new(driver.as_ref(), &selectors);
            page.open(&env.base_url).await?;
            page.login(&env.login, &env.password).await
        })
    })
}

fn stock_before(deps: &ScenarioDeps) -> FnStep {
    let api = deps.api.clone();
    let fixture = deps.fixture();
    FnStep::new("capture-stock-before", move |ctx| {
        let api = api.clone();
        let fixture = fixture.clone();
        Box::pin(async move {
            let response = api.warehouse.stock_balance(None).await?;
            let before = balance_of(&response.data, &fixture.designation).unwrap_or(0);
            ctx.set_value("stock-before", before);
            Ok(())
        })
    })
}

fn receive_via_ui(deps: &ScenarioDeps) -> FnStep {
    let driver = deps.driver.clone();
    let selectors = deps.selectors.clone();
    let env = deps.env.clone();
    let fixture = deps.fixture();
    FnStep::new("receive-goods-via-ui", move |_ctx| {
        let driver = driver.clone();
        let selectors = selectors.clone();
        let env = env.clone();
        let fixture = fixture.clone();
        Box::pin(async move {
            let page = WarehousePage::new(driver.as_ref(), &selectors);
            page.open(&env.base_url).await?;
            page.receive_item(&fixture.name, fixture.quantity).await
        })
    })
}

fn verify_stock_increase(deps: &ScenarioDeps) -> FnStep {
    let driver = deps.driver.clone();
    let api = deps.api.clone();
    let fixture = deps.fixture();
    FnStep::new("verify-stock-increase", move |ctx| {
        let driver = driver.clone();
        let api = api.clone();
        let fixture = fixture.clone();
        Box::pin(async move {
            let before = ctx.value_i64("stock-before").unwrap_or(0);
            let expected = before + fixture.quantity;

            // The receipt is posted asynchronously on the server side.
            let polled = retry_with_timeout(
                "stock balance to reflect the receipt",
                Duration::from_secs(30),
                Duration::from_secs(2),
                || {
                    let api = api.clone();
                    let designation = fixture.designation.clone();
                    async move {
                        let response = api.warehouse.stock_balance(None).await?;
                        let current = balance_of(&response.data, &designation).unwrap_or(0);
                        if current >= expected {
                            Ok(current)
                        } else {
                            Err(SuiteError::Ui {
                                selector: designation.clone(),
                                reason: format!("balance still {}", current),
                            })
                        }
                    }
                },
            )
            .await;

            let artifacts = ctx.artifacts_dir.clone();
            match polled {
                Ok(after) => {
                    ctx.set_value("stock-after", after);
                    ctx.soft.check_eq("stock delta", after - before, fixture.quantity);
                }
                Err(e) => {
                    ctx.soft
                        .check_with_screenshot(
                            driver.as_ref(),
                            &artifacts,
                            "stock increased after receipt",
                            false,
                            e.to_string(),
                        )
                        .await;
                }
            }
            Ok(())
        })
    })
}

fn cross_check_table(deps: &ScenarioDeps) -> FnStep {
    let driver = deps.driver.clone();
    let selectors = deps.selectors.clone();
    let fixture = deps.fixture();
    FnStep::new("cross-check-ui-table", move |ctx| {
        let driver = driver.clone();
        let selectors = selectors.clone();
        let fixture = fixture.clone();
        Box::pin(async move {
            let page = WarehousePage::new(driver.as_ref(), &selectors);
            let shown = page.quantity_of(&fixture.designation).await?;
            let expected = ctx.value_i64("stock-after");
            ctx.soft.check(
                "UI balance matches API balance",
                shown == expected || expected.is_none(),
                format!("table shows {:?}, API reported {:?}", shown, expected),
            );
            Ok(())
        })
    })
    .with_precondition("API balance was never confirmed", |ctx| {
        ctx.value("stock-after").is_some()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn balance_reads_bare_array() {
        let data = json!([
            {"designation": "SB-101.00.00", "quantity": 17},
            {"designation": "DT-210.10.01", "quantity": 4}
        ]);
        assert_eq!(balance_of(&data, "DT-210.10.01"), Some(4));
    }

    #[test]
    fn balance_reads_items_wrapper() {
        let data = json!({"items": [{"designation": "SB-101.00.00", "quantity": 17}]});
        assert_eq!(balance_of(&data, "SB-101.00.00"), Some(17));
        assert_eq!(balance_of(&data, "XX-000"), None);
    }
}
