use super::table::{ModalWindow, TableSearch};
use crate::config::SelectorMap;
use crate::ui::{click_button, set_input_value, InputKind, PageDriver};
use crate::utils::error::{Result, SuiteError};
use regex::Regex;

/// Warehouse stock screen: balance table plus the receive-goods dialog.
pub struct WarehousePage<'a> {
    driver: &'a dyn PageDriver,
    selectors: &'a SelectorMap,
}

impl<'a> WarehousePage<'a> {
    pub fn new(driver: &'a dyn PageDriver, selectors: &'a SelectorMap) -> Self {
        Self { driver, selectors }
    }

    pub async fn open(&self, base_url: &str) -> Result<()> {
        self.driver
            .goto(&format!("{}/warehouse", base_url.trim_end_matches('/')))
            .await
    }

    pub async fn stock_rows(&self) -> Result<Vec<String>> {
        let rows = self.selectors.get("warehouse", "stock_rows")?;
        TableSearch::new(self.driver, self.selectors)
            .row_texts_for(rows)
            .await
    }

    /// On-hand quantity shown for a designation, if the row is present.
    /// Quantity is the trailing number in the row text.
    pub async fn quantity_of(&self, designation: &str) -> Result<Option<i64>> {
        let pattern = Regex::new(r"(-?\d+)\s*$").map_err(|e| SuiteError::Ui {
            selector: "stock row".to_string(),
            reason: e.to_string(),
        })?;
        let rows = self.stock_rows().await?;
        Ok(rows
            .iter()
            .find(|row| row.contains(designation))
            .and_then(|row| pattern.captures(row))
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok()))
    }

    /// Books goods into stock through the receive dialog.
    pub async fn receive_item(&self, name: &str, quantity: i64) -> Result<()> {
        let receive = self.selectors.get("warehouse", "receive_button")?;
        click_button(self.driver, receive).await?;
        ModalWindow::new(self.driver, self.selectors).wait_open().await?;

        let name_input = self.selectors.get("warehouse", "name_input")?;
        let quantity_input = self.selectors.get("warehouse", "quantity_input")?;
        let save = self.selectors.get("warehouse", "save_button")?;

        set_input_value(self.driver, name_input, name, InputKind::Input).await?;
        set_input_value(
            self.driver,
            quantity_input,
            &quantity.to_string(),
            InputKind::Input,
        )
        .await?;
        click_button(self.driver, save).await?;
        self.driver.wait_for_load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mock::MockDriver;
    use serde_json::json;

    #[tokio::test]
    async fn quantity_parses_trailing_number() {
        let driver = MockDriver::new();
        let map = SelectorMap::builtin().unwrap();
        driver.push_eval_result(json!([
            "SB-101.00.00  Gear housing assembly  17",
            "DT-210.10.01  Drive shaft  4"
        ]));

        let page = WarehousePage::new(&driver, &map);
        assert_eq!(page.quantity_of("DT-210.10.01").await.unwrap(), Some(4));
    }

    #[tokio::test]
    async fn quantity_is_none_for_missing_row() {
        let driver = MockDriver::new();
        let map = SelectorMap::builtin().unwrap();
        driver.push_eval_result(json!(["SB-101.00.00  Gear housing assembly  17"]));

        let page = WarehousePage::new(&driver, &map);
        assert_eq!(page.quantity_of("XX-000").await.unwrap(), None);
    }
}
