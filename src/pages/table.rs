use crate::config::SelectorMap;
use crate::ui::{click_button, set_input_value, InputKind, PageDriver, DEFAULT_VISIBILITY_TIMEOUT};
use crate::utils::error::{Result, SuiteError};
use serde_json::Value;

fn js_string(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

/// Shared search-table interaction: every list screen in the application
/// uses the same search input + result table markup.
pub struct TableSearch<'a> {
    driver: &'a dyn PageDriver,
    selectors: &'a SelectorMap,
}

impl<'a> TableSearch<'a> {
    pub fn new(driver: &'a dyn PageDriver, selectors: &'a SelectorMap) -> Self {
        Self { driver, selectors }
    }

    /// Types a query into the search field and submits it.
    pub async fn search(&self, query: &str) -> Result<()> {
        let input = self.selectors.get("table", "search_input")?;
        set_input_value(self.driver, input, query, InputKind::Input).await?;
        self.driver.press_key(input, "Enter").await?;
        self.driver.wait_for_load().await
    }

    pub async fn row_texts(&self) -> Result<Vec<String>> {
        let rows = self.selectors.get("table", "rows")?;
        self.row_texts_for(rows).await
    }

    /// Visible text of every row matched by `rows_selector`.
    pub async fn row_texts_for(&self, rows_selector: &str) -> Result<Vec<String>> {
        let js = format!(
            "Array.from(document.querySelectorAll({sel})).map(r => r.innerText.trim())",
            sel = js_string(rows_selector)
        );
        let value = self.driver.evaluate(&js).await?;
        Ok(value
            .as_array()
            .map(|rows| {
                rows.iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default())
    }

    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.row_texts().await?.is_empty())
    }

    /// Clicks the first row whose text contains `needle`.
    pub async fn click_row_containing(&self, rows_selector: &str, needle: &str) -> Result<()> {
        let texts = self.row_texts_for(rows_selector).await?;
        let index = texts
            .iter()
            .position(|t| t.contains(needle))
            .ok_or_else(|| SuiteError::Ui {
                selector: rows_selector.to_string(),
                reason: format!("no row containing '{}'", needle),
            })?;
        // CSS positions are 1-based.
        let row = format!("{}:nth-of-type({})", rows_selector, index + 1);
        click_button(self.driver, &row).await
    }
}

/// Confirmation dialog shown by every destructive or saving action.
pub struct ModalWindow<'a> {
    driver: &'a dyn PageDriver,
    selectors: &'a SelectorMap,
}

impl<'a> ModalWindow<'a> {
    pub fn new(driver: &'a dyn PageDriver, selectors: &'a SelectorMap) -> Self {
        Self { driver, selectors }
    }

    pub async fn wait_open(&self) -> Result<()> {
        let window = self.selectors.get("modal", "window")?;
        self.driver
            .wait_for_visible(window, DEFAULT_VISIBILITY_TIMEOUT)
            .await
    }

    pub async fn confirm(&self) -> Result<()> {
        let button = self.selectors.get("modal", "confirm_button")?;
        click_button(self.driver, button).await
    }

    pub async fn cancel(&self) -> Result<()> {
        let button = self.selectors.get("modal", "cancel_button")?;
        click_button(self.driver, button).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mock::{DriverCall, MockDriver};
    use serde_json::json;

    fn selectors() -> SelectorMap {
        SelectorMap::builtin().unwrap()
    }

    #[tokio::test]
    async fn search_fills_and_submits() {
        let driver = MockDriver::new();
        let map = selectors();
        driver.set_visible(map.get("table", "search_input").unwrap());

        TableSearch::new(&driver, &map).search("SB-101").await.unwrap();

        let calls = driver.calls();
        assert!(calls
            .iter()
            .any(|c| matches!(c, DriverCall::Fill(_, v) if v == "SB-101")));
        assert!(calls
            .iter()
            .any(|c| matches!(c, DriverCall::PressKey(_, k) if k == "Enter")));
    }

    #[tokio::test]
    async fn row_texts_decodes_array() {
        let driver = MockDriver::new();
        let map = selectors();
        driver.push_eval_result(json!(["row one", "row two"]));

        let rows = TableSearch::new(&driver, &map).row_texts().await.unwrap();
        assert_eq!(rows, vec!["row one", "row two"]);
    }

    #[tokio::test]
    async fn click_row_picks_matching_index() {
        let driver = MockDriver::new();
        let map = selectors();
        driver.push_eval_result(json!(["order 41", "order 42", "order 43"]));

        TableSearch::new(&driver, &map)
            .click_row_containing("tbody tr", "order 42")
            .await
            .unwrap();

        let calls = driver.calls();
        assert!(calls
            .iter()
            .any(|c| matches!(c, DriverCall::Click(sel) if sel == "tbody tr:nth-of-type(2)")));
    }

    #[tokio::test]
    async fn click_row_errors_when_absent() {
        let driver = MockDriver::new();
        let map = selectors();
        driver.push_eval_result(json!(["other"]));

        let result = TableSearch::new(&driver, &map)
            .click_row_containing("tbody tr", "missing")
            .await;
        assert!(matches!(result, Err(SuiteError::Ui { .. })));
    }
}
