use super::table::{ModalWindow, TableSearch};
use crate::config::SelectorMap;
use crate::ui::{click_button, PageDriver};
use crate::utils::error::Result;

/// Production tasks board.
pub struct ProductionTasksPage<'a> {
    driver: &'a dyn PageDriver,
    selectors: &'a SelectorMap,
}

impl<'a> ProductionTasksPage<'a> {
    pub fn new(driver: &'a dyn PageDriver, selectors: &'a SelectorMap) -> Self {
        Self { driver, selectors }
    }

    pub async fn open(&self, base_url: &str) -> Result<()> {
        self.driver
            .goto(&format!("{}/tasks", base_url.trim_end_matches('/')))
            .await
    }

    pub async fn search(&self, query: &str) -> Result<()> {
        TableSearch::new(self.driver, self.selectors).search(query).await
    }

    pub async fn status(&self) -> Result<String> {
        let cell = self.selectors.get("tasks", "status_cell")?;
        self.driver.inner_text(cell).await
    }

    /// Marks the selected task complete and confirms the dialog.
    pub async fn mark_complete(&self) -> Result<()> {
        let button = self.selectors.get("tasks", "complete_button")?;
        click_button(self.driver, button).await?;
        let modal = ModalWindow::new(self.driver, self.selectors);
        modal.wait_open().await?;
        modal.confirm().await?;
        self.driver.wait_for_load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mock::{DriverCall, MockDriver};

    #[tokio::test]
    async fn mark_complete_confirms_the_dialog() {
        let driver = MockDriver::new();
        let map = SelectorMap::builtin().unwrap();
        driver.set_visible(map.get("modal", "window").unwrap());
        driver.set_text(map.get("tasks", "status_cell").unwrap(), "In work");

        let page = ProductionTasksPage::new(&driver, &map);
        assert_eq!(page.status().await.unwrap(), "In work");
        page.mark_complete().await.unwrap();

        let calls = driver.calls();
        let complete = map.get("tasks", "complete_button").unwrap();
        let confirm = map.get("modal", "confirm_button").unwrap();
        assert!(calls
            .iter()
            .any(|c| matches!(c, DriverCall::Click(sel) if sel == complete)));
        assert!(calls
            .iter()
            .any(|c| matches!(c, DriverCall::Click(sel) if sel == confirm)));
    }
}
