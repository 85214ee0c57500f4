use super::table::{ModalWindow, TableSearch};
use crate::config::SelectorMap;
use crate::ui::{click_button, set_input_value, InputKind, PageDriver};
use crate::utils::error::Result;

/// Orders list + order editing form.
pub struct OrdersPage<'a> {
    driver: &'a dyn PageDriver,
    selectors: &'a SelectorMap,
}

impl<'a> OrdersPage<'a> {
    pub fn new(driver: &'a dyn PageDriver, selectors: &'a SelectorMap) -> Self {
        Self { driver, selectors }
    }

    pub async fn open(&self, base_url: &str) -> Result<()> {
        self.driver
            .goto(&format!("{}/orders", base_url.trim_end_matches('/')))
            .await
    }

    pub fn table(&self) -> TableSearch<'a> {
        TableSearch::new(self.driver, self.selectors)
    }

    pub fn modal(&self) -> ModalWindow<'a> {
        ModalWindow::new(self.driver, self.selectors)
    }

    pub async fn search(&self, query: &str) -> Result<()> {
        self.table().search(query).await
    }

    pub async fn open_order(&self, number: &str) -> Result<()> {
        let rows = self.selectors.get("table", "rows")?;
        self.table().click_row_containing(rows, number).await?;
        self.driver.wait_for_load().await
    }

    /// Positions already attached to the order (the "bottom table").
    pub async fn item_rows(&self) -> Result<Vec<String>> {
        let rows = self.selectors.get("orders", "bottom_table_rows")?;
        self.table().row_texts_for(rows).await
    }

    pub async fn add_item(&self) -> Result<()> {
        let button = self.selectors.get("orders", "add_item_button")?;
        click_button(self.driver, button).await
    }

    pub async fn set_quantity(&self, quantity: i64) -> Result<()> {
        let input = self.selectors.get("orders", "quantity_input")?;
        set_input_value(self.driver, input, &quantity.to_string(), InputKind::Input).await
    }

    pub async fn set_comment(&self, text: &str) -> Result<()> {
        let textarea = self.selectors.get("orders", "comment_textarea")?;
        set_input_value(self.driver, textarea, text, InputKind::Textarea).await
    }

    pub async fn save(&self) -> Result<()> {
        let button = self.selectors.get("orders", "save_button")?;
        click_button(self.driver, button).await?;
        self.driver.wait_for_load().await
    }

    pub async fn status(&self) -> Result<String> {
        let badge = self.selectors.get("orders", "status_badge")?;
        self.driver.inner_text(badge).await
    }
}
