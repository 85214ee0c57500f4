use crate::config::SelectorMap;
use crate::ui::{click_button, set_input_value, InputKind, PageDriver, DEFAULT_VISIBILITY_TIMEOUT};
use crate::utils::error::Result;
use tracing::info;

pub struct LoginPage<'a> {
    driver: &'a dyn PageDriver,
    selectors: &'a SelectorMap,
}

impl<'a> LoginPage<'a> {
    pub fn new(driver: &'a dyn PageDriver, selectors: &'a SelectorMap) -> Self {
        Self { driver, selectors }
    }

    pub async fn open(&self, base_url: &str) -> Result<()> {
        self.driver.goto(base_url).await
    }

    /// Signs in and waits until the user menu confirms the session.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        info!("Logging in as '{}'", username);
        let user_input = self.selectors.get("login", "username_input")?;
        let password_input = self.selectors.get("login", "password_input")?;
        let submit = self.selectors.get("login", "submit_button")?;
        let user_menu = self.selectors.get("login", "user_menu")?;

        set_input_value(self.driver, user_input, username, InputKind::Input).await?;
        set_input_value(self.driver, password_input, password, InputKind::Input).await?;
        click_button(self.driver, submit).await?;
        self.driver.wait_for_load().await?;
        self.driver
            .wait_for_visible(user_menu, DEFAULT_VISIBILITY_TIMEOUT)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mock::{DriverCall, MockDriver};

    #[tokio::test]
    async fn login_fills_credentials_and_submits() {
        let driver = MockDriver::new();
        let map = SelectorMap::builtin().unwrap();
        driver.set_visible(map.get("login", "username_input").unwrap());
        driver.set_visible(map.get("login", "password_input").unwrap());
        driver.set_visible(map.get("login", "user_menu").unwrap());

        LoginPage::new(&driver, &map)
            .login("autotest", "secret")
            .await
            .unwrap();

        let calls = driver.calls();
        assert!(calls
            .iter()
            .any(|c| matches!(c, DriverCall::Fill(_, v) if v == "autotest")));
        assert!(calls
            .iter()
            .any(|c| matches!(c, DriverCall::Fill(_, v) if v == "secret")));
        assert!(calls.iter().any(|c| matches!(c, DriverCall::Click(_))));
    }
}
