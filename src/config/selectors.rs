use crate::utils::error::{Result, SuiteError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// UI 元素定位器註冊表。每個頁面一個 TOML 區段，鍵是穩定的邏輯名稱，
/// 值是 CSS 選擇器。測試程式永遠透過 `page.key` 取用，不硬編選擇器。
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct SelectorMap {
    pages: BTreeMap<String, BTreeMap<String, String>>,
}

impl SelectorMap {
    /// 內建的預設選擇器（隨 crate 發佈的 `selectors.toml`）。
    pub fn builtin() -> Result<Self> {
        Ok(toml::from_str(include_str!("../../selectors.toml"))?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Look up `page.key`; a miss is a configuration error, never a panic.
    pub fn get(&self, page: &str, key: &str) -> Result<&str> {
        self.pages
            .get(page)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
            .ok_or_else(|| SuiteError::MissingConfig {
                field: format!("selectors.{}.{}", page, key),
            })
    }

    pub fn page_keys(&self, page: &str) -> Vec<&str> {
        self.pages
            .get(page)
            .map(|entries| entries.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_selectors_parse() {
        let map = SelectorMap::builtin().unwrap();
        assert!(map.get("login", "submit_button").is_ok());
        assert!(map.get("table", "search_input").is_ok());
    }

    #[test]
    fn missing_key_names_the_path() {
        let map = SelectorMap::builtin().unwrap();
        let err = map.get("login", "no-such-key").unwrap_err();
        assert!(err.to_string().contains("selectors.login.no-such-key"));
    }

    #[test]
    fn from_toml_string() {
        let map: SelectorMap =
            toml::from_str("[demo]\nbutton = \"button[data-testid='x']\"\n").unwrap();
        assert_eq!(map.get("demo", "button").unwrap(), "button[data-testid='x']");
    }
}
