//! Recording driver used by unit and integration tests in place of a live
//! browser. Element state is scripted up front; every interaction is
//! recorded for later inspection.

use super::driver::PageDriver;
use crate::utils::error::{Result, SuiteError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum DriverCall {
    Goto(String),
    WaitForLoad,
    WaitForVisible(String),
    Click(String),
    Fill(String, String),
    PressKey(String, String),
    Evaluate(String),
    Screenshot,
}

#[derive(Default)]
pub struct MockDriver {
    calls: Mutex<Vec<DriverCall>>,
    visible: Mutex<HashSet<String>>,
    texts: Mutex<HashMap<String, String>>,
    eval_results: Mutex<VecDeque<Value>>,
    failing_clicks: Mutex<HashSet<String>>,
    failing_screenshots: Mutex<bool>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_visible(&self, selector: &str) {
        self.visible.lock().unwrap().insert(selector.to_string());
    }

    pub fn set_text(&self, selector: &str, text: &str) {
        self.texts
            .lock()
            .unwrap()
            .insert(selector.to_string(), text.to_string());
    }

    /// Queue the value the next `evaluate` call returns.
    pub fn push_eval_result(&self, value: Value) {
        self.eval_results.lock().unwrap().push_back(value);
    }

    pub fn fail_clicks_on(&self, selector: &str) {
        self.failing_clicks
            .lock()
            .unwrap()
            .insert(selector.to_string());
    }

    pub fn fail_screenshots(&self) {
        *self.failing_screenshots.lock().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<DriverCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: DriverCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PageDriver for MockDriver {
    async fn goto(&self, url: &str) -> Result<()> {
        self.record(DriverCall::Goto(url.to_string()));
        Ok(())
    }

    async fn wait_for_load(&self) -> Result<()> {
        self.record(DriverCall::WaitForLoad);
        Ok(())
    }

    async fn wait_for_visible(&self, selector: &str, timeout: Duration) -> Result<()> {
        self.record(DriverCall::WaitForVisible(selector.to_string()));
        if self.visible.lock().unwrap().contains(selector) {
            Ok(())
        } else {
            Err(SuiteError::Timeout {
                what: format!("'{}' to become visible", selector),
                waited_ms: timeout.as_millis() as u64,
            })
        }
    }

    async fn click(&self, selector: &str) -> Result<()> {
        self.record(DriverCall::Click(selector.to_string()));
        if self.failing_clicks.lock().unwrap().contains(selector) {
            Err(SuiteError::Ui {
                selector: selector.to_string(),
                reason: "element not clickable".to_string(),
            })
        } else {
            Ok(())
        }
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        self.record(DriverCall::Fill(selector.to_string(), value.to_string()));
        Ok(())
    }

    async fn inner_text(&self, selector: &str) -> Result<String> {
        self.texts
            .lock()
            .unwrap()
            .get(selector)
            .cloned()
            .ok_or_else(|| SuiteError::Ui {
                selector: selector.to_string(),
                reason: "element not found".to_string(),
            })
    }

    async fn attribute(&self, _selector: &str, _name: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn press_key(&self, selector: &str, key: &str) -> Result<()> {
        self.record(DriverCall::PressKey(selector.to_string(), key.to_string()));
        Ok(())
    }

    async fn evaluate(&self, js: &str) -> Result<Value> {
        self.record(DriverCall::Evaluate(js.to_string()));
        Ok(self
            .eval_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Value::Null))
    }

    async fn screenshot_png(&self) -> Result<Vec<u8>> {
        self.record(DriverCall::Screenshot);
        if *self.failing_screenshots.lock().unwrap() {
            Err(SuiteError::Browser("screenshot failed".to_string()))
        } else {
            // Smallest valid PNG header; enough for tests that write files.
            Ok(vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A])
        }
    }

    async fn current_url(&self) -> Result<String> {
        Ok("about:blank".to_string())
    }
}
