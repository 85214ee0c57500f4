use crate::utils::error::{Result, SuiteError};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::Page;
use futures::StreamExt;
use serde_json::Value;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub const DEFAULT_VISIBILITY_TIMEOUT: Duration = Duration::from_secs(10);
const VISIBILITY_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 瀏覽器驅動介面。頁面物件與 UI 輔助函式只依賴這個 trait，
/// 真正的 CDP 實作與測試用的 mock 都在後面。
#[async_trait]
pub trait PageDriver: Send + Sync {
    async fn goto(&self, url: &str) -> Result<()>;

    /// Waits for the current navigation to settle.
    async fn wait_for_load(&self) -> Result<()>;

    async fn wait_for_visible(&self, selector: &str, timeout: Duration) -> Result<()>;

    async fn click(&self, selector: &str) -> Result<()>;

    /// Replaces the element's value (clears first, then types).
    async fn fill(&self, selector: &str, value: &str) -> Result<()>;

    async fn inner_text(&self, selector: &str) -> Result<String>;

    async fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>>;

    async fn press_key(&self, selector: &str, key: &str) -> Result<()>;

    async fn evaluate(&self, js: &str) -> Result<Value>;

    async fn screenshot_png(&self) -> Result<Vec<u8>>;

    async fn current_url(&self) -> Result<String>;
}

fn cdp_err(e: impl std::fmt::Display) -> SuiteError {
    SuiteError::Browser(e.to_string())
}

fn js_string(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

fn visibility_predicate(selector: &str) -> String {
    format!(
        "(() => {{ \
            const el = document.querySelector({sel}); \
            if (!el) return false; \
            const r = el.getBoundingClientRect(); \
            const s = window.getComputedStyle(el); \
            return r.width > 0 && r.height > 0 && s.visibility !== 'hidden' && s.display !== 'none'; \
        }})()",
        sel = js_string(selector)
    )
}

/// Chromium driver over the DevTools protocol.
pub struct CdpDriver {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
}

impl CdpDriver {
    /// Launches a Chromium instance and opens a blank page. The event
    /// handler must be polled for the connection to make progress, so it
    /// runs on its own task until the browser goes away.
    pub async fn launch(headless: bool) -> Result<Self> {
        let mut builder = BrowserConfig::builder().window_size(1440, 900);
        if !headless {
            builder = builder.with_head();
        }
        let config = builder.build().map_err(SuiteError::Browser)?;

        let (browser, mut handler) = Browser::launch(config).await.map_err(cdp_err)?;
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await.map_err(cdp_err)?;
        Ok(Self {
            browser,
            page,
            handler_task,
        })
    }

    pub async fn shutdown(mut self) -> Result<()> {
        if let Err(e) = self.browser.close().await {
            warn!("browser close reported: {}", e);
        }
        self.handler_task.abort();
        Ok(())
    }
}

#[async_trait]
impl PageDriver for CdpDriver {
    async fn goto(&self, url: &str) -> Result<()> {
        debug!("goto {}", url);
        self.page.goto(url).await.map_err(cdp_err)?;
        self.page.wait_for_navigation().await.map_err(cdp_err)?;
        Ok(())
    }

    async fn wait_for_load(&self) -> Result<()> {
        self.page.wait_for_navigation().await.map_err(cdp_err)?;
        Ok(())
    }

    async fn wait_for_visible(&self, selector: &str, timeout: Duration) -> Result<()> {
        let started = Instant::now();
        let predicate = visibility_predicate(selector);
        loop {
            let visible = match self.page.evaluate(predicate.clone()).await {
                Ok(result) => result.into_value::<bool>().unwrap_or(false),
                // Evaluation can fail transiently during navigation.
                Err(_) => false,
            };
            if visible {
                return Ok(());
            }
            if started.elapsed() >= timeout {
                return Err(SuiteError::Timeout {
                    what: format!("'{}' to become visible", selector),
                    waited_ms: started.elapsed().as_millis() as u64,
                });
            }
            tokio::time::sleep(VISIBILITY_POLL_INTERVAL).await;
        }
    }

    async fn click(&self, selector: &str) -> Result<()> {
        let element = self.page.find_element(selector).await.map_err(cdp_err)?;
        element.scroll_into_view().await.map_err(cdp_err)?;
        element.click().await.map_err(cdp_err)?;
        Ok(())
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        let element = self.page.find_element(selector).await.map_err(cdp_err)?;
        element.scroll_into_view().await.map_err(cdp_err)?;
        element.focus().await.map_err(cdp_err)?;
        // type_str appends, so reset the value first and let the framework
        // see an input event for the change.
        let clear = format!(
            "(() => {{ const el = document.querySelector({sel}); \
              if (el) {{ el.value = ''; el.dispatchEvent(new Event('input', {{bubbles: true}})); }} }})()",
            sel = js_string(selector)
        );
        self.page.evaluate(clear).await.map_err(cdp_err)?;
        element.type_str(value).await.map_err(cdp_err)?;
        Ok(())
    }

    async fn inner_text(&self, selector: &str) -> Result<String> {
        let element = self.page.find_element(selector).await.map_err(cdp_err)?;
        let text = element.inner_text().await.map_err(cdp_err)?;
        Ok(text.unwrap_or_default())
    }

    async fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let element = self.page.find_element(selector).await.map_err(cdp_err)?;
        element.attribute(name).await.map_err(cdp_err)
    }

    async fn press_key(&self, selector: &str, key: &str) -> Result<()> {
        let element = self.page.find_element(selector).await.map_err(cdp_err)?;
        element.press_key(key).await.map_err(cdp_err)?;
        Ok(())
    }

    async fn evaluate(&self, js: &str) -> Result<Value> {
        let result = self.page.evaluate(js).await.map_err(cdp_err)?;
        result.into_value::<Value>().map_err(cdp_err)
    }

    async fn screenshot_png(&self) -> Result<Vec<u8>> {
        self.page
            .screenshot(
                ScreenshotParams::builder()
                    .format(CaptureScreenshotFormat::Png)
                    .full_page(true)
                    .build(),
            )
            .await
            .map_err(cdp_err)
    }

    async fn current_url(&self) -> Result<String> {
        let url = self.page.url().await.map_err(cdp_err)?;
        Ok(url.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicate_escapes_quotes() {
        let js = visibility_predicate("button[data-testid='save']");
        assert!(js.contains("data-testid='save'"));
        assert!(js.starts_with("(() =>"));
    }
}
