use super::driver::{PageDriver, DEFAULT_VISIBILITY_TIMEOUT};
use crate::config::debug_enabled;
use crate::utils::error::{Result, SuiteError};
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// Kind of form control being filled. Inputs get a visibility wait before
/// the fill; textareas are filled directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Input,
    Textarea,
}

/// Declared tolerance of one interaction. `BestEffort` downgrades a failure
/// to a warning and reports the interaction as skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tolerance {
    Required,
    BestEffort,
}

pub async fn click_button(driver: &dyn PageDriver, selector: &str) -> Result<()> {
    debug!("Clicking '{}'", selector);
    match driver.click(selector).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("❌ Click failed on '{}': {}", selector, e);
            Err(e)
        }
    }
}

pub async fn set_input_value(
    driver: &dyn PageDriver,
    selector: &str,
    value: &str,
    kind: InputKind,
) -> Result<()> {
    if debug_enabled() {
        debug!("Setting '{}' = '{}' ({:?})", selector, value, kind);
    }
    if kind == InputKind::Input {
        driver
            .wait_for_visible(selector, DEFAULT_VISIBILITY_TIMEOUT)
            .await?;
    }
    driver.fill(selector, value).await
}

/// Runs `op` under the given tolerance. `Ok(None)` means the interaction
/// was skipped under `BestEffort`.
pub async fn with_tolerance<T, Fut>(
    tolerance: Tolerance,
    what: &str,
    op: Fut,
) -> Result<Option<T>>
where
    Fut: Future<Output = Result<T>>,
{
    match op.await {
        Ok(value) => Ok(Some(value)),
        Err(e) => match tolerance {
            Tolerance::Required => Err(e),
            Tolerance::BestEffort => {
                warn!("⚠️ Skipping best-effort step '{}': {}", what, e);
                Ok(None)
            }
        },
    }
}

/// Re-attempts `op` until it succeeds or `total` elapses. The fixed waits
/// the old scripts used everywhere collapse into this one abstraction.
pub async fn retry_with_timeout<T, F, Fut>(
    what: &str,
    total: Duration,
    interval: Duration,
    mut op: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let started = Instant::now();
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if started.elapsed() + interval < total => {
                debug!("retrying '{}' after: {}", what, e);
                tokio::time::sleep(interval).await;
            }
            Err(e) => {
                error!("❌ Giving up on '{}': {}", what, e);
                return Err(SuiteError::Timeout {
                    what: what.to_string(),
                    waited_ms: started.elapsed().as_millis() as u64,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mock::{DriverCall, MockDriver};

    #[tokio::test]
    async fn input_waits_for_visibility_before_fill() {
        let driver = MockDriver::new();
        driver.set_visible("input[name='qty']");

        set_input_value(&driver, "input[name='qty']", "5", InputKind::Input)
            .await
            .unwrap();

        let calls = driver.calls();
        assert_eq!(
            calls,
            vec![
                DriverCall::WaitForVisible("input[name='qty']".to_string()),
                DriverCall::Fill("input[name='qty']".to_string(), "5".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn textarea_skips_visibility_wait() {
        let driver = MockDriver::new();
        set_input_value(&driver, "textarea[name='comment']", "note", InputKind::Textarea)
            .await
            .unwrap();

        let calls = driver.calls();
        assert_eq!(
            calls,
            vec![DriverCall::Fill(
                "textarea[name='comment']".to_string(),
                "note".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn invisible_input_times_out() {
        let driver = MockDriver::new();
        let result = set_input_value(&driver, "input[name='ghost']", "x", InputKind::Input).await;
        assert!(matches!(result, Err(SuiteError::Timeout { .. })));
    }

    #[tokio::test]
    async fn click_propagates_failure() {
        let driver = MockDriver::new();
        driver.fail_clicks_on("button.save");
        assert!(click_button(&driver, "button.save").await.is_err());
    }

    #[tokio::test]
    async fn best_effort_swallows_failure() {
        let driver = MockDriver::new();
        driver.fail_clicks_on("button.optional");

        let outcome = with_tolerance(
            Tolerance::BestEffort,
            "close promo banner",
            click_button(&driver, "button.optional"),
        )
        .await
        .unwrap();
        assert!(outcome.is_none());
    }

    #[tokio::test]
    async fn required_tolerance_propagates() {
        let driver = MockDriver::new();
        driver.fail_clicks_on("button.save");

        let outcome = with_tolerance(
            Tolerance::Required,
            "save order",
            click_button(&driver, "button.save"),
        )
        .await;
        assert!(outcome.is_err());
    }

    #[tokio::test]
    async fn retry_eventually_succeeds() {
        let mut attempts = 0;
        let result = retry_with_timeout(
            "flaky read",
            Duration::from_secs(2),
            Duration::from_millis(10),
            || {
                attempts += 1;
                let ok = attempts >= 3;
                async move {
                    if ok {
                        Ok(42)
                    } else {
                        Err(SuiteError::Browser("not yet".to_string()))
                    }
                }
            },
        )
        .await
        .unwrap();
        assert_eq!(result, 42);
        assert_eq!(attempts, 3);
    }

    #[tokio::test]
    async fn retry_times_out() {
        let result: Result<()> = retry_with_timeout(
            "never succeeds",
            Duration::from_millis(50),
            Duration::from_millis(10),
            || async { Err(SuiteError::Browser("still broken".to_string())) },
        )
        .await;
        assert!(matches!(result, Err(SuiteError::Timeout { .. })));
    }
}
