use crate::ui::PageDriver;
use crate::utils::error::{Result, SuiteError};
use chrono::Utc;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct SoftFailure {
    pub what: String,
    pub detail: String,
    pub screenshot: Option<PathBuf>,
}

/// Collects assertion failures without halting the step, so one run
/// surfaces as much diagnostic information as possible. The scenario
/// result folds them together at the end.
#[derive(Debug, Default)]
pub struct SoftAssertions {
    failures: Vec<SoftFailure>,
}

fn sanitize(what: &str) -> String {
    what.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect()
}

impl SoftAssertions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, what: &str, condition: bool, detail: impl Into<String>) {
        if !condition {
            let detail = detail.into();
            warn!("🔸 Soft assertion failed: {}: {}", what, detail);
            self.failures.push(SoftFailure {
                what: what.to_string(),
                detail,
                screenshot: None,
            });
        }
    }

    pub fn check_eq<T: PartialEq + Debug>(&mut self, what: &str, actual: T, expected: T) {
        let ok = actual == expected;
        self.check(
            what,
            ok,
            format!("expected {:?}, got {:?}", expected, actual),
        );
    }

    /// Like [`check`], attaching a full-page screenshot on failure. A
    /// failing screenshot degrades to a warning; it never turns a passing
    /// check into a failure.
    pub async fn check_with_screenshot(
        &mut self,
        driver: &dyn PageDriver,
        artifacts_dir: &Path,
        what: &str,
        condition: bool,
        detail: impl Into<String>,
    ) {
        if condition {
            return;
        }
        let detail = detail.into();
        warn!("🔸 Soft assertion failed: {} — {}", what, detail);

        let screenshot = match driver.screenshot_png().await {
            Ok(bytes) => {
                let file = artifacts_dir.join(format!(
                    "{}-{}.png",
                    sanitize(what),
                    Utc::now().format("%H%M%S%3f")
                ));
                match std::fs::write(&file, bytes) {
                    Ok(()) => Some(file),
                    Err(e) => {
                        warn!("could not write screenshot: {}", e);
                        None
                    }
                }
            }
            Err(e) => {
                warn!("could not capture screenshot: {}", e);
                None
            }
        };

        self.failures.push(SoftFailure {
            what: what.to_string(),
            detail,
            screenshot,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn count(&self) -> usize {
        self.failures.len()
    }

    pub fn failures(&self) -> &[SoftFailure] {
        &self.failures
    }

    /// Folds the collected failures into one error, or `Ok` when clean.
    pub fn into_result(self, scenario: &str) -> Result<()> {
        if self.failures.is_empty() {
            return Ok(());
        }
        let details = self
            .failures
            .iter()
            .map(|f| match &f.screenshot {
                Some(path) => format!("- {}: {} [{}]", f.what, f.detail, path.display()),
                None => format!("- {}: {}", f.what, f.detail),
            })
            .collect::<Vec<_>>()
            .join("\n");
        Err(SuiteError::SoftAssertionFailures {
            scenario: scenario.to_string(),
            count: self.failures.len(),
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mock::MockDriver;
    use tempfile::TempDir;

    #[test]
    fn passing_checks_leave_no_trace() {
        let mut soft = SoftAssertions::new();
        soft.check("status is done", true, "unused");
        soft.check_eq("count", 2, 2);
        assert!(soft.is_empty());
        assert!(soft.into_result("demo").is_ok());
    }

    #[test]
    fn failures_accumulate_without_halting() {
        let mut soft = SoftAssertions::new();
        soft.check("first", false, "boom");
        soft.check_eq("second", 1, 2);
        assert_eq!(soft.count(), 2);

        let err = soft.into_result("demo").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("2 soft assertion(s)"));
        assert!(message.contains("first"));
        assert!(message.contains("expected 2, got 1"));
    }

    #[tokio::test]
    async fn screenshot_attached_on_failure() {
        let tmp = TempDir::new().unwrap();
        let driver = MockDriver::new();
        let mut soft = SoftAssertions::new();

        soft.check_with_screenshot(&driver, tmp.path(), "row count", false, "0 rows")
            .await;

        assert_eq!(soft.count(), 1);
        let attached = soft.failures()[0].screenshot.as_ref().unwrap();
        assert!(attached.exists());
    }

    #[tokio::test]
    async fn screenshot_failure_degrades_to_warning() {
        let tmp = TempDir::new().unwrap();
        let driver = MockDriver::new();
        driver.fail_screenshots();
        let mut soft = SoftAssertions::new();

        soft.check_with_screenshot(&driver, tmp.path(), "row count", false, "0 rows")
            .await;

        assert_eq!(soft.count(), 1);
        assert!(soft.failures()[0].screenshot.is_none());
    }

    #[test]
    fn sanitize_produces_safe_names() {
        assert_eq!(sanitize("Row count / Orders"), "row-count---orders");
    }
}
