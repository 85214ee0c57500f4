use super::context::ScenarioContext;
use super::step::ScenarioStep;
use crate::utils::error::{Result, SuiteError};
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Hard ceiling on a single scenario, matching the slowest flows the suite
/// has to tolerate on a loaded stand.
pub const MAX_SCENARIO_TIMEOUT_SECS: u64 = 900;
pub const DEFAULT_SCENARIO_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, PartialEq)]
pub enum StepStatus {
    Passed,
    Skipped(String),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct StepReport {
    pub name: String,
    pub status: StepStatus,
    pub duration: Duration,
}

#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub scenario: String,
    pub steps: Vec<StepReport>,
    pub soft_failures: usize,
    pub duration: Duration,
    pub passed: bool,
}

impl ScenarioReport {
    pub fn failed_step(&self) -> Option<&StepReport> {
        self.steps
            .iter()
            .find(|s| matches!(s.status, StepStatus::Failed(_)))
    }
}

/// 依序執行步驟的場景執行器。步驟嚴格循序，硬錯誤中止場景，
/// 軟斷言失敗收集到結束才結算。
pub struct ScenarioRunner {
    name: String,
    steps: Vec<Box<dyn ScenarioStep>>,
    timeout: Duration,
}

impl ScenarioRunner {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            steps: Vec::new(),
            timeout: Duration::from_secs(DEFAULT_SCENARIO_TIMEOUT_SECS),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values above the ceiling are clamped, not rejected.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        let clamped = secs.min(MAX_SCENARIO_TIMEOUT_SECS);
        if clamped != secs {
            warn!(
                "scenario '{}' timeout {}s clamped to {}s",
                self.name, secs, clamped
            );
        }
        self.timeout = Duration::from_secs(clamped);
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn step(mut self, step: impl ScenarioStep + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn add_step(&mut self, step: Box<dyn ScenarioStep>) {
        self.steps.push(step);
    }

    pub async fn run(&self, ctx: &mut ScenarioContext) -> Result<ScenarioReport> {
        info!(
            "🚀 Running scenario '{}' ({} steps, timeout {:?})",
            self.name,
            self.steps.len(),
            self.timeout
        );
        let started = Instant::now();

        let steps = tokio::time::timeout(self.timeout, self.run_steps(ctx))
            .await
            .map_err(|_| SuiteError::Timeout {
                what: format!("scenario '{}'", self.name),
                waited_ms: self.timeout.as_millis() as u64,
            })?;

        let soft = std::mem::take(&mut ctx.soft);
        let soft_failures = soft.count();
        for failure in soft.failures() {
            warn!("  soft failure: {}: {}", failure.what, failure.detail);
        }

        let hard_failure = steps
            .iter()
            .any(|s| matches!(s.status, StepStatus::Failed(_)));
        let passed = !hard_failure && soft_failures == 0;

        let report = ScenarioReport {
            scenario: self.name.clone(),
            steps,
            soft_failures,
            duration: started.elapsed(),
            passed,
        };

        if report.passed {
            info!(
                "✅ Scenario '{}' passed in {:?}",
                self.name, report.duration
            );
        } else {
            error!(
                "❌ Scenario '{}' failed ({} soft failure(s){})",
                self.name,
                soft_failures,
                report
                    .failed_step()
                    .map(|s| format!(", hard failure at '{}'", s.name))
                    .unwrap_or_default()
            );
        }
        Ok(report)
    }

    async fn run_steps(&self, ctx: &mut ScenarioContext) -> Vec<StepReport> {
        let mut reports = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            if !step.should_run(ctx) {
                let reason = step.skip_reason(ctx);
                info!("⏭️ Skipping '{}': {}", step.name(), reason);
                reports.push(StepReport {
                    name: step.name().to_string(),
                    status: StepStatus::Skipped(reason),
                    duration: Duration::ZERO,
                });
                continue;
            }

            info!("▶ {}", step.name());
            let started = Instant::now();
            match step.run(ctx).await {
                Ok(()) => reports.push(StepReport {
                    name: step.name().to_string(),
                    status: StepStatus::Passed,
                    duration: started.elapsed(),
                }),
                Err(e) => {
                    error!("❌ Step '{}' failed: {}", step.name(), e);
                    reports.push(StepReport {
                        name: step.name().to_string(),
                        status: StepStatus::Failed(e.to_string()),
                        duration: started.elapsed(),
                    });
                    // Later steps depend on earlier ones; stop here.
                    break;
                }
            }
        }
        reports
    }

    /// Suite-level roll-up printed by the runner binary.
    pub fn summary(reports: &[ScenarioReport]) -> Value {
        let total_steps: usize = reports.iter().map(|r| r.steps.len()).sum();
        let total_duration_ms: u128 = reports.iter().map(|r| r.duration.as_millis()).sum();
        json!({
            "total_scenarios": reports.len(),
            "passed": reports.iter().filter(|r| r.passed).count(),
            "failed": reports.iter().filter(|r| !r.passed).count(),
            "total_steps": total_steps,
            "soft_failures": reports.iter().map(|r| r.soft_failures).sum::<usize>(),
            "total_duration_ms": total_duration_ms as u64,
            "scenarios": reports.iter().map(|r| json!({
                "name": r.scenario,
                "passed": r.passed,
                "steps": r.steps.len(),
            })).collect::<Vec<_>>(),
        })
    }
}
