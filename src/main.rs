use clap::Parser;
use mes_e2e::api::Api;
use mes_e2e::config::{
    default_product_specs, product_specs_from_file, EnvConfig, RunnerConfig, SelectorMap,
    SuiteConfig,
};
use mes_e2e::scenario::{ScenarioContext, ScenarioReport, ScenarioRunner};
use mes_e2e::scenarios::{self, ScenarioDeps};
use mes_e2e::ui::{CdpDriver, PageDriver};
use mes_e2e::utils::validation::Validate;
use mes_e2e::utils::{error::SuiteError, logger};
use std::sync::Arc;
use std::time::Duration;

fn bail(e: SuiteError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RunnerConfig::parse();

    if config.ci {
        logger::init_ci_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting mes-e2e runner");
    if config.verbose {
        tracing::debug!("Runner config: {:?}", config);
    }

    let env = EnvConfig::from_env();
    if let Err(e) = env.validate() {
        bail(e);
    }

    let suite = match SuiteConfig::from_file(&config.suite) {
        Ok(suite) => suite,
        Err(e) => bail(e),
    };
    if let Err(e) = suite.validate() {
        bail(e);
    }

    let selected = suite.selected(config.tag.as_deref());
    if config.list {
        println!("📋 Suite '{}':", suite.suite.name);
        for (name, def) in &selected {
            println!(
                "  - {} (tags: {})",
                name,
                def.tags.clone().unwrap_or_default().join(", ")
            );
        }
        return Ok(());
    }
    if selected.is_empty() {
        bail(SuiteError::MissingConfig {
            field: "no scenario matches the requested plan/tag".to_string(),
        });
    }

    let selectors = match &config.selectors {
        Some(path) => SelectorMap::from_file(path),
        None => SelectorMap::builtin(),
    };
    let selectors = match selectors {
        Ok(map) => Arc::new(map),
        Err(e) => bail(e),
    };

    let fixtures = match &config.fixtures {
        Some(path) => match product_specs_from_file(path) {
            Ok(specs) => specs,
            Err(e) => bail(e),
        },
        None => default_product_specs(),
    };

    tracing::info!("🌐 Launching browser (headless: {})", !config.headed);
    let driver = match CdpDriver::launch(!config.headed).await {
        Ok(driver) => Arc::new(driver),
        Err(e) => bail(e),
    };
    let page_driver: Arc<dyn PageDriver> = driver.clone();

    let api = Arc::new(Api::new(Arc::new(
        mes_e2e::ApiClient::from_env(&env).with_timeout(Duration::from_secs(30)),
    )));

    let deps = ScenarioDeps {
        driver: page_driver,
        api,
        selectors,
        env: env.clone(),
        fixtures: Arc::new(fixtures),
    };

    let mut reports: Vec<ScenarioReport> = Vec::new();
    for (name, def) in &selected {
        let entry = match scenarios::find(name) {
            Some(entry) => entry,
            None => bail(SuiteError::InvalidConfigValue {
                field: "suite.execution_order".to_string(),
                value: name.to_string(),
                reason: "no scenario with this name is registered".to_string(),
            }),
        };

        let mut runner = (entry.build)(&deps);
        if let Some(timeout) = config.timeout.or(def.timeout_seconds) {
            runner = runner.with_timeout_secs(timeout);
        }

        let mut ctx = match ScenarioContext::new(name, &env.artifacts_dir) {
            Ok(ctx) => ctx,
            Err(e) => bail(e),
        };

        match runner.run(&mut ctx).await {
            Ok(report) => reports.push(report),
            Err(e) => {
                tracing::error!("❌ Scenario '{}' aborted: {}", name, e);
                reports.push(ScenarioReport {
                    scenario: name.to_string(),
                    steps: Vec::new(),
                    soft_failures: 0,
                    duration: Duration::ZERO,
                    passed: false,
                });
            }
        }
    }

    drop(deps);
    if let Ok(driver) = Arc::try_unwrap(driver) {
        if let Err(e) = driver.shutdown().await {
            tracing::warn!("browser shutdown: {}", e);
        }
    }

    let summary = ScenarioRunner::summary(&reports);
    println!("\n📊 Suite summary:");
    for report in &reports {
        let icon = if report.passed { "✅" } else { "❌" };
        println!(
            "  {} {}: {} step(s), {} soft failure(s), {:?}",
            icon,
            report.scenario,
            report.steps.len(),
            report.soft_failures,
            report.duration
        );
    }
    println!(
        "📈 Total: {} scenario(s), {} passed, {} failed",
        summary["total_scenarios"], summary["passed"], summary["failed"]
    );

    let failed = reports.iter().filter(|r| !r.passed).count();
    if failed > 0 {
        eprintln!("❌ {} scenario(s) failed", failed);
        std::process::exit(1);
    }

    println!("🎉 All scenarios passed");
    Ok(())
}
