//! Cheap availability probe over every API module. Points at the stand
//! configured through the environment and prints one line per module, so a
//! broken deployment is visible before a full scenario run is attempted.

use mes_e2e::api::Api;
use mes_e2e::config::EnvConfig;
use mes_e2e::utils::error::Result as SuiteResult;
use mes_e2e::utils::validation::Validate;
use mes_e2e::ApiResponse;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let env = EnvConfig::from_env();
    env.validate()?;

    println!("🚀 Probing MES API modules at {}", env.api_base_url);
    let api = Api::from_env(&env);

    let probes: Vec<(&str, SuiteResult<ApiResponse>)> = vec![
        ("cbed", api.cbed.get_all(false, Some(1), Some(1)).await),
        ("contacts", api.contacts.get_all(false, Some(1), Some(1)).await),
        ("equipment", api.equipment.get_all(false, Some(1), Some(1)).await),
        ("orders", api.orders.get_all(false, Some(1), Some(1)).await),
        ("shipments", api.shipments.get_all(false, Some(1), Some(1)).await),
        ("templates", api.templates.get_all(false, Some(1), Some(1)).await),
        ("warehouse", api.warehouse.stock_balance(None).await),
        ("workflows", api.workflows.get_all(false, Some(1), Some(1)).await),
        ("scheduling", api.scheduling.get_all(false, Some(1), Some(1)).await),
        ("settings", api.settings.get_all().await),
        ("monitoring", api.monitoring.health().await),
        ("audit", api.audit.get_all(Some(1), Some(1)).await),
        ("backup", api.backup.latest().await),
        ("dashboard", api.dashboard.summary().await),
        ("documents", api.documents.get_all(false, Some(1), Some(1)).await),
        ("inventory", api.inventory.get_all(false, Some(1), Some(1)).await),
        ("maintenance", api.maintenance.get_all(false, Some(1), Some(1)).await),
        ("materials", api.materials.get_all(false, Some(1), Some(1)).await),
        ("quality", api.quality.inspections(Some(1), Some(1)).await),
        ("tools", api.tools.get_all(false, Some(1), Some(1)).await),
        ("versioning", api.versioning.current().await),
    ];

    let mut failures = 0usize;
    println!("\n📋 Results:");
    for (module, outcome) in probes {
        match outcome {
            Ok(response) if response.is_success() => {
                println!("  ✅ {:<12} status {}", module, response.status);
            }
            Ok(response) => {
                // Lenient families answer through here with the raw status.
                println!("  ⚠️ {:<12} status {}", module, response.status);
                failures += 1;
            }
            Err(e) => {
                println!("  ❌ {:<12} {}", module, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        println!("\n❌ {} module(s) unavailable", failures);
        std::process::exit(2);
    }

    println!("\n🎉 All modules reachable");
    Ok(())
}
