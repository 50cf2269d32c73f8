use anyhow::Result;

use trade_smoke::CheckRegistry;

use crate::common::smoke_test_manager::SmokeTestManager;

/// Runs the core checks through the runner and prints the report
#[tokio::test]
async fn test_core_smoke_run_reports_every_check() -> Result<()> {
    let manager = SmokeTestManager::setup().await?;

    let checks: Vec<_> = CheckRegistry::core().iter().cloned().collect();
    let report = manager.runner.run(&checks).await;

    println!("\n📊 Smoke run against {}", report.base_url);
    for check in &report.reports {
        println!(
            "   {} {} ({}ms) {}",
            check.status,
            check.name,
            check.duration_ms,
            check.message.as_deref().unwrap_or("")
        );
    }

    assert_eq!(report.reports.len(), checks.len());
    assert_eq!(
        report.passed() + report.failed() + report.skipped(),
        report.reports.len()
    );
    Ok(())
}
