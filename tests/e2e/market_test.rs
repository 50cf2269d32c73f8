use anyhow::Result;

use crate::common::smoke_test_manager::SmokeTestManager;

#[tokio::test]
async fn test_market_reports() -> Result<()> {
    let manager = SmokeTestManager::setup().await?;
    manager.run_check("market_reports").await?;
    Ok(())
}

#[tokio::test]
async fn test_target_markets() -> Result<()> {
    let manager = SmokeTestManager::setup().await?;
    manager.run_check("target_markets").await?;
    Ok(())
}
