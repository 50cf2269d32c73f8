use anyhow::Result;

use crate::common::smoke_test_manager::SmokeTestManager;

#[tokio::test]
async fn test_ai_predictions_query() -> Result<()> {
    let manager = SmokeTestManager::setup().await?;
    manager.run_check("ai_predictions_query").await?;
    Ok(())
}

#[tokio::test]
async fn test_ai_prediction_creation() -> Result<()> {
    let manager = SmokeTestManager::setup().await?;
    manager.run_check("ai_prediction_creation").await?;
    Ok(())
}
