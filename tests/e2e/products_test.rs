//! # Product Catalogue End-to-End Tests
//!
//! The creation test writes one product and deletes it afterwards.

use anyhow::Result;

use trade_smoke::checks::{authenticate, resolve_company_id};

use crate::common::smoke_test_manager::SmokeTestManager;

#[tokio::test]
async fn test_product_creation() -> Result<()> {
    let manager = SmokeTestManager::setup().await?;
    manager.run_check("product_creation").await?;
    Ok(())
}

#[tokio::test]
async fn test_products_by_company() -> Result<()> {
    let manager = SmokeTestManager::setup().await?;

    let session = authenticate(manager.context()).await?;
    let company_id = resolve_company_id(manager.context(), Some(&session.jwt), false).await?;
    println!("🏢 Using company {}", company_id);

    manager.run_check("products_by_company").await?;
    Ok(())
}
