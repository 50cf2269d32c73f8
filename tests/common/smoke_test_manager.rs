//! # Smoke Test Manager
//!
//! Lightweight manager for end-to-end runs that assumes the web application
//! is already running. Validates reachability and hands out a check context.
//!
//! ## Configuration Precedence
//!
//! Uses 2-tier precedence (highest to lowest):
//! 1. **Environment Variables** (highest priority)
//!    - `TRADE_SMOKE_BASE_URL` - Override the web application URL
//!    - `TRADE_SMOKE_AUTH_TOKEN` - Known-valid bearer token
//!    - `TRADE_SMOKE_SKIP_HEALTH_CHECK` - Skip the readiness wait
//!    - `TRADE_SMOKE_HEALTH_TIMEOUT` - Readiness timeout in seconds
//!    - `TRADE_SMOKE_HEALTH_RETRY_INTERVAL` - Retry interval in seconds
//! 2. **Code Defaults** (lowest priority)
//!    - Web application: `http://localhost:3000`
//!
//! ## Usage
//!
//! ```bash
//! # Start the web application first, then
//! cargo test --features test-services --test e2e_tests
//!
//! # Against another host
//! TRADE_SMOKE_BASE_URL=http://staging.local:3000 cargo test --features test-services --test e2e_tests
//! ```

#![allow(dead_code)]

use anyhow::Result;

use trade_smoke::checks::{CheckContext, CheckOutcome, CheckRegistry};
use trade_smoke::{SmokeConfig, SmokeRunner};

/// End-to-end test manager for a running web application
pub struct SmokeTestManager {
    pub runner: SmokeRunner,
    pub registry: CheckRegistry,
    pub base_url: String,
}

impl SmokeTestManager {
    /// Set up with defaults plus environment overrides
    pub async fn setup() -> Result<Self> {
        let mut config = SmokeConfig::default();
        config.apply_env_overrides();
        Self::setup_with_config(config).await
    }

    /// Set up with an explicit configuration
    pub async fn setup_with_config(config: SmokeConfig) -> Result<Self> {
        println!("🔧 Setting up smoke test manager");
        println!("   Web application: {}", config.base_url);

        config.validate()?;
        let skip_health_check = config.skip_health_check;
        let base_url = config.base_url.clone();

        let runner = SmokeRunner::new(CheckContext::new(config)?);

        if skip_health_check {
            println!("⚠️  Skipping readiness wait (TRADE_SMOKE_SKIP_HEALTH_CHECK=true)");
        } else {
            println!("⏳ Waiting for web application...");
            runner.wait_until_ready().await?;
            println!("✅ Web application is reachable");
        }

        Ok(Self {
            runner,
            registry: CheckRegistry::default(),
            base_url,
        })
    }

    pub fn context(&self) -> &CheckContext {
        self.runner.context()
    }

    /// Run one registered check, turning a failure into an error
    pub async fn run_check(&self, name: &str) -> Result<CheckOutcome> {
        let check = self
            .registry
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("check '{}' is not registered", name))?;

        println!("🧪 {}: {}", check.name(), check.description());
        let outcome = check.run(self.context()).await?;
        match &outcome {
            CheckOutcome::Passed => println!("   ✅ {} passed", name),
            CheckOutcome::Skipped(reason) => println!("   ⏭️  {} skipped: {}", name, reason),
        }
        Ok(outcome)
    }
}
