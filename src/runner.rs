//! # Smoke Runner
//!
//! Executes checks one after another and collects a report. A failing check
//! never stops the run; its error is recorded and the next check starts.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::checks::{CheckContext, CheckOutcome, SmokeCheck};
use crate::error::{ClientError, ClientResult};

/// Final state of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Passed,
    Failed,
    Skipped,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Passed => write!(f, "passed"),
            CheckStatus::Failed => write!(f, "failed"),
            CheckStatus::Skipped => write!(f, "skipped"),
        }
    }
}

/// Outcome of one check in a run
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub name: String,
    pub description: String,
    pub status: CheckStatus,
    /// Failure or skip reason
    pub message: Option<String>,
    pub duration_ms: u64,
}

/// Outcome of a whole run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub base_url: String,
    pub reports: Vec<CheckReport>,
}

impl RunReport {
    fn count(&self, status: CheckStatus) -> usize {
        self.reports.iter().filter(|r| r.status == status).count()
    }

    pub fn passed(&self) -> usize {
        self.count(CheckStatus::Passed)
    }

    pub fn failed(&self) -> usize {
        self.count(CheckStatus::Failed)
    }

    pub fn skipped(&self) -> usize {
        self.count(CheckStatus::Skipped)
    }

    /// True when no check failed
    pub fn success(&self) -> bool {
        self.failed() == 0
    }

    /// Total wall time across checks
    pub fn total_duration_ms(&self) -> u64 {
        self.reports.iter().map(|r| r.duration_ms).sum()
    }
}

/// Sequential executor for smoke checks
#[derive(Debug, Clone)]
pub struct SmokeRunner {
    ctx: CheckContext,
}

impl SmokeRunner {
    pub fn new(ctx: CheckContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &CheckContext {
        &self.ctx
    }

    /// Run a single check and turn its result into a report
    pub async fn run_check(&self, check: &dyn SmokeCheck) -> CheckReport {
        let start = Instant::now();
        let result = check.run(&self.ctx).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let (status, message) = match result {
            Ok(CheckOutcome::Passed) => {
                info!(check = check.name(), duration_ms, "Check passed");
                (CheckStatus::Passed, None)
            }
            Ok(CheckOutcome::Skipped(reason)) => {
                warn!(check = check.name(), reason = %reason, "Check skipped");
                (CheckStatus::Skipped, Some(reason))
            }
            Err(e) => {
                error!(check = check.name(), duration_ms, error = %e, "Check failed");
                (CheckStatus::Failed, Some(e.to_string()))
            }
        };

        CheckReport {
            name: check.name().to_string(),
            description: check.description().to_string(),
            status,
            message,
            duration_ms,
        }
    }

    /// Run checks in the given order, one at a time
    pub async fn run(&self, checks: &[Arc<dyn SmokeCheck>]) -> RunReport {
        let started_at = Utc::now();
        info!(
            base_url = %self.ctx.config.base_url,
            checks = checks.len(),
            "Starting smoke run"
        );

        let mut reports = Vec::with_capacity(checks.len());
        for check in checks {
            reports.push(self.run_check(check.as_ref()).await);
        }

        let report = RunReport {
            started_at,
            base_url: self.ctx.config.base_url.clone(),
            reports,
        };
        info!(
            passed = report.passed(),
            failed = report.failed(),
            skipped = report.skipped(),
            "Smoke run finished"
        );
        report
    }

    /// Wait until the server answers the token endpoint with any status
    ///
    /// Only transport failures are retried; any other error is returned as is.
    pub async fn wait_until_ready(&self) -> ClientResult<()> {
        let config = &self.ctx.config;
        let timeout = Duration::from_secs(config.health_timeout_seconds);
        let retry_interval = Duration::from_secs(config.health_retry_interval_seconds);
        let start = Instant::now();

        loop {
            match self.ctx.client.auth_token(None).await {
                Ok(resp) => {
                    info!(status = resp.status.as_u16(), "Web application is reachable");
                    return Ok(());
                }
                Err(e) if !e.is_transport() => return Err(e),
                Err(e) if start.elapsed() + retry_interval < timeout => {
                    info!(error = %e, "Web application not reachable yet, retrying");
                    sleep(retry_interval).await;
                }
                Err(e) => {
                    return Err(ClientError::service_unavailable(
                        config.base_url.clone(),
                        format!(
                            "not reachable after {}s: {}",
                            config.health_timeout_seconds, e
                        ),
                    ));
                }
            }
        }
    }
}
