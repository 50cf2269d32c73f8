#![allow(clippy::doc_markdown)] // Allow technical terms like JWT, HS code in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Trade Smoke
//!
//! End-to-end smoke checks for the trade intelligence web API.
//!
//! ## Overview
//!
//! Each check calls a running instance of the web application over HTTP and
//! asserts on status codes and JSON response shapes: authentication, companies,
//! products, AI predictions, market reports, target markets, risk assessment,
//! price optimization, and trend detection.
//!
//! Checks run sequentially and share nothing but the HTTP client. A failed
//! assertion fails only its own check.
//!
//! ## Module Organization
//!
//! - [`api_clients`] - HTTP client for the web API
//! - [`checks`] - Smoke scenarios and their registry
//! - [`runner`] - Sequential execution and reporting
//! - [`validation`] - Response shape assertions and id extraction
//! - [`config`] - Configuration loading
//! - [`error`] - Error taxonomy
//! - [`logging`] - Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trade_smoke::{CheckContext, CheckRegistry, SmokeConfig, SmokeRunner};
//!
//! # async fn example() -> trade_smoke::ClientResult<()> {
//! let config = SmokeConfig::load()?;
//! let runner = SmokeRunner::new(CheckContext::new(config)?);
//! runner.wait_until_ready().await?;
//!
//! let registry = CheckRegistry::core();
//! let checks = registry.select(&[])?;
//! let report = runner.run(&checks).await;
//! println!("{} passed, {} failed", report.passed(), report.failed());
//! # Ok(())
//! # }
//! ```

pub mod api_clients;
pub mod checks;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod runner;
pub mod types;
pub mod validation;

pub use api_clients::TradeApiClient;
pub use checks::{CheckContext, CheckOutcome, CheckRegistry, SmokeCheck};
pub use config::SmokeConfig;
pub use error::{ClientError, ClientResult};
pub use runner::{CheckReport, CheckStatus, RunReport, SmokeRunner};
