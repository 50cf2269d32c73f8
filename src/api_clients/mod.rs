//! API Client Modules
//!
//! HTTP clients for the web application under test.

pub mod trade_client;

pub use trade_client::TradeApiClient;
