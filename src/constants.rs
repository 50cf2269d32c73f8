//! # Smoke Test Constants
//!
//! Endpoint paths, defaults, and the fixed fixtures sent to the web API.
//!
//! The fixtures mirror what a real exporter would submit so the server
//! exercises its normal insert paths rather than validation failures.

/// API endpoint paths consumed by the smoke checks
pub mod endpoints {
    pub const AUTH_TOKEN: &str = "/api/auth/token";
    pub const COMPANIES: &str = "/api/companies";
    pub const PROFILE: &str = "/api/profile";
    pub const PRODUCTS: &str = "/api/products";
    pub const AI_PREDICTIONS: &str = "/api/ai-predictions";
    pub const MARKET_REPORTS: &str = "/api/market-reports";
    pub const TARGET_MARKETS: &str = "/api/target-markets";
    pub const RISK_ASSESSMENT: &str = "/api/risk-assessment";
    pub const PRICE_OPTIMIZATION: &str = "/api/price-optimization";
    pub const TREND_DETECTION: &str = "/api/trend-detection";
    pub const POTENTIAL_BUYERS: &str = "/api/potential-buyers";
    pub const CAMPAIGNS: &str = "/api/campaigns";
    pub const NOTIFICATIONS: &str = "/api/notifications";
    pub const PRODUCT_MATCHING: &str = "/api/product-matching";
}

/// Default configuration values
pub mod defaults {
    pub const BASE_URL: &str = "http://localhost:3000";
    pub const TIMEOUT_MS: u64 = 30_000;
    pub const PLACEHOLDER_TOKEN: &str = "test-placeholder-jwt-token";
    pub const HEALTH_TIMEOUT_SECONDS: u64 = 60;
    pub const HEALTH_RETRY_INTERVAL_SECONDS: u64 = 2;
    pub const NOTIFICATION_LIMIT: u32 = 10;
}

/// Prediction types queried by the AI prediction check
pub const PREDICTION_TYPES: [&str; 3] = ["market_forecast", "price_trend", "demand_prediction"];

/// Reporting periods queried by the AI prediction check
pub const PREDICTION_PERIODS: [&str; 2] = ["Q1-2025", "2025"];

/// Product fixture fields (the name is generated per run)
pub mod product_fixture {
    pub const NAME_PREFIX: &str = "Test Product";
    pub const HS_CODE: &str = "84713000";
    pub const CATEGORY: &str = "Electronics";
    pub const MATERIAL: &str = "Plastic and Metal";
    pub const TECHNICAL_SPECS: &str = "Specs details here";
    pub const UNIT_PRICE: f64 = 199.99;
    pub const CURRENCY: &str = "USD";
    pub const DESCRIPTION: &str = "This is a test product created during automated testing.";
}

/// AI prediction fixture fields
pub mod prediction_fixture {
    pub const PREDICTION_TYPE: &str = "market_forecast";
    pub const PERIOD: &str = "2025-Q4";
    pub const TARGET_MARKET: &str = "North America";
    pub const PRODUCT_CATEGORY: &str = "Electronics";
    pub const HS_CODE: &str = "854239";
    pub const PREVIOUS_PRICES: [i64; 3] = [100, 105, 110];
    pub const MARKET_CONDITIONS: &str = "stable";
}

/// Tolerance used when comparing prices that went through a decimal column
pub const PRICE_EPSILON: f64 = 1e-6;
