//! # Trade API Client
//!
//! HTTP client for the trade intelligence web API. Every method returns the
//! raw [`ApiResponse`] so callers can assert on status codes themselves,
//! including expected failures such as `401` from an unauthenticated request.

use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::SmokeConfig;
use crate::constants::endpoints;
use crate::error::{ClientError, ClientResult};
use crate::types::{AiPredictionPayload, ApiResponse, PredictionQuery, ProductPayload};

/// HTTP client for the trade web API
#[derive(Clone)]
pub struct TradeApiClient {
    client: Client,
    base_url: Url,
    timeout_ms: u64,
}

impl std::fmt::Debug for TradeApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradeApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl TradeApiClient {
    /// Create a client for the configured base URL and timeout
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trade_smoke::{SmokeConfig, TradeApiClient};
    ///
    /// let client = TradeApiClient::new(&SmokeConfig::default()).unwrap();
    /// assert_eq!(client.base_url().as_str(), "http://localhost:3000/");
    /// ```
    pub fn new(config: &SmokeConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ClientError::config_error(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(format!("trade-smoke/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ClientError::config_error(format!("Failed to create HTTP client: {}", e))
            })?;

        info!(
            base_url = %base_url,
            timeout_ms = config.timeout_ms,
            "Created trade API client"
        );

        Ok(Self {
            client,
            base_url,
            timeout_ms: config.timeout_ms,
        })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> ClientResult<Url> {
        self.base_url.join(path).map_err(|e| {
            ClientError::config_error(format!("Failed to construct URL for {}: {}", path, e))
        })
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> ClientResult<RequestBuilder> {
        let url = self.url(path)?;
        let mut builder = self
            .client
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    /// Send a request and capture status, content type, and body
    async fn execute(&self, context: String, builder: RequestBuilder) -> ClientResult<ApiResponse> {
        debug!(request = %context, "Sending request");

        let response = builder.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?;

        debug!(
            request = %context,
            status = status.as_u16(),
            content_type = content_type.as_deref().unwrap_or("-"),
            bytes = bytes.len(),
            "Received response"
        );

        Ok(ApiResponse::from_parts(context, status, content_type, &bytes))
    }

    async fn get(&self, path: &str, token: Option<&str>) -> ClientResult<ApiResponse> {
        let builder = self.request(Method::GET, path, token)?;
        self.execute(format!("GET {}", path), builder).await
    }

    async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        token: Option<&str>,
        query: &Q,
    ) -> ClientResult<ApiResponse> {
        let builder = self.request(Method::GET, path, token)?.query(query);
        self.execute(format!("GET {}", path), builder).await
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> ClientResult<ApiResponse> {
        let builder = self.request(Method::POST, path, token)?.json(body);
        self.execute(format!("POST {}", path), builder).await
    }

    /// GET /api/auth/token
    pub async fn auth_token(&self, token: Option<&str>) -> ClientResult<ApiResponse> {
        self.get(endpoints::AUTH_TOKEN, token).await
    }

    /// GET /api/companies
    pub async fn list_companies(&self, token: Option<&str>) -> ClientResult<ApiResponse> {
        self.get(endpoints::COMPANIES, token).await
    }

    /// GET /api/profile
    pub async fn get_profile(&self, token: Option<&str>) -> ClientResult<ApiResponse> {
        self.get(endpoints::PROFILE, token).await
    }

    /// GET /api/products?company_id=
    pub async fn list_products(
        &self,
        token: Option<&str>,
        company_id: &str,
    ) -> ClientResult<ApiResponse> {
        self.get_with_query(endpoints::PRODUCTS, token, &[("company_id", company_id)])
            .await
    }

    /// POST /api/products
    pub async fn create_product(
        &self,
        token: Option<&str>,
        payload: &ProductPayload,
    ) -> ClientResult<ApiResponse> {
        self.post_json(endpoints::PRODUCTS, token, payload).await
    }

    /// DELETE /api/products/{id}
    pub async fn delete_product(
        &self,
        token: Option<&str>,
        product_id: &str,
    ) -> ClientResult<ApiResponse> {
        let path = format!("{}/{}", endpoints::PRODUCTS, product_id);
        let builder = self.request(Method::DELETE, &path, token)?;
        self.execute(format!("DELETE {}", path), builder).await
    }

    /// GET /api/ai-predictions?company_id=&type=&period=
    pub async fn list_ai_predictions(
        &self,
        token: Option<&str>,
        query: &PredictionQuery,
    ) -> ClientResult<ApiResponse> {
        self.get_with_query(endpoints::AI_PREDICTIONS, token, query)
            .await
    }

    /// POST /api/ai-predictions
    pub async fn create_ai_prediction(
        &self,
        token: Option<&str>,
        payload: &AiPredictionPayload,
    ) -> ClientResult<ApiResponse> {
        self.post_json(endpoints::AI_PREDICTIONS, token, payload)
            .await
    }

    /// GET /api/market-reports?company_id=
    pub async fn market_reports(
        &self,
        token: Option<&str>,
        company_id: &str,
    ) -> ClientResult<ApiResponse> {
        self.get_with_query(endpoints::MARKET_REPORTS, token, &[("company_id", company_id)])
            .await
    }

    /// GET /api/target-markets, optionally scoped to a company
    pub async fn target_markets(
        &self,
        token: Option<&str>,
        company_id: Option<&str>,
    ) -> ClientResult<ApiResponse> {
        match company_id {
            Some(id) => {
                self.get_with_query(endpoints::TARGET_MARKETS, token, &[("company_id", id)])
                    .await
            }
            None => self.get(endpoints::TARGET_MARKETS, token).await,
        }
    }

    /// GET /api/risk-assessment
    pub async fn risk_assessment(&self, token: Option<&str>) -> ClientResult<ApiResponse> {
        self.get(endpoints::RISK_ASSESSMENT, token).await
    }

    /// GET /api/price-optimization
    pub async fn price_optimization(&self, token: Option<&str>) -> ClientResult<ApiResponse> {
        self.get(endpoints::PRICE_OPTIMIZATION, token).await
    }

    /// GET /api/trend-detection
    pub async fn trend_detection(&self, token: Option<&str>) -> ClientResult<ApiResponse> {
        self.get(endpoints::TREND_DETECTION, token).await
    }

    /// GET /api/potential-buyers?company_id=
    pub async fn potential_buyers(
        &self,
        token: Option<&str>,
        company_id: &str,
    ) -> ClientResult<ApiResponse> {
        self.get_with_query(endpoints::POTENTIAL_BUYERS, token, &[("company_id", company_id)])
            .await
    }

    /// GET /api/campaigns?company_id=
    pub async fn campaigns(
        &self,
        token: Option<&str>,
        company_id: &str,
    ) -> ClientResult<ApiResponse> {
        self.get_with_query(endpoints::CAMPAIGNS, token, &[("company_id", company_id)])
            .await
    }

    /// GET /api/notifications?limit=
    pub async fn notifications(&self, token: Option<&str>, limit: u32) -> ClientResult<ApiResponse> {
        self.get_with_query(endpoints::NOTIFICATIONS, token, &[("limit", limit)])
            .await
    }

    /// GET /api/product-matching?company_id=
    pub async fn product_matches(
        &self,
        token: Option<&str>,
        company_id: &str,
    ) -> ClientResult<ApiResponse> {
        self.get_with_query(endpoints::PRODUCT_MATCHING, token, &[("company_id", company_id)])
            .await
    }
}
