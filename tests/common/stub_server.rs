//! # Stub Web API
//!
//! In-process axum stand-in for the trade web application, bound to an
//! ephemeral port. Behaves like the real routes (list wrappers, numeric ids,
//! decimal prices returned as strings) and can be bent per test through
//! [`StubOptions`]: JSON or raw per-path replies, a dropped product field, and
//! a failing product delete.

#![allow(dead_code)]

use axum::extract::{Path, Query, RawQuery, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use trade_smoke::SmokeConfig;

pub const VALID_TOKEN: &str = "valid-token";
pub const ISSUED_JWT: &str = "stub.jwt.token";

/// How the token endpoint treats callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenMode {
    /// Issue a session to anyone (development server behavior)
    Anonymous,
    /// Only a `Bearer valid-token` request gets a session; others get 401
    RequireBearer,
}

/// Per-test knobs for the stub
#[derive(Debug, Clone)]
pub struct StubOptions {
    pub token_mode: TokenMode,
    /// Body of `GET /api/companies`
    pub companies: Value,
    /// Field dropped from stored products, to simulate a persistence bug
    pub drop_product_field: Option<&'static str>,
    /// Whether `POST /api/products` returns the created row
    pub return_created_product: bool,
    /// Fixed responses keyed by path, taking precedence over the route logic
    pub overrides: HashMap<&'static str, (StatusCode, Value)>,
    /// Fixed raw responses keyed by path, taking precedence over `overrides`
    pub raw_overrides: HashMap<&'static str, RawReply>,
    /// Status for `DELETE /api/products/{id}`; the product is kept when set
    pub delete_status: Option<StatusCode>,
}

/// A response with an arbitrary content type and unparsed body
#[derive(Debug, Clone)]
pub struct RawReply {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: &'static str,
}

impl RawReply {
    pub fn new(status: StatusCode, content_type: &'static str, body: &'static str) -> Self {
        Self {
            status,
            content_type,
            body,
        }
    }

    /// `200 application/json` with the given body text
    pub fn json_text(body: &'static str) -> Self {
        Self::new(StatusCode::OK, "application/json", body)
    }
}

impl Default for StubOptions {
    fn default() -> Self {
        Self {
            token_mode: TokenMode::Anonymous,
            companies: json!({"companies": [{"id": 1, "company_name": "Acme Export"}]}),
            drop_product_field: None,
            return_created_product: true,
            overrides: HashMap::new(),
            raw_overrides: HashMap::new(),
            delete_status: None,
        }
    }
}

/// Shared state recorded by the stub routes
#[derive(Debug, Default)]
pub struct StubState {
    pub options: Mutex<Option<StubOptions>>,
    pub products: Mutex<Vec<Value>>,
    pub deleted: Mutex<Vec<String>>,
    pub prediction_queries: Mutex<Vec<String>>,
    pub created_predictions: Mutex<Vec<Value>>,
    pub authorizations: Mutex<Vec<(String, Option<String>)>>,
    next_id: AtomicU64,
}

impl StubState {
    fn options(&self) -> StubOptions {
        self.options
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_default()
    }

    fn record_auth(&self, path: &str, headers: &HeaderMap) {
        let auth = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.authorizations
            .lock()
            .unwrap()
            .push((path.to_string(), auth));
    }

    /// Authorization header sent on the last request to `path`
    pub fn last_authorization(&self, path: &str) -> Option<Option<String>> {
        self.authorizations
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, auth)| auth.clone())
    }
}

/// Running stub server
pub struct StubServer {
    pub base_url: String,
    pub state: Arc<StubState>,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Start a stub with default options
    pub async fn start() -> Self {
        Self::start_with(StubOptions::default()).await
    }

    /// Start a stub with explicit options
    pub async fn start_with(options: StubOptions) -> Self {
        let state = Arc::new(StubState::default());
        *state.options.lock().unwrap() = Some(options);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub listener");
        let addr = listener.local_addr().expect("Failed to read stub address");

        let app = router(state.clone());
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Stub server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
            handle,
        }
    }

    /// Smoke configuration pointing at this stub
    pub fn config(&self) -> SmokeConfig {
        SmokeConfig {
            base_url: self.base_url.clone(),
            timeout_ms: 5_000,
            skip_health_check: true,
            health_timeout_seconds: 5,
            health_retry_interval_seconds: 1,
            ..Default::default()
        }
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn router(state: Arc<StubState>) -> Router {
    Router::new()
        .route("/api/auth/token", get(auth_token))
        .route("/api/companies", get(companies))
        .route("/api/profile", get(profile))
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/{id}", delete(delete_product))
        .route(
            "/api/ai-predictions",
            get(list_predictions).post(create_prediction),
        )
        .route("/api/market-reports", get(market_reports))
        .route("/api/target-markets", get(target_markets))
        .route("/api/risk-assessment", get(risk_assessment))
        .route("/api/price-optimization", get(price_optimization))
        .route("/api/trend-detection", get(trend_detection))
        .route("/api/potential-buyers", get(potential_buyers))
        .route("/api/campaigns", get(campaigns))
        .route("/api/notifications", get(notifications))
        .route("/api/product-matching", get(product_matching))
        .with_state(state)
}

/// Configured override for `path`, raw replies first
fn override_for(options: &StubOptions, path: &str) -> Option<Response> {
    if let Some(raw) = options.raw_overrides.get(path) {
        return Some(
            (
                raw.status,
                [(header::CONTENT_TYPE, raw.content_type)],
                raw.body.to_string(),
            )
                .into_response(),
        );
    }
    options
        .overrides
        .get(path)
        .map(|(status, body)| (*status, Json(body.clone())).into_response())
}

/// Apply a configured override for `path`, else the route's own response
fn respond(state: &StubState, path: &str, default: impl FnOnce() -> Response) -> Response {
    override_for(&state.options(), path).unwrap_or_else(default)
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({"error": message}))).into_response()
}

fn session_body() -> Value {
    json!({
        "jwt": ISSUED_JWT,
        "user": {"id": 1, "email": "owner@acme.test", "name": "Acme Owner"}
    })
}

async fn auth_token(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    state.record_auth("/api/auth/token", &headers);
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    respond(&state, "/api/auth/token", || {
        match (state.options().token_mode, bearer.as_deref()) {
            (TokenMode::Anonymous, _) => Json(session_body()).into_response(),
            (TokenMode::RequireBearer, Some(value)) if value == format!("Bearer {}", VALID_TOKEN) => {
                let mut body = session_body();
                body["user"]["id"] = json!("user-1");
                Json(body).into_response()
            }
            (TokenMode::RequireBearer, _) => {
                (StatusCode::UNAUTHORIZED, Json(json!({"error": "Unauthorized"}))).into_response()
            }
        }
    })
}

async fn companies(State(state): State<Arc<StubState>>) -> Response {
    respond(&state, "/api/companies", || Json(state.options().companies).into_response())
}

async fn profile(State(state): State<Arc<StubState>>) -> Response {
    respond(&state, "/api/profile", || {
        Json(json!({"user": {"id": 1, "name": "Acme Owner", "email": "owner@acme.test"}}))
            .into_response()
    })
}

fn same_id(value: Option<&Value>, expected: &str) -> bool {
    match value {
        Some(Value::String(s)) => s == expected,
        Some(Value::Number(n)) => n.to_string() == expected,
        _ => false,
    }
}

async fn list_products(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    respond(&state, "/api/products", || {
        let Some(company_id) = params.get("company_id") else {
            return bad_request("Company ID required");
        };
        let products: Vec<Value> = state
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| same_id(p.get("company_id"), company_id))
            .cloned()
            .collect();
        Json(json!({ "products": products })).into_response()
    })
}

async fn create_product(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    let options = state.options();
    if let Some(response) = override_for(&options, "/api/products") {
        return response;
    }
    let id = state.next_id.fetch_add(1, Ordering::SeqCst) + 100;

    let mut row = body.clone();
    row["id"] = json!(id);
    // Integer primary keys and decimal columns, as the database returns them
    if let Some(company_id) = body["company_id"].as_str().and_then(|s| s.parse::<i64>().ok()) {
        row["company_id"] = json!(company_id);
    }
    if let Some(price) = body["unit_price"].as_f64() {
        row["unit_price"] = json!(format!("{:.2}", price));
    }
    if let Some(field) = options.drop_product_field {
        if let Some(object) = row.as_object_mut() {
            object.remove(field);
        }
    }
    state.products.lock().unwrap().push(row.clone());

    if options.return_created_product {
        Json(json!({ "product": row })).into_response()
    } else {
        Json(json!({ "message": "created" })).into_response()
    }
}

async fn delete_product(State(state): State<Arc<StubState>>, Path(id): Path<String>) -> Response {
    if let Some(status) = state.options().delete_status {
        return (status, Json(json!({"error": "Delete failed"}))).into_response();
    }
    let mut products = state.products.lock().unwrap();
    let before = products.len();
    products.retain(|p| !same_id(p.get("id"), &id));
    if products.len() == before {
        return (StatusCode::NOT_FOUND, Json(json!({"error": "Product not found"}))).into_response();
    }
    state.deleted.lock().unwrap().push(id);
    StatusCode::NO_CONTENT.into_response()
}

async fn list_predictions(
    State(state): State<Arc<StubState>>,
    RawQuery(query): RawQuery,
) -> Response {
    let query = query.unwrap_or_default();
    state.prediction_queries.lock().unwrap().push(query.clone());

    respond(&state, "/api/ai-predictions", || {
        if !query.contains("company_id=") {
            return bad_request("Company ID is required");
        }
        Json(json!({"predictions": []})).into_response()
    })
}

async fn create_prediction(
    State(state): State<Arc<StubState>>,
    Json(body): Json<Value>,
) -> Response {
    state.created_predictions.lock().unwrap().push(body.clone());
    respond(&state, "/api/ai-predictions", || {
        Json(json!({
            "company_id": body["company_id"],
            "prediction_type": body["prediction_type"],
            "prediction": {"confidence_score": 0.82, "period": body["period"]},
            "status": "success"
        }))
        .into_response()
    })
}

async fn market_reports(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    respond(&state, "/api/market-reports", || {
        if !params.contains_key("company_id") {
            return bad_request("Company ID required");
        }
        Json(json!({"reports": []})).into_response()
    })
}

async fn target_markets(State(state): State<Arc<StubState>>) -> Response {
    respond(&state, "/api/target-markets", || {
        Json(json!([{"country": "Germany", "market_potential": "high"}])).into_response()
    })
}

async fn risk_assessment(State(state): State<Arc<StubState>>) -> Response {
    respond(&state, "/api/risk-assessment", || {
        Json(json!({"assessments": []})).into_response()
    })
}

async fn price_optimization(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    state.record_auth("/api/price-optimization", &headers);
    respond(&state, "/api/price-optimization", || {
        if headers.get(header::AUTHORIZATION).is_none() {
            return (StatusCode::UNAUTHORIZED, Json(json!({"error": "Unauthorized"}))).into_response();
        }
        Json(json!({"optimizations": []})).into_response()
    })
}

async fn trend_detection(State(state): State<Arc<StubState>>) -> Response {
    respond(&state, "/api/trend-detection", || {
        Json(json!({"trends": []})).into_response()
    })
}

async fn potential_buyers(State(state): State<Arc<StubState>>) -> Response {
    respond(&state, "/api/potential-buyers", || {
        Json(json!({"buyers": [{"buyer_name": "Nordic Imports", "match_score": 0.91}]})).into_response()
    })
}

async fn campaigns(State(state): State<Arc<StubState>>) -> Response {
    respond(&state, "/api/campaigns", || Json(json!({"campaigns": []})).into_response())
}

async fn notifications(State(state): State<Arc<StubState>>) -> Response {
    respond(&state, "/api/notifications", || {
        Json(json!({"notifications": [], "unread_count": 0, "total": 0})).into_response()
    })
}

async fn product_matching(State(state): State<Arc<StubState>>) -> Response {
    respond(&state, "/api/product-matching", || Json(json!({"matches": []})).into_response())
}
