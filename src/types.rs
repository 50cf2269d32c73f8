//! # API Types
//!
//! Request payloads sent to the web API and the raw response wrapper the
//! smoke checks assert against.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::constants::{prediction_fixture, product_fixture};

/// A response captured without interpreting its status code
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Request description used in assertion messages (e.g. "GET /api/products")
    pub context: String,
    pub status: StatusCode,
    pub content_type: Option<String>,
    /// Parsed JSON body; `None` for empty or non-JSON bodies
    pub body: Option<Value>,
    /// Parse error for a non-empty body that was not JSON (whitespace included)
    pub json_error: Option<String>,
    /// Body length in bytes
    pub raw_len: usize,
}

impl ApiResponse {
    /// Build a response from its parts, parsing the body as JSON when possible
    pub fn from_parts(
        context: impl Into<String>,
        status: StatusCode,
        content_type: Option<String>,
        bytes: &[u8],
    ) -> Self {
        let (body, json_error) = if bytes.is_empty() {
            (None, None)
        } else {
            match serde_json::from_slice::<Value>(bytes) {
                Ok(value) => (Some(value), None),
                Err(e) => (None, Some(e.to_string())),
            }
        };

        Self {
            context: context.into(),
            status,
            content_type,
            body,
            json_error,
            raw_len: bytes.len(),
        }
    }

    /// Whether the body was empty
    pub fn is_empty(&self) -> bool {
        self.body.is_none() && self.json_error.is_none()
    }

    /// Whether the response declared a JSON content type
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false)
    }
}

/// User information returned alongside an issued JWT
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Token and user returned by `GET /api/auth/token`
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub jwt: String,
    /// Raw user object; fields beyond `id` are not guaranteed
    pub user: Value,
    /// Normalized user id
    pub user_id: String,
}

/// Body of `POST /api/products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub company_id: String,
    pub product_name: String,
    pub hs_code: String,
    pub category: String,
    pub material: String,
    pub technical_specs: String,
    pub unit_price: f64,
    pub currency: String,
    pub description: String,
}

impl ProductPayload {
    /// Product fixture with a unique name so the created row can be found again
    pub fn fixture(company_id: impl Into<String>) -> Self {
        Self {
            company_id: company_id.into(),
            product_name: format!("{} {}", product_fixture::NAME_PREFIX, Uuid::new_v4()),
            hs_code: product_fixture::HS_CODE.to_string(),
            category: product_fixture::CATEGORY.to_string(),
            material: product_fixture::MATERIAL.to_string(),
            technical_specs: product_fixture::TECHNICAL_SPECS.to_string(),
            unit_price: product_fixture::UNIT_PRICE,
            currency: product_fixture::CURRENCY.to_string(),
            description: product_fixture::DESCRIPTION.to_string(),
        }
    }

    /// String-valued fields compared against the listed product
    pub fn text_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("hs_code", &self.hs_code),
            ("category", &self.category),
            ("material", &self.material),
            ("technical_specs", &self.technical_specs),
            ("currency", &self.currency),
            ("description", &self.description),
        ]
    }
}

/// Body of `POST /api/ai-predictions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiPredictionPayload {
    pub company_id: String,
    pub prediction_type: String,
    pub period: String,
    pub target_market: String,
    pub product_category: String,
    pub hs_code: String,
    pub market_data: Value,
}

impl AiPredictionPayload {
    /// Market forecast fixture for the given company
    pub fn fixture(company_id: impl Into<String>) -> Self {
        Self {
            company_id: company_id.into(),
            prediction_type: prediction_fixture::PREDICTION_TYPE.to_string(),
            period: prediction_fixture::PERIOD.to_string(),
            target_market: prediction_fixture::TARGET_MARKET.to_string(),
            product_category: prediction_fixture::PRODUCT_CATEGORY.to_string(),
            hs_code: prediction_fixture::HS_CODE.to_string(),
            market_data: json!({
                "previous_prices": prediction_fixture::PREVIOUS_PRICES,
                "market_conditions": prediction_fixture::MARKET_CONDITIONS,
            }),
        }
    }
}

/// Query for `GET /api/ai-predictions`
#[derive(Debug, Clone, Default, Serialize)]
pub struct PredictionQuery {
    pub company_id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub prediction_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

/// Empty JSON object, used where the API may answer with no body
pub fn empty_object() -> Value {
    Value::Object(Map::new())
}
