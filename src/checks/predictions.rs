//! AI prediction checks

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info};

use super::{
    authenticate, expect_ok_non_empty_object, resolve_company_id, CheckContext, CheckOutcome,
    SmokeCheck,
};
use crate::constants::{PREDICTION_PERIODS, PREDICTION_TYPES};
use crate::error::{ClientError, ClientResult};
use crate::types::{empty_object, AiPredictionPayload, PredictionQuery};
use crate::validation::{expect_object, expect_status, json_matches_id};

/// Predictions can be queried for every type/period combination
pub struct AiPredictionsQueryCheck;

#[async_trait]
impl SmokeCheck for AiPredictionsQueryCheck {
    fn name(&self) -> &'static str {
        "ai_predictions_query"
    }

    fn description(&self) -> &'static str {
        "GET /api/ai-predictions returns data for each prediction type and period"
    }

    async fn run(&self, ctx: &CheckContext) -> ClientResult<CheckOutcome> {
        let session = authenticate(ctx).await?;
        let token = Some(session.jwt.as_str());
        // The user id doubles as the company id for prediction queries
        let company_id = session.user_id.clone();

        for prediction_type in PREDICTION_TYPES {
            for period in PREDICTION_PERIODS {
                let query = PredictionQuery {
                    company_id: company_id.clone(),
                    prediction_type: Some(prediction_type.to_string()),
                    period: Some(period.to_string()),
                };

                let resp = ctx.client.list_ai_predictions(token, &query).await?;
                expect_ok_non_empty_object(&resp).map_err(|e| {
                    ClientError::assertion(
                        format!("prediction_type={}, period={}", prediction_type, period),
                        e.to_string(),
                    )
                })?;
                debug!(prediction_type, period, "Prediction query succeeded");
            }
        }

        info!(
            combinations = PREDICTION_TYPES.len() * PREDICTION_PERIODS.len(),
            "All prediction queries returned data"
        );
        Ok(CheckOutcome::Passed)
    }
}

/// A prediction created with the required fields is accepted and echoed back
pub struct AiPredictionCreationCheck;

#[async_trait]
impl SmokeCheck for AiPredictionCreationCheck {
    fn name(&self) -> &'static str {
        "ai_prediction_creation"
    }

    fn description(&self) -> &'static str {
        "POST /api/ai-predictions with required fields succeeds and echoes company and type"
    }

    async fn run(&self, ctx: &CheckContext) -> ClientResult<CheckOutcome> {
        let session = authenticate(ctx).await?;
        let token = Some(session.jwt.as_str());
        let company_id = resolve_company_id(ctx, token, false).await?;

        let payload = AiPredictionPayload::fixture(company_id);
        let resp = ctx.client.create_ai_prediction(token, &payload).await?;
        expect_status(&resp, StatusCode::OK)?;

        if let Some(err) = &resp.json_error {
            return Err(ClientError::assertion(
                &resp.context,
                format!("response JSON decode failed: {}", err),
            ));
        }
        let body = resp.body.clone().unwrap_or_else(empty_object);
        expect_object(&body, &resp.context)?;
        verify_echo(&body, &payload)?;

        info!(company_id = %payload.company_id, "Created AI prediction");
        Ok(CheckOutcome::Passed)
    }
}

/// Fields the server echoes back must match what was sent
pub fn verify_echo(body: &Value, payload: &AiPredictionPayload) -> ClientResult<()> {
    if let Some(company_id) = body.get("company_id") {
        if !json_matches_id(company_id, &payload.company_id) {
            return Err(ClientError::assertion(
                "ai prediction response",
                "returned company_id does not match",
            ));
        }
    }
    if let Some(prediction_type) = body.get("prediction_type") {
        if prediction_type.as_str() != Some(payload.prediction_type.as_str()) {
            return Err(ClientError::assertion(
                "ai prediction response",
                "returned prediction_type does not match",
            ));
        }
    }
    Ok(())
}
