//! # Check Registry
//!
//! Ordered collection of smoke checks with lookup by name.

use std::sync::Arc;

use super::analytics::{PriceOptimizationCheck, RiskAssessmentCheck, TrendDetectionCheck};
use super::auth::{JwtTokenIssuanceCheck, UserProfileCheck};
use super::market::{
    ExportCampaignsCheck, MarketReportsCheck, NotificationsCheck, PotentialBuyersCheck,
    TargetMarketsCheck,
};
use super::predictions::{AiPredictionCreationCheck, AiPredictionsQueryCheck};
use super::products::{ProductCreationCheck, ProductMatchingCheck, ProductsByCompanyCheck};
use super::SmokeCheck;
use crate::error::{ClientError, ClientResult};

/// Ordered set of registered checks
#[derive(Clone)]
pub struct CheckRegistry {
    checks: Vec<Arc<dyn SmokeCheck>>,
}

impl std::fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckRegistry")
            .field("checks", &self.names())
            .finish()
    }
}

impl Default for CheckRegistry {
    /// Core checks followed by the extended endpoint checks
    fn default() -> Self {
        let mut registry = Self::core();
        registry.register(Arc::new(UserProfileCheck));
        registry.register(Arc::new(PotentialBuyersCheck));
        registry.register(Arc::new(ExportCampaignsCheck));
        registry.register(Arc::new(NotificationsCheck));
        registry.register(Arc::new(ProductMatchingCheck));
        registry
    }
}

impl CheckRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// The ten core API checks, in execution order
    pub fn core() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(JwtTokenIssuanceCheck));
        registry.register(Arc::new(ProductCreationCheck));
        registry.register(Arc::new(ProductsByCompanyCheck));
        registry.register(Arc::new(AiPredictionsQueryCheck));
        registry.register(Arc::new(AiPredictionCreationCheck));
        registry.register(Arc::new(MarketReportsCheck));
        registry.register(Arc::new(TargetMarketsCheck));
        registry.register(Arc::new(RiskAssessmentCheck));
        registry.register(Arc::new(PriceOptimizationCheck));
        registry.register(Arc::new(TrendDetectionCheck));
        registry
    }

    /// Append a check; a check with the same name replaces the earlier one in place
    pub fn register(&mut self, check: Arc<dyn SmokeCheck>) {
        match self.checks.iter().position(|c| c.name() == check.name()) {
            Some(index) => self.checks[index] = check,
            None => self.checks.push(check),
        }
    }

    /// Look up a check by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn SmokeCheck>> {
        self.checks.iter().find(|c| c.name() == name).cloned()
    }

    /// Registered names, in order
    pub fn names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn SmokeCheck>> {
        self.checks.iter()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Resolve a selection of names; an empty selection means every check
    ///
    /// The result keeps registry order regardless of selection order.
    pub fn select(&self, names: &[String]) -> ClientResult<Vec<Arc<dyn SmokeCheck>>> {
        if let Some(unknown) = names.iter().find(|n| self.get(n).is_none()) {
            return Err(ClientError::UnknownCheck(unknown.clone()));
        }

        Ok(self
            .checks
            .iter()
            .filter(|c| names.is_empty() || names.iter().any(|n| n == c.name()))
            .cloned()
            .collect())
    }
}
