// Engine - ties vector parsing, score calculation, and severity together

use crate::error::Result;
use crate::metrics::MetricSet;
use crate::rating::{ScoreCalculator, Severity};
use crate::vector::{self, VectorParser};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything computed for one metric set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Canonical vector string for the scored metrics
    #[serde(rename = "vector")]
    pub vector_string: String,
    pub base_score: f64,
    pub impact_subscore: f64,
    pub exploitability_subscore: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporal_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environmental_score: Option<f64>,
    pub severity: Severity,
}

impl ScoreResult {
    /// The most specific score present: Environmental over Temporal over Base
    pub fn current_score(&self) -> f64 {
        self.environmental_score
            .or(self.temporal_score)
            .unwrap_or(self.base_score)
    }
}

/// CVSS v3.1 scoring engine
pub struct CvssEngine;

impl CvssEngine {
    /// Parse a vector string and score it
    pub fn evaluate_vector(input: &str) -> Result<ScoreResult> {
        let metrics = VectorParser::parse(input)?;
        Self::evaluate(&metrics)
    }

    /// Score a metric set and classify its severity
    ///
    /// The severity is rated from the most specific score the set defines.
    /// The returned vector string is the canonical form of the scored
    /// metrics, whatever order or shape the set was assembled from.
    pub fn evaluate(metrics: &MetricSet) -> Result<ScoreResult> {
        let scores = ScoreCalculator::calculate(metrics)?;
        let vector_string = vector::generate(metrics);

        let current = scores
            .environmental_score
            .or(scores.temporal_score)
            .unwrap_or(scores.base_score);
        let severity = Severity::from_score(current);

        debug!("evaluated {} as {} ({})", vector_string, current, severity);

        Ok(ScoreResult {
            vector_string,
            base_score: scores.base_score,
            impact_subscore: scores.impact_subscore,
            exploitability_subscore: scores.exploitability_subscore,
            temporal_score: scores.temporal_score,
            environmental_score: scores.environmental_score,
            severity,
        })
    }
}
