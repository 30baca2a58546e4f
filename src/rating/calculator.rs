// Score calculator - CVSS v3.1 Base, Temporal, and Environmental formulas
// Reference: https://www.first.org/cvss/v3.1/specification-document (section 7)

use crate::error::Result;
use crate::metrics::{BaseMetrics, MetricSet};
use tracing::debug;

/// Numeric scores computed from one metric set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub base_score: f64,
    pub impact_subscore: f64,
    pub exploitability_subscore: f64,
    pub temporal_score: Option<f64>,
    pub environmental_score: Option<f64>,
}

/// CVSS v3.1 score calculator
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Compute all scores for a metric set
    ///
    /// Fails with `IncompleteMetricSet` when any Base metric is missing.
    /// Temporal and Environmental scores are only present when at least one
    /// metric of the respective group is defined.
    pub fn calculate(metrics: &MetricSet) -> Result<Scores> {
        let base = metrics.base()?;
        let scope_changed = base.scope.is_changed();

        let iss = Self::impact_subscore(
            base.confidentiality_impact.score(),
            base.integrity_impact.score(),
            base.availability_impact.score(),
        );
        let impact = Self::impact(iss, scope_changed);
        let exploitability = Self::exploitability(
            base.attack_vector.score(),
            base.attack_complexity.score(),
            base.privileges_required.score(scope_changed),
            base.user_interaction.score(),
        );
        let base_score = Self::base_score(impact, exploitability, scope_changed);

        let temporal_product = metrics.exploit_code_maturity.score()
            * metrics.remediation_level.score()
            * metrics.report_confidence.score();

        let temporal_score = metrics
            .has_temporal()
            .then(|| Self::round_up(base_score * temporal_product));
        let environmental_score = metrics
            .has_environmental()
            .then(|| Self::environmental(metrics, &base, temporal_product));

        debug!(
            "calculated base={} temporal={:?} environmental={:?}",
            base_score, temporal_score, environmental_score
        );

        Ok(Scores {
            base_score,
            impact_subscore: impact.max(0.0),
            exploitability_subscore: exploitability,
            temporal_score,
            environmental_score,
        })
    }

    /// ISS: combined impact of the three C/I/A selections
    fn impact_subscore(confidentiality: f64, integrity: f64, availability: f64) -> f64 {
        1.0 - (1.0 - confidentiality) * (1.0 - integrity) * (1.0 - availability)
    }

    /// Impact from an impact subscore, depending on Scope
    fn impact(iss: f64, scope_changed: bool) -> f64 {
        if scope_changed {
            7.52 * (iss - 0.029) - 3.25 * (iss - 0.02).powi(15)
        } else {
            6.42 * iss
        }
    }

    fn exploitability(
        attack_vector: f64,
        attack_complexity: f64,
        privileges_required: f64,
        user_interaction: f64,
    ) -> f64 {
        8.22 * attack_vector * attack_complexity * privileges_required * user_interaction
    }

    fn base_score(impact: f64, exploitability: f64, scope_changed: bool) -> f64 {
        if impact <= 0.0 {
            return 0.0;
        }
        if scope_changed {
            Self::round_up((1.08 * (impact + exploitability)).min(10.0))
        } else {
            Self::round_up((impact + exploitability).min(10.0))
        }
    }

    /// Environmental score: the Base formula reapplied with Modified metrics
    /// (falling back to Base values when Not Defined), security-requirement
    /// weighting on the impact side, and Temporal weights on the result
    fn environmental(metrics: &MetricSet, base: &BaseMetrics, temporal_product: f64) -> f64 {
        let attack_vector = metrics.modified_attack_vector.resolve(base.attack_vector);
        let attack_complexity = metrics
            .modified_attack_complexity
            .resolve(base.attack_complexity);
        let privileges_required = metrics
            .modified_privileges_required
            .resolve(base.privileges_required);
        let user_interaction = metrics
            .modified_user_interaction
            .resolve(base.user_interaction);
        let scope = metrics.modified_scope.resolve(base.scope);
        let confidentiality = metrics
            .modified_confidentiality
            .resolve(base.confidentiality_impact);
        let integrity = metrics.modified_integrity.resolve(base.integrity_impact);
        let availability = metrics
            .modified_availability
            .resolve(base.availability_impact);

        // MISS is capped at 0.915 per the v3.1 specification
        let miss = (1.0
            - (1.0 - metrics.confidentiality_requirement.score() * confidentiality.score())
                * (1.0 - metrics.integrity_requirement.score() * integrity.score())
                * (1.0 - metrics.availability_requirement.score() * availability.score()))
        .min(0.915);

        let modified_impact = Self::impact(miss, scope.is_changed());
        if modified_impact <= 0.0 {
            return 0.0;
        }

        let modified_exploitability = Self::exploitability(
            attack_vector.score(),
            attack_complexity.score(),
            privileges_required.score(scope.is_changed()),
            user_interaction.score(),
        );

        let modified_base = if scope.is_changed() {
            Self::round_up((1.08 * (modified_impact + modified_exploitability)).min(10.0))
        } else {
            Self::round_up((modified_impact + modified_exploitability).min(10.0))
        };

        Self::round_up(modified_base * temporal_product)
    }

    /// Round up to one decimal, as defined in Appendix A of the v3.1 spec
    ///
    /// Works on a scaled integer so that floating point representation error
    /// cannot push a value like 8.6 up to 8.7, which a naive ceiling does.
    pub fn round_up(value: f64) -> f64 {
        let scaled = (value * 100_000.0).round() as i64;
        if scaled % 10_000 == 0 {
            scaled as f64 / 100_000.0
        } else {
            ((scaled / 10_000) + 1) as f64 / 10.0
        }
    }
}
