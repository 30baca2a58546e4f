// Metric set - the full selection a score is computed from
//
// Base metrics are optional fields: an absent Base metric is a distinct
// incomplete state, never a default. Temporal and Environmental metrics
// default to Not Defined and leave the score untouched.

use super::base::{
    AttackComplexity, AttackVector, Impact, PrivilegesRequired, Scope, UserInteraction,
};
use super::environmental::{Modified, SecurityRequirement};
use super::temporal::{ExploitCodeMaturity, RemediationLevel, ReportConfidence};
use super::{MetricId, MetricValue};
use crate::error::{CvssError, Result};
use serde::{Deserialize, Serialize};

/// The eight Base metrics, all present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseMetrics {
    // Exploitability metrics
    pub attack_vector: AttackVector,
    pub attack_complexity: AttackComplexity,
    pub privileges_required: PrivilegesRequired,
    pub user_interaction: UserInteraction,
    pub scope: Scope,

    // Impact metrics
    pub confidentiality_impact: Impact,
    pub integrity_impact: Impact,
    pub availability_impact: Impact,
}

/// A CVSS v3.1 metric selection across all three groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSet {
    // Base
    pub attack_vector: Option<AttackVector>,
    pub attack_complexity: Option<AttackComplexity>,
    pub privileges_required: Option<PrivilegesRequired>,
    pub user_interaction: Option<UserInteraction>,
    pub scope: Option<Scope>,
    pub confidentiality_impact: Option<Impact>,
    pub integrity_impact: Option<Impact>,
    pub availability_impact: Option<Impact>,

    // Temporal
    pub exploit_code_maturity: ExploitCodeMaturity,
    pub remediation_level: RemediationLevel,
    pub report_confidence: ReportConfidence,

    // Environmental
    pub confidentiality_requirement: SecurityRequirement,
    pub integrity_requirement: SecurityRequirement,
    pub availability_requirement: SecurityRequirement,
    pub modified_attack_vector: Modified<AttackVector>,
    pub modified_attack_complexity: Modified<AttackComplexity>,
    pub modified_privileges_required: Modified<PrivilegesRequired>,
    pub modified_user_interaction: Modified<UserInteraction>,
    pub modified_scope: Modified<Scope>,
    pub modified_confidentiality: Modified<Impact>,
    pub modified_integrity: Modified<Impact>,
    pub modified_availability: Modified<Impact>,
}

fn parse_code<T: MetricValue>(id: MetricId, code: &str) -> Result<T> {
    T::from_code(code).ok_or_else(|| CvssError::InvalidCode {
        metric: id,
        code: code.to_string(),
    })
}

impl MetricSet {
    /// An empty set: no Base metrics, everything else Not Defined
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a complete Base metric selection
    pub fn from_base(base: BaseMetrics) -> Self {
        MetricSet {
            attack_vector: Some(base.attack_vector),
            attack_complexity: Some(base.attack_complexity),
            privileges_required: Some(base.privileges_required),
            user_interaction: Some(base.user_interaction),
            scope: Some(base.scope),
            confidentiality_impact: Some(base.confidentiality_impact),
            integrity_impact: Some(base.integrity_impact),
            availability_impact: Some(base.availability_impact),
            ..Default::default()
        }
    }

    /// Select a metric by id and code, rejecting codes outside the id's valid
    /// set. Setting the same id again overwrites the previous selection.
    pub fn set(&mut self, id: MetricId, code: &str) -> Result<()> {
        match id {
            MetricId::AV => self.attack_vector = Some(parse_code(id, code)?),
            MetricId::AC => self.attack_complexity = Some(parse_code(id, code)?),
            MetricId::PR => self.privileges_required = Some(parse_code(id, code)?),
            MetricId::UI => self.user_interaction = Some(parse_code(id, code)?),
            MetricId::S => self.scope = Some(parse_code(id, code)?),
            MetricId::C => self.confidentiality_impact = Some(parse_code(id, code)?),
            MetricId::I => self.integrity_impact = Some(parse_code(id, code)?),
            MetricId::A => self.availability_impact = Some(parse_code(id, code)?),
            MetricId::E => self.exploit_code_maturity = parse_code(id, code)?,
            MetricId::RL => self.remediation_level = parse_code(id, code)?,
            MetricId::RC => self.report_confidence = parse_code(id, code)?,
            MetricId::CR => self.confidentiality_requirement = parse_code(id, code)?,
            MetricId::IR => self.integrity_requirement = parse_code(id, code)?,
            MetricId::AR => self.availability_requirement = parse_code(id, code)?,
            MetricId::MAV => self.modified_attack_vector = parse_code(id, code)?,
            MetricId::MAC => self.modified_attack_complexity = parse_code(id, code)?,
            MetricId::MPR => self.modified_privileges_required = parse_code(id, code)?,
            MetricId::MUI => self.modified_user_interaction = parse_code(id, code)?,
            MetricId::MS => self.modified_scope = parse_code(id, code)?,
            MetricId::MC => self.modified_confidentiality = parse_code(id, code)?,
            MetricId::MI => self.modified_integrity = parse_code(id, code)?,
            MetricId::MA => self.modified_availability = parse_code(id, code)?,
        }
        Ok(())
    }

    /// The currently selected code for a metric. Unset Base metrics return
    /// None; Temporal and Environmental metrics report "X" when not defined.
    pub fn code(&self, id: MetricId) -> Option<&'static str> {
        match id {
            MetricId::AV => self.attack_vector.map(|v| v.as_str()),
            MetricId::AC => self.attack_complexity.map(|v| v.as_str()),
            MetricId::PR => self.privileges_required.map(|v| v.as_str()),
            MetricId::UI => self.user_interaction.map(|v| v.as_str()),
            MetricId::S => self.scope.map(|v| v.as_str()),
            MetricId::C => self.confidentiality_impact.map(|v| v.as_str()),
            MetricId::I => self.integrity_impact.map(|v| v.as_str()),
            MetricId::A => self.availability_impact.map(|v| v.as_str()),
            MetricId::E => Some(self.exploit_code_maturity.as_str()),
            MetricId::RL => Some(self.remediation_level.as_str()),
            MetricId::RC => Some(self.report_confidence.as_str()),
            MetricId::CR => Some(self.confidentiality_requirement.as_str()),
            MetricId::IR => Some(self.integrity_requirement.as_str()),
            MetricId::AR => Some(self.availability_requirement.as_str()),
            MetricId::MAV => Some(self.modified_attack_vector.code()),
            MetricId::MAC => Some(self.modified_attack_complexity.code()),
            MetricId::MPR => Some(self.modified_privileges_required.code()),
            MetricId::MUI => Some(self.modified_user_interaction.code()),
            MetricId::MS => Some(self.modified_scope.code()),
            MetricId::MC => Some(self.modified_confidentiality.code()),
            MetricId::MI => Some(self.modified_integrity.code()),
            MetricId::MA => Some(self.modified_availability.code()),
        }
    }

    /// Base metric ids that are still unset, in canonical order
    pub fn missing_base_metrics(&self) -> Vec<MetricId> {
        let mut missing = Vec::new();
        if self.attack_vector.is_none() {
            missing.push(MetricId::AV);
        }
        if self.attack_complexity.is_none() {
            missing.push(MetricId::AC);
        }
        if self.privileges_required.is_none() {
            missing.push(MetricId::PR);
        }
        if self.user_interaction.is_none() {
            missing.push(MetricId::UI);
        }
        if self.scope.is_none() {
            missing.push(MetricId::S);
        }
        if self.confidentiality_impact.is_none() {
            missing.push(MetricId::C);
        }
        if self.integrity_impact.is_none() {
            missing.push(MetricId::I);
        }
        if self.availability_impact.is_none() {
            missing.push(MetricId::A);
        }
        missing
    }

    /// The complete Base metrics, or which ids are missing
    pub fn base(&self) -> Result<BaseMetrics> {
        let (
            Some(attack_vector),
            Some(attack_complexity),
            Some(privileges_required),
            Some(user_interaction),
            Some(scope),
            Some(confidentiality_impact),
            Some(integrity_impact),
            Some(availability_impact),
        ) = (
            self.attack_vector,
            self.attack_complexity,
            self.privileges_required,
            self.user_interaction,
            self.scope,
            self.confidentiality_impact,
            self.integrity_impact,
            self.availability_impact,
        )
        else {
            return Err(CvssError::IncompleteMetricSet {
                missing: self.missing_base_metrics(),
            });
        };

        Ok(BaseMetrics {
            attack_vector,
            attack_complexity,
            privileges_required,
            user_interaction,
            scope,
            confidentiality_impact,
            integrity_impact,
            availability_impact,
        })
    }

    /// True when at least one Temporal metric is defined
    pub fn has_temporal(&self) -> bool {
        self.exploit_code_maturity.is_defined()
            || self.remediation_level.is_defined()
            || self.report_confidence.is_defined()
    }

    /// True when at least one Environmental metric is defined
    pub fn has_environmental(&self) -> bool {
        self.confidentiality_requirement.is_defined()
            || self.integrity_requirement.is_defined()
            || self.availability_requirement.is_defined()
            || self.modified_attack_vector.is_defined()
            || self.modified_attack_complexity.is_defined()
            || self.modified_privileges_required.is_defined()
            || self.modified_user_interaction.is_defined()
            || self.modified_scope.is_defined()
            || self.modified_confidentiality.is_defined()
            || self.modified_integrity.is_defined()
            || self.modified_availability.is_defined()
    }
}
