// Metrics module - CVSS v3.1 metric model
// Reference: https://www.first.org/cvss/v3.1/specification-document

use crate::error::CvssError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod base;
pub mod environmental;
pub mod set;
pub mod temporal;

pub use base::{
    AttackComplexity, AttackVector, Impact, PrivilegesRequired, Scope, UserInteraction,
};
pub use environmental::{Modified, SecurityRequirement};
pub use set::{BaseMetrics, MetricSet};
pub use temporal::{ExploitCodeMaturity, RemediationLevel, ReportConfidence};

/// Conversion between a metric value and its single-letter vector code
pub trait MetricValue: Copy {
    /// Parse a vector-string code into this metric value
    fn from_code(code: &str) -> Option<Self>
    where
        Self: Sized;

    /// The code this value uses in a vector string
    fn code(&self) -> &'static str;
}

/// The three CVSS v3.1 metric groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricGroup {
    Base,
    Temporal,
    Environmental,
}

impl MetricGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricGroup::Base => "Base",
            MetricGroup::Temporal => "Temporal",
            MetricGroup::Environmental => "Environmental",
        }
    }
}

/// Identifier of a CVSS v3.1 metric as it appears in vector strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricId {
    // Base
    AV,
    AC,
    PR,
    UI,
    S,
    C,
    I,
    A,
    // Temporal
    E,
    RL,
    RC,
    // Environmental
    CR,
    IR,
    AR,
    MAV,
    MAC,
    MPR,
    MUI,
    MS,
    MC,
    MI,
    MA,
}

impl MetricId {
    /// All metric ids in canonical vector-string order
    pub const ALL: [MetricId; 22] = [
        MetricId::AV,
        MetricId::AC,
        MetricId::PR,
        MetricId::UI,
        MetricId::S,
        MetricId::C,
        MetricId::I,
        MetricId::A,
        MetricId::E,
        MetricId::RL,
        MetricId::RC,
        MetricId::CR,
        MetricId::IR,
        MetricId::AR,
        MetricId::MAV,
        MetricId::MAC,
        MetricId::MPR,
        MetricId::MUI,
        MetricId::MS,
        MetricId::MC,
        MetricId::MI,
        MetricId::MA,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricId::AV => "AV",
            MetricId::AC => "AC",
            MetricId::PR => "PR",
            MetricId::UI => "UI",
            MetricId::S => "S",
            MetricId::C => "C",
            MetricId::I => "I",
            MetricId::A => "A",
            MetricId::E => "E",
            MetricId::RL => "RL",
            MetricId::RC => "RC",
            MetricId::CR => "CR",
            MetricId::IR => "IR",
            MetricId::AR => "AR",
            MetricId::MAV => "MAV",
            MetricId::MAC => "MAC",
            MetricId::MPR => "MPR",
            MetricId::MUI => "MUI",
            MetricId::MS => "MS",
            MetricId::MC => "MC",
            MetricId::MI => "MI",
            MetricId::MA => "MA",
        }
    }

    /// Human-readable metric name
    pub fn name(&self) -> &'static str {
        match self {
            MetricId::AV => "Attack Vector",
            MetricId::AC => "Attack Complexity",
            MetricId::PR => "Privileges Required",
            MetricId::UI => "User Interaction",
            MetricId::S => "Scope",
            MetricId::C => "Confidentiality",
            MetricId::I => "Integrity",
            MetricId::A => "Availability",
            MetricId::E => "Exploit Code Maturity",
            MetricId::RL => "Remediation Level",
            MetricId::RC => "Report Confidence",
            MetricId::CR => "Confidentiality Requirement",
            MetricId::IR => "Integrity Requirement",
            MetricId::AR => "Availability Requirement",
            MetricId::MAV => "Modified Attack Vector",
            MetricId::MAC => "Modified Attack Complexity",
            MetricId::MPR => "Modified Privileges Required",
            MetricId::MUI => "Modified User Interaction",
            MetricId::MS => "Modified Scope",
            MetricId::MC => "Modified Confidentiality",
            MetricId::MI => "Modified Integrity",
            MetricId::MA => "Modified Availability",
        }
    }

    /// Which metric group this id belongs to
    pub fn group(&self) -> MetricGroup {
        match self {
            MetricId::AV
            | MetricId::AC
            | MetricId::PR
            | MetricId::UI
            | MetricId::S
            | MetricId::C
            | MetricId::I
            | MetricId::A => MetricGroup::Base,
            MetricId::E | MetricId::RL | MetricId::RC => MetricGroup::Temporal,
            _ => MetricGroup::Environmental,
        }
    }

    /// True only for the eight Base metrics, which must be present for scoring
    pub fn is_required(&self) -> bool {
        self.group() == MetricGroup::Base
    }

    /// Ordered valid codes for this metric
    pub fn valid_codes(&self) -> &'static [&'static str] {
        match self {
            MetricId::AV => &["N", "A", "L", "P"],
            MetricId::AC => &["L", "H"],
            MetricId::PR => &["N", "L", "H"],
            MetricId::UI => &["N", "R"],
            MetricId::S => &["U", "C"],
            MetricId::C | MetricId::I | MetricId::A => &["N", "L", "H"],
            MetricId::E => &["X", "U", "P", "F", "H"],
            MetricId::RL => &["X", "U", "W", "T", "O"],
            MetricId::RC => &["X", "U", "R", "C"],
            MetricId::CR | MetricId::IR | MetricId::AR => &["X", "L", "M", "H"],
            MetricId::MAV => &["X", "N", "A", "L", "P"],
            MetricId::MAC => &["X", "L", "H"],
            MetricId::MPR => &["X", "N", "L", "H"],
            MetricId::MUI => &["X", "N", "R"],
            MetricId::MS => &["X", "U", "C"],
            MetricId::MC | MetricId::MI | MetricId::MA => &["X", "N", "L", "H"],
        }
    }
}

impl FromStr for MetricId {
    type Err = CvssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Ids are case-sensitive, matching the vector-string format exactly
        match s {
            "AV" => Ok(MetricId::AV),
            "AC" => Ok(MetricId::AC),
            "PR" => Ok(MetricId::PR),
            "UI" => Ok(MetricId::UI),
            "S" => Ok(MetricId::S),
            "C" => Ok(MetricId::C),
            "I" => Ok(MetricId::I),
            "A" => Ok(MetricId::A),
            "E" => Ok(MetricId::E),
            "RL" => Ok(MetricId::RL),
            "RC" => Ok(MetricId::RC),
            "CR" => Ok(MetricId::CR),
            "IR" => Ok(MetricId::IR),
            "AR" => Ok(MetricId::AR),
            "MAV" => Ok(MetricId::MAV),
            "MAC" => Ok(MetricId::MAC),
            "MPR" => Ok(MetricId::MPR),
            "MUI" => Ok(MetricId::MUI),
            "MS" => Ok(MetricId::MS),
            "MC" => Ok(MetricId::MC),
            "MI" => Ok(MetricId::MI),
            "MA" => Ok(MetricId::MA),
            _ => Err(CvssError::UnknownMetric { id: s.to_string() }),
        }
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_id_from_str() {
        assert_eq!("AV".parse::<MetricId>().unwrap(), MetricId::AV);
        assert_eq!("MAV".parse::<MetricId>().unwrap(), MetricId::MAV);
        assert_eq!("RC".parse::<MetricId>().unwrap(), MetricId::RC);
    }

    #[test]
    fn test_metric_id_from_str_rejects_unknown() {
        let err = "QQ".parse::<MetricId>().unwrap_err();
        assert_eq!(
            err,
            CvssError::UnknownMetric {
                id: "QQ".to_string()
            }
        );
    }

    #[test]
    fn test_metric_id_from_str_is_case_sensitive() {
        assert!("av".parse::<MetricId>().is_err());
        assert!("Av".parse::<MetricId>().is_err());
    }

    #[test]
    fn test_all_ids_round_trip_through_from_str() {
        for id in MetricId::ALL {
            assert_eq!(id.as_str().parse::<MetricId>().unwrap(), id);
        }
    }

    #[test]
    fn test_required_metrics_are_the_eight_base_metrics() {
        let required: Vec<MetricId> = MetricId::ALL
            .into_iter()
            .filter(|id| id.is_required())
            .collect();

        assert_eq!(
            required,
            vec![
                MetricId::AV,
                MetricId::AC,
                MetricId::PR,
                MetricId::UI,
                MetricId::S,
                MetricId::C,
                MetricId::I,
                MetricId::A,
            ]
        );
    }

    #[test]
    fn test_valid_codes_are_ordered() {
        assert_eq!(MetricId::AV.valid_codes(), &["N", "A", "L", "P"]);
        assert_eq!(MetricId::E.valid_codes(), &["X", "U", "P", "F", "H"]);
        assert_eq!(MetricId::RL.valid_codes(), &["X", "U", "W", "T", "O"]);
        assert_eq!(MetricId::MS.valid_codes(), &["X", "U", "C"]);
    }

    #[test]
    fn test_groups() {
        assert_eq!(MetricId::S.group(), MetricGroup::Base);
        assert_eq!(MetricId::RL.group(), MetricGroup::Temporal);
        assert_eq!(MetricId::CR.group(), MetricGroup::Environmental);
        assert_eq!(MetricId::MA.group(), MetricGroup::Environmental);
    }
}
