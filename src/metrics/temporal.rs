// Temporal metric group - time-varying CVSS v3.1 metrics
// All three default to Not Defined (X), which leaves the score unchanged

use super::MetricValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExploitCodeMaturity {
    #[default]
    NotDefined, // X - 1.0
    Unproven,       // U - 0.91
    ProofOfConcept, // P - 0.94
    Functional,     // F - 0.97
    High,           // H - 1.0
}

impl ExploitCodeMaturity {
    pub fn score(&self) -> f64 {
        match self {
            ExploitCodeMaturity::NotDefined => 1.0,
            ExploitCodeMaturity::Unproven => 0.91,
            ExploitCodeMaturity::ProofOfConcept => 0.94,
            ExploitCodeMaturity::Functional => 0.97,
            ExploitCodeMaturity::High => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExploitCodeMaturity::NotDefined => "X",
            ExploitCodeMaturity::Unproven => "U",
            ExploitCodeMaturity::ProofOfConcept => "P",
            ExploitCodeMaturity::Functional => "F",
            ExploitCodeMaturity::High => "H",
        }
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, ExploitCodeMaturity::NotDefined)
    }
}

impl MetricValue for ExploitCodeMaturity {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "X" => Some(ExploitCodeMaturity::NotDefined),
            "U" => Some(ExploitCodeMaturity::Unproven),
            "P" => Some(ExploitCodeMaturity::ProofOfConcept),
            "F" => Some(ExploitCodeMaturity::Functional),
            "H" => Some(ExploitCodeMaturity::High),
            _ => None,
        }
    }

    fn code(&self) -> &'static str {
        self.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RemediationLevel {
    #[default]
    NotDefined, // X - 1.0
    Unavailable,  // U - 1.0
    Workaround,   // W - 0.97
    TemporaryFix, // T - 0.96
    OfficialFix,  // O - 0.95
}

impl RemediationLevel {
    pub fn score(&self) -> f64 {
        match self {
            RemediationLevel::NotDefined => 1.0,
            RemediationLevel::Unavailable => 1.0,
            RemediationLevel::Workaround => 0.97,
            RemediationLevel::TemporaryFix => 0.96,
            RemediationLevel::OfficialFix => 0.95,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RemediationLevel::NotDefined => "X",
            RemediationLevel::Unavailable => "U",
            RemediationLevel::Workaround => "W",
            RemediationLevel::TemporaryFix => "T",
            RemediationLevel::OfficialFix => "O",
        }
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, RemediationLevel::NotDefined)
    }
}

impl MetricValue for RemediationLevel {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "X" => Some(RemediationLevel::NotDefined),
            "U" => Some(RemediationLevel::Unavailable),
            "W" => Some(RemediationLevel::Workaround),
            "T" => Some(RemediationLevel::TemporaryFix),
            "O" => Some(RemediationLevel::OfficialFix),
            _ => None,
        }
    }

    fn code(&self) -> &'static str {
        self.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReportConfidence {
    #[default]
    NotDefined, // X - 1.0
    Unknown,    // U - 0.92
    Reasonable, // R - 0.96
    Confirmed,  // C - 1.0
}

impl ReportConfidence {
    pub fn score(&self) -> f64 {
        match self {
            ReportConfidence::NotDefined => 1.0,
            ReportConfidence::Unknown => 0.92,
            ReportConfidence::Reasonable => 0.96,
            ReportConfidence::Confirmed => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportConfidence::NotDefined => "X",
            ReportConfidence::Unknown => "U",
            ReportConfidence::Reasonable => "R",
            ReportConfidence::Confirmed => "C",
        }
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, ReportConfidence::NotDefined)
    }
}

impl MetricValue for ReportConfidence {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "X" => Some(ReportConfidence::NotDefined),
            "U" => Some(ReportConfidence::Unknown),
            "R" => Some(ReportConfidence::Reasonable),
            "C" => Some(ReportConfidence::Confirmed),
            _ => None,
        }
    }

    fn code(&self) -> &'static str {
        self.as_str()
    }
}
