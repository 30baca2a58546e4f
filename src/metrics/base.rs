// Base metric group - the eight intrinsic CVSS v3.1 metrics
// Weights per the v3.1 specification, section 7.4 (Metric Values)

use super::MetricValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackVector {
    Network,  // N - 0.85
    Adjacent, // A - 0.62
    Local,    // L - 0.55
    Physical, // P - 0.2
}

impl AttackVector {
    pub fn score(&self) -> f64 {
        match self {
            AttackVector::Network => 0.85,
            AttackVector::Adjacent => 0.62,
            AttackVector::Local => 0.55,
            AttackVector::Physical => 0.2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttackVector::Network => "N",
            AttackVector::Adjacent => "A",
            AttackVector::Local => "L",
            AttackVector::Physical => "P",
        }
    }
}

impl MetricValue for AttackVector {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(AttackVector::Network),
            "A" => Some(AttackVector::Adjacent),
            "L" => Some(AttackVector::Local),
            "P" => Some(AttackVector::Physical),
            _ => None,
        }
    }

    fn code(&self) -> &'static str {
        self.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackComplexity {
    Low,  // L - 0.77
    High, // H - 0.44
}

impl AttackComplexity {
    pub fn score(&self) -> f64 {
        match self {
            AttackComplexity::Low => 0.77,
            AttackComplexity::High => 0.44,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttackComplexity::Low => "L",
            AttackComplexity::High => "H",
        }
    }
}

impl MetricValue for AttackComplexity {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "L" => Some(AttackComplexity::Low),
            "H" => Some(AttackComplexity::High),
            _ => None,
        }
    }

    fn code(&self) -> &'static str {
        self.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrivilegesRequired {
    None, // N - 0.85 (unchanged) / 0.85 (changed)
    Low,  // L - 0.62 (unchanged) / 0.68 (changed)
    High, // H - 0.27 (unchanged) / 0.50 (changed)
}

impl PrivilegesRequired {
    /// Weight depends on Scope: Low and High score higher when scope is changed
    pub fn score(&self, scope_changed: bool) -> f64 {
        match (self, scope_changed) {
            (PrivilegesRequired::None, _) => 0.85,
            (PrivilegesRequired::Low, false) => 0.62,
            (PrivilegesRequired::Low, true) => 0.68,
            (PrivilegesRequired::High, false) => 0.27,
            (PrivilegesRequired::High, true) => 0.50,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrivilegesRequired::None => "N",
            PrivilegesRequired::Low => "L",
            PrivilegesRequired::High => "H",
        }
    }
}

impl MetricValue for PrivilegesRequired {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(PrivilegesRequired::None),
            "L" => Some(PrivilegesRequired::Low),
            "H" => Some(PrivilegesRequired::High),
            _ => None,
        }
    }

    fn code(&self) -> &'static str {
        self.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserInteraction {
    None,     // N - 0.85
    Required, // R - 0.62
}

impl UserInteraction {
    pub fn score(&self) -> f64 {
        match self {
            UserInteraction::None => 0.85,
            UserInteraction::Required => 0.62,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserInteraction::None => "N",
            UserInteraction::Required => "R",
        }
    }
}

impl MetricValue for UserInteraction {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(UserInteraction::None),
            "R" => Some(UserInteraction::Required),
            _ => None,
        }
    }

    fn code(&self) -> &'static str {
        self.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    Unchanged, // U
    Changed,   // C
}

impl Scope {
    pub fn is_changed(&self) -> bool {
        matches!(self, Scope::Changed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Unchanged => "U",
            Scope::Changed => "C",
        }
    }
}

impl MetricValue for Scope {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "U" => Some(Scope::Unchanged),
            "C" => Some(Scope::Changed),
            _ => None,
        }
    }

    fn code(&self) -> &'static str {
        self.as_str()
    }
}

/// Impact on confidentiality, integrity, or availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    None, // N - 0.0
    Low,  // L - 0.22
    High, // H - 0.56
}

impl Impact {
    pub fn score(&self) -> f64 {
        match self {
            Impact::None => 0.0,
            Impact::Low => 0.22,
            Impact::High => 0.56,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::None => "N",
            Impact::Low => "L",
            Impact::High => "H",
        }
    }
}

impl MetricValue for Impact {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(Impact::None),
            "L" => Some(Impact::Low),
            "H" => Some(Impact::High),
            _ => None,
        }
    }

    fn code(&self) -> &'static str {
        self.as_str()
    }
}
