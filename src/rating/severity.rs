// Severity rating - qualitative bands for CVSS v3.1 scores

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative severity rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    None,     // 0.0
    Low,      // 0.1 - 3.9
    Medium,   // 4.0 - 6.9
    High,     // 7.0 - 8.9
    Critical, // 9.0 - 10.0
}

impl Severity {
    /// Convert a score to its severity band
    ///
    /// Band lower bounds are inclusive, so 4.0 is Medium, 7.0 is High and
    /// 9.0 is Critical.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 9.0 => Severity::Critical,
            s if s >= 7.0 => Severity::High,
            s if s >= 4.0 => Severity::Medium,
            s if s >= 0.1 => Severity::Low,
            _ => Severity::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "None",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    /// Get color for severity
    pub fn color(&self) -> &'static str {
        match self {
            Severity::None => "green",
            Severity::Low => "yellow",
            Severity::Medium => "orange",
            Severity::High => "red",
            Severity::Critical => "dark red",
        }
    }

    /// Get description
    pub fn description(&self) -> &'static str {
        match self {
            Severity::None => "No impact - informational only",
            Severity::Low => "Low risk - limited impact or hard to reach",
            Severity::Medium => "Medium risk - should be scheduled for remediation",
            Severity::High => "High risk - remediate as soon as possible",
            Severity::Critical => "Critical risk - immediate remediation required",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
