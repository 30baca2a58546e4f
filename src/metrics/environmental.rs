// Environmental metric group - deployment-specific CVSS v3.1 metrics
//
// Security requirements (CR/IR/AR) weight the modified impact, and each
// modified metric (M*) overrides its Base counterpart, with Not Defined (X)
// meaning "inherit the Base value".

use super::MetricValue;
use serde::{Deserialize, Serialize};

/// Confidentiality, Integrity, or Availability Requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SecurityRequirement {
    #[default]
    NotDefined, // X - 1.0
    Low,    // L - 0.5
    Medium, // M - 1.0
    High,   // H - 1.5
}

impl SecurityRequirement {
    pub fn score(&self) -> f64 {
        match self {
            SecurityRequirement::NotDefined => 1.0,
            SecurityRequirement::Low => 0.5,
            SecurityRequirement::Medium => 1.0,
            SecurityRequirement::High => 1.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityRequirement::NotDefined => "X",
            SecurityRequirement::Low => "L",
            SecurityRequirement::Medium => "M",
            SecurityRequirement::High => "H",
        }
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, SecurityRequirement::NotDefined)
    }
}

impl MetricValue for SecurityRequirement {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "X" => Some(SecurityRequirement::NotDefined),
            "L" => Some(SecurityRequirement::Low),
            "M" => Some(SecurityRequirement::Medium),
            "H" => Some(SecurityRequirement::High),
            _ => None,
        }
    }

    fn code(&self) -> &'static str {
        self.as_str()
    }
}

/// A modified metric: either Not Defined (inherit the Base value) or an
/// explicit override using the Base metric's own value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modified<T> {
    NotDefined,
    Set(T),
}

impl<T> Default for Modified<T> {
    fn default() -> Self {
        Modified::NotDefined
    }
}

impl<T: Copy> Modified<T> {
    /// The effective value: the override if set, otherwise the Base value
    pub fn resolve(&self, base: T) -> T {
        match self {
            Modified::NotDefined => base,
            Modified::Set(value) => *value,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Modified::Set(_))
    }
}

impl<T: MetricValue> MetricValue for Modified<T> {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "X" => Some(Modified::NotDefined),
            _ => T::from_code(code).map(Modified::Set),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Modified::NotDefined => "X",
            Modified::Set(value) => value.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::base::{AttackVector, Impact, Scope};

    #[test]
    fn test_requirement_weights() {
        assert_eq!(SecurityRequirement::NotDefined.score(), 1.0);
        assert_eq!(SecurityRequirement::Low.score(), 0.5);
        assert_eq!(SecurityRequirement::Medium.score(), 1.0);
        assert_eq!(SecurityRequirement::High.score(), 1.5);
    }

    #[test]
    fn test_modified_resolves_to_base_when_not_defined() {
        let modified: Modified<AttackVector> = Modified::NotDefined;
        assert_eq!(modified.resolve(AttackVector::Physical), AttackVector::Physical);
    }

    #[test]
    fn test_modified_overrides_base_when_set() {
        let modified = Modified::Set(Impact::High);
        assert_eq!(modified.resolve(Impact::None), Impact::High);
    }

    #[test]
    fn test_modified_from_code() {
        assert_eq!(
            Modified::<Scope>::from_code("X"),
            Some(Modified::NotDefined)
        );
        assert_eq!(
            Modified::<Scope>::from_code("C"),
            Some(Modified::Set(Scope::Changed))
        );
        assert_eq!(Modified::<Scope>::from_code("Z"), None);
    }

    #[test]
    fn test_modified_code_emits_x_when_not_defined() {
        let modified: Modified<AttackVector> = Modified::NotDefined;
        assert_eq!(modified.code(), "X");
        assert_eq!(Modified::Set(AttackVector::Network).code(), "N");
    }

    #[test]
    fn test_default_is_not_defined() {
        let modified: Modified<Impact> = Modified::default();
        assert!(!modified.is_defined());
    }
}
