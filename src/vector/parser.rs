// Vector parser - strict CVSS v3.1 vector string parsing

use super::VECTOR_PREFIX;
use crate::error::{CvssError, Result};
use crate::metrics::{MetricId, MetricSet};
use tracing::debug;

/// Parses CVSS v3.1 vector strings into metric sets
pub struct VectorParser;

impl VectorParser {
    /// Parse a vector string of the form `CVSS:3.1/AV:N/AC:L/...`
    ///
    /// The `CVSS:3.1` prefix is mandatory and case-sensitive. Metric tokens
    /// may appear in any order; Temporal and Environmental tokens may be
    /// interleaved with Base tokens or omitted entirely. When the same id
    /// appears more than once the last occurrence wins.
    pub fn parse(input: &str) -> Result<MetricSet> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CvssError::MalformedVector {
                reason: "empty vector string".to_string(),
            });
        }

        let mut segments = input.split('/');
        let prefix = segments.next().unwrap_or_default();
        if prefix != VECTOR_PREFIX {
            return Err(CvssError::MalformedVector {
                reason: format!("expected {} prefix, found {:?}", VECTOR_PREFIX, prefix),
            });
        }

        let mut metrics = MetricSet::new();
        let mut tokens = 0usize;
        for token in segments {
            let Some((id, code)) = token.split_once(':') else {
                return Err(CvssError::MalformedVector {
                    reason: format!("token {:?} is not of the form ID:code", token),
                });
            };
            let id: MetricId = id.parse()?;
            metrics.set(id, code)?;
            tokens += 1;
        }

        debug!("parsed vector with {} metric tokens", tokens);
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::base::{AttackVector, Impact, Scope};
    use crate::metrics::temporal::ExploitCodeMaturity;
    use crate::metrics::Modified;

    #[test]
    fn test_parse_full_base_vector() {
        let metrics = VectorParser::parse("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H").unwrap();

        assert_eq!(metrics.attack_vector, Some(AttackVector::Network));
        assert_eq!(metrics.scope, Some(Scope::Unchanged));
        assert_eq!(metrics.availability_impact, Some(Impact::High));
        assert!(!metrics.has_temporal());
        assert!(!metrics.has_environmental());
    }

    #[test]
    fn test_parse_accepts_any_token_order() {
        let canonical =
            VectorParser::parse("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/E:F").unwrap();
        let shuffled =
            VectorParser::parse("CVSS:3.1/E:F/A:H/I:H/C:H/S:U/UI:N/PR:N/AC:L/AV:N").unwrap();

        assert_eq!(canonical, shuffled);
    }

    #[test]
    fn test_parse_duplicate_id_last_wins() {
        let metrics = VectorParser::parse(
            "CVSS:3.1/AV:N/AV:P/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H",
        )
        .unwrap();

        assert_eq!(metrics.attack_vector, Some(AttackVector::Physical));
    }

    #[test]
    fn test_parse_requires_exact_prefix() {
        let err = VectorParser::parse("AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H").unwrap_err();
        assert!(matches!(err, CvssError::MalformedVector { .. }));

        let err = VectorParser::parse("CVSS:3.0/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H").unwrap_err();
        assert!(matches!(err, CvssError::MalformedVector { .. }));

        let err = VectorParser::parse("cvss:3.1/AV:N").unwrap_err();
        assert!(matches!(err, CvssError::MalformedVector { .. }));
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(matches!(
            VectorParser::parse("").unwrap_err(),
            CvssError::MalformedVector { .. }
        ));
        assert!(matches!(
            VectorParser::parse("   ").unwrap_err(),
            CvssError::MalformedVector { .. }
        ));
    }

    #[test]
    fn test_parse_rejects_bare_token() {
        let err = VectorParser::parse("CVSS:3.1/AV").unwrap_err();
        assert!(matches!(err, CvssError::MalformedVector { .. }));

        // A trailing slash leaves an empty token behind
        let err = VectorParser::parse("CVSS:3.1/AV:N/").unwrap_err();
        assert!(matches!(err, CvssError::MalformedVector { .. }));
    }

    #[test]
    fn test_parse_rejects_unknown_metric_id() {
        let err = VectorParser::parse("CVSS:3.1/QQ:N").unwrap_err();
        assert_eq!(
            err,
            CvssError::UnknownMetric {
                id: "QQ".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_invalid_code() {
        let err = VectorParser::parse("CVSS:3.1/AV:Z").unwrap_err();
        assert_eq!(
            err,
            CvssError::InvalidCode {
                metric: MetricId::AV,
                code: "Z".to_string(),
            }
        );

        // Codes are case-sensitive
        let err = VectorParser::parse("CVSS:3.1/AV:n").unwrap_err();
        assert!(matches!(err, CvssError::InvalidCode { .. }));
    }

    #[test]
    fn test_parse_interleaved_optional_groups() {
        let metrics = VectorParser::parse(
            "CVSS:3.1/MS:C/AV:N/E:P/AC:L/PR:N/UI:N/S:U/C:L/I:N/A:N",
        )
        .unwrap();

        assert_eq!(
            metrics.exploit_code_maturity,
            ExploitCodeMaturity::ProofOfConcept
        );
        assert_eq!(metrics.modified_scope, Modified::Set(Scope::Changed));
        assert!(metrics.has_environmental());
    }

    #[test]
    fn test_parse_explicit_not_defined_equals_omitted() {
        let with_x =
            VectorParser::parse("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/E:X/RL:X/MAV:X")
                .unwrap();
        let without = VectorParser::parse("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H").unwrap();

        assert_eq!(with_x, without);
    }

    #[test]
    fn test_parse_prefix_only_yields_empty_set() {
        let metrics = VectorParser::parse("CVSS:3.1").unwrap();
        assert_eq!(metrics, MetricSet::new());
    }
}
