// Vector module - CVSS v3.1 vector string parsing and generation

use crate::metrics::{MetricId, MetricSet};

pub mod parser;

pub use parser::VectorParser;

/// Version prefix every v3.1 vector string starts with
pub const VECTOR_PREFIX: &str = "CVSS:3.1";

/// Generate the canonical vector string for a metric set
///
/// Base metrics are emitted in the fixed order AV/AC/PR/UI/S/C/I/A whenever
/// present. Temporal and Environmental metrics follow in canonical order and
/// are omitted while Not Defined.
pub fn generate(metrics: &MetricSet) -> String {
    let mut segments: Vec<String> = vec![VECTOR_PREFIX.to_string()];

    for id in MetricId::ALL {
        let Some(code) = metrics.code(id) else {
            continue;
        };
        if !id.is_required() && code == "X" {
            continue;
        }
        segments.push(format!("{}:{}", id, code));
    }

    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::base::{
        AttackComplexity, AttackVector, Impact, PrivilegesRequired, Scope, UserInteraction,
    };
    use crate::metrics::{BaseMetrics, MetricId};

    fn high_base_set() -> MetricSet {
        MetricSet::from_base(BaseMetrics {
            attack_vector: AttackVector::Network,
            attack_complexity: AttackComplexity::Low,
            privileges_required: PrivilegesRequired::None,
            user_interaction: UserInteraction::None,
            scope: Scope::Unchanged,
            confidentiality_impact: Impact::High,
            integrity_impact: Impact::High,
            availability_impact: Impact::High,
        })
    }

    #[test]
    fn test_generate_base_only() {
        let vector = generate(&high_base_set());
        assert_eq!(vector, "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H");
    }

    #[test]
    fn test_generate_appends_defined_temporal_and_environmental() {
        let mut set = high_base_set();
        set.set(MetricId::RL, "O").unwrap();
        set.set(MetricId::E, "F").unwrap();
        set.set(MetricId::CR, "H").unwrap();
        set.set(MetricId::MAV, "P").unwrap();

        assert_eq!(
            generate(&set),
            "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/E:F/RL:O/CR:H/MAV:P"
        );
    }

    #[test]
    fn test_generate_omits_not_defined_metrics() {
        let mut set = high_base_set();
        set.set(MetricId::E, "X").unwrap();
        set.set(MetricId::MS, "X").unwrap();

        let vector = generate(&set);
        assert!(!vector.contains("E:"));
        assert!(!vector.contains("MS:"));
    }

    #[test]
    fn test_generate_skips_missing_base_metrics() {
        let mut set = MetricSet::new();
        set.set(MetricId::AV, "L").unwrap();
        set.set(MetricId::S, "C").unwrap();

        assert_eq!(generate(&set), "CVSS:3.1/AV:L/S:C");
    }
}
