// Error types for cvssrun
//
// This module provides structured error types using thiserror. Every validation
// failure is surfaced to the caller; a metric is never silently defaulted or
// coerced to make a score come out.

use crate::metrics::MetricId;
use thiserror::Error;

/// Result type for cvssrun operations
pub type Result<T> = std::result::Result<T, CvssError>;

/// Main error type for cvssrun operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CvssError {
    /// Vector string is syntactically broken (bad prefix, token not `ID:code`)
    #[error("malformed vector: {reason}")]
    MalformedVector { reason: String },

    /// Metric id is not part of the CVSS v3.1 model
    #[error("unknown metric id: {id}")]
    UnknownMetric { id: String },

    /// Code is not in the valid set for its metric
    #[error("invalid code {code:?} for metric {metric} (valid: {})", .metric.valid_codes().join(", "))]
    InvalidCode { metric: MetricId, code: String },

    /// One or more Base metrics were missing at calculation time
    #[error("incomplete metric set: missing {}", .missing.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", "))]
    IncompleteMetricSet { missing: Vec<MetricId> },
}
