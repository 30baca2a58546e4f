// cvssrun - A CVSS v3.1 vulnerability scoring engine
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! cvssrun implements the CVSS v3.1 scoring system: vector string parsing
//! and generation, Base, Temporal, and Environmental score calculation, and
//! qualitative severity rating, with a CLI for one-off scoring.

pub mod cli;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod output;
pub mod presets;
pub mod rating;
pub mod vector;

// Re-export commonly used types
pub use crate::cli::Args;
pub use crate::engine::{CvssEngine, ScoreResult};
pub use crate::error::{CvssError, Result};
pub use crate::metrics::{BaseMetrics, MetricId, MetricSet};
pub use crate::rating::{ScoreCalculator, Scores, Severity};
pub use crate::vector::VectorParser;
