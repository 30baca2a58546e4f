// CLI module - Command line interface and argument parsing
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Parser;

// Sub-modules for organized CLI arguments
mod output_args;

// Re-export sub-structs
pub use output_args::OutputArgs;

/// cvssrun - CVSS v3.1 vulnerability scoring engine
///
/// The metric selection can come from a full vector string or from
/// repeated --metric ID:CODE selections, never both at once.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
#[command(name = "cvssrun")]
#[command(about = "CVSS v3.1 vulnerability scoring engine", long_about = None)]
pub struct Args {
    // ============ Vector Input ============
    /// CVSS v3.1 vector string (e.g. CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H)
    #[arg(value_name = "VECTOR")]
    pub vector: Option<String>,

    /// Select a single metric (repeatable, format: ID:CODE)
    #[arg(short = 'm', long = "metric", value_name = "ID:CODE")]
    pub metric: Vec<String>,

    // ============ Reference Listings ============
    /// List all metric ids with their names and valid codes
    #[arg(long = "list-metrics")]
    pub list_metrics: bool,

    /// Score the built-in example vectors and exit
    #[arg(long = "examples")]
    pub examples: bool,

    // ============ Output Formats and Display ============
    #[command(flatten)]
    pub output: OutputArgs,

    /// Display version information and exit
    #[arg(long = "version", short = 'V')]
    pub version: bool,
}

impl Args {
    /// Validate CLI arguments for mutual exclusivity and logical consistency
    ///
    /// Returns an error if conflicting flags are used together
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.vector.is_some() && !self.metric.is_empty() {
            anyhow::bail!(
                "Cannot use a vector argument with --metric selections. Choose one input form."
            );
        }

        Ok(())
    }

    /// Check if any scoring input was provided
    pub fn has_input(&self) -> bool {
        self.vector.is_some() || !self.metric.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_vector_with_metric_flags() {
        let args = Args {
            vector: Some("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H".to_string()),
            metric: vec!["AV:N".to_string()],
            ..Default::default()
        };

        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_single_input_form() {
        let args = Args {
            vector: Some("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H".to_string()),
            ..Default::default()
        };
        assert!(args.validate().is_ok());
        assert!(args.has_input());

        let args = Args {
            metric: vec!["AV:N".to_string(), "AC:L".to_string()],
            ..Default::default()
        };
        assert!(args.validate().is_ok());
        assert!(args.has_input());

        assert!(!Args::default().has_input());
    }
}
