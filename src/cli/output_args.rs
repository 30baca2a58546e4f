// Output format configuration arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Args;
use std::path::PathBuf;

/// Output format and display options
///
/// This struct contains all arguments related to output formatting,
/// including JSON export, colors, and quiet mode.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output to JSON file
    #[arg(long = "json", value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(long = "json-pretty")]
    pub json_pretty: bool,

    /// Quiet mode (no banner)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long = "no-colour")]
    pub no_colour: bool,

    /// Disable colored output (US spelling)
    #[arg(long = "no-color")]
    pub no_color: bool,
}
