// cvssrun - A CVSS v3.1 vulnerability scoring engine
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use cvssrun::{output, presets, Args, CvssEngine, MetricId, MetricSet, VectorParser};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Initialize logging - respect RUST_LOG environment variable
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    // Parse command line arguments
    let args = Args::parse();

    // Handle --version (display version and exit)
    if args.version {
        println!("cvssrun v{}", env!("CARGO_PKG_VERSION"));
        println!("CVSS v3.1 Vulnerability Scoring Engine");
        println!("Copyright (C) 2025 Marc Rivero (@seifreed)");
        println!("Licensed under GPL-3.0");
        return Ok(());
    }

    // Validate argument combinations
    args.validate()?;

    // Handle --no-colour / --no-color (disable colored output)
    if args.output.no_colour || args.output.no_color {
        colored::control::set_override(false);
    }

    // Display banner
    display_banner(&args);

    // Handle --list-metrics (print the metric catalog and exit)
    if args.list_metrics {
        list_metrics();
        return Ok(());
    }

    // Handle --examples (score the built-in vectors and exit)
    if args.examples {
        score_examples()?;
        return Ok(());
    }

    // Assemble the metric set from the chosen input form
    let metrics = if let Some(vector) = &args.vector {
        VectorParser::parse(vector)?
    } else if !args.metric.is_empty() {
        metric_set_from_flags(&args.metric)?
    } else {
        anyhow::bail!("No vector or --metric selections provided. Run with --help for usage.");
    };

    let result = CvssEngine::evaluate(&metrics)?;
    println!("{}", output::terminal::generate_report(&result));

    // Export if requested
    if let Some(json_file) = &args.output.json {
        output::json::write_json_file(&result, json_file, args.output.json_pretty)?;
        println!("✓ Results exported to JSON: {}", json_file.display());
    }

    Ok(())
}

/// Build a metric set from repeated --metric ID:CODE selections
fn metric_set_from_flags(selections: &[String]) -> Result<MetricSet> {
    let mut metrics = MetricSet::new();

    for selection in selections {
        let Some((id, code)) = selection.split_once(':') else {
            anyhow::bail!(
                "Invalid --metric value '{}'. Expected format ID:CODE.",
                selection
            );
        };
        let id: MetricId = id.trim().parse()?;
        metrics.set(id, code.trim())?;
    }

    Ok(metrics)
}

/// Print every metric id with its name and valid codes, grouped
fn list_metrics() {
    println!("cvssrun v{} - CVSS v3.1 Metrics", env!("CARGO_PKG_VERSION"));

    let mut group = None;
    for id in MetricId::ALL {
        if group != Some(id.group()) {
            group = Some(id.group());
            println!("\n{}", format!("{} Metrics", id.group().as_str()).cyan().bold());
        }

        let required = if id.is_required() { " (required)" } else { "" };
        println!(
            "  {:<4} {:<29} [{}]{}",
            id.as_str(),
            id.name(),
            id.valid_codes().join(", "),
            required
        );
    }
}

/// Score each built-in example vector
fn score_examples() -> Result<()> {
    println!("{}", "Built-in Example Vectors".cyan().bold());
    println!("{}", "=".repeat(50));

    for preset in presets::PRESETS {
        let result = CvssEngine::evaluate_vector(preset.vector)?;
        let cve = preset.cve.map(|c| format!(" [{}]", c)).unwrap_or_default();

        println!(
            "\n  {}{} - {:.1} {}",
            preset.name.bold(),
            cve,
            result.current_score(),
            result.severity
        );
        println!("    {}", preset.description);
        println!("    {}", preset.vector.dimmed());
    }

    Ok(())
}

fn display_banner(args: &Args) {
    if !args.output.quiet {
        println!(
            r#"
    ╔═══════════════════════════════════════════════════════════╗
    ║                      cvssrun v0.1.0                       ║
    ║          CVSS v3.1 Vulnerability Scoring (Rust)           ║
    ║                                                           ║
    ║              Author: Marc Rivero | @seifreed              ║
    ╚═══════════════════════════════════════════════════════════╝

    Licensed under GPL-3.0
    "#
        );
    }
}
