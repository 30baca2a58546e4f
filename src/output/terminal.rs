// Terminal Output Module

use crate::engine::ScoreResult;
use crate::rating::Severity;
use colored::*;

/// Format a severity label with the color used across the report
fn format_severity(severity: Severity, text: &str) -> ColoredString {
    match severity {
        Severity::Critical => text.red().bold(),
        Severity::High => text.red(),
        Severity::Medium => text.yellow(),
        Severity::Low => text.green(),
        Severity::None => text.normal(),
    }
}

/// Format an optional score, falling back to a dash when absent
fn format_optional_score(score: Option<f64>) -> String {
    score
        .map(|s| format!("{:.1}", s))
        .unwrap_or_else(|| "-".to_string())
}

/// Render a score result as a terminal report
pub fn generate_report(result: &ScoreResult) -> String {
    let severity = result.severity;
    let headline = format!("{} ({:.1})", severity.as_str(), result.current_score());

    let mut lines = Vec::new();
    lines.push(format!("{}", "CVSS v3.1 Score Report".cyan().bold()));
    lines.push("=".repeat(50));
    lines.push(format!("Vector:               {}", result.vector_string));
    lines.push(format!("Base score:           {:.1}", result.base_score));
    lines.push(format!(
        "  Impact subscore:    {:.1}",
        result.impact_subscore
    ));
    lines.push(format!(
        "  Exploitability:     {:.1}",
        result.exploitability_subscore
    ));
    lines.push(format!(
        "Temporal score:       {}",
        format_optional_score(result.temporal_score)
    ));
    lines.push(format!(
        "Environmental score:  {}",
        format_optional_score(result.environmental_score)
    ));
    lines.push(format!(
        "Severity:             {}",
        format_severity(severity, &headline)
    ));
    lines.push(format!("{}", severity.description().dimmed()));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CvssEngine;

    #[test]
    fn test_report_contains_scores_and_severity() {
        let result =
            CvssEngine::evaluate_vector("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H").unwrap();
        let report = generate_report(&result);

        assert!(report.contains("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H"));
        assert!(report.contains("Base score:           9.8"));
        assert!(report.contains("Critical (9.8)"));
    }

    #[test]
    fn test_report_dashes_out_absent_scores() {
        let result =
            CvssEngine::evaluate_vector("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:L/I:N/A:N").unwrap();
        let report = generate_report(&result);

        assert!(report.contains("Temporal score:       -"));
        assert!(report.contains("Environmental score:  -"));
    }

    #[test]
    fn test_report_shows_temporal_and_environmental() {
        let result = CvssEngine::evaluate_vector(
            "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/E:F/RL:W/RC:R/CR:L",
        )
        .unwrap();
        let report = generate_report(&result);

        assert!(report.contains("Temporal score:       8.9"));
        assert!(report.contains("Environmental score:  "));
        assert!(!report.contains("Environmental score:  -"));
    }
}
