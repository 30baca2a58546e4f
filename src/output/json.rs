// JSON Output Module

use crate::engine::ScoreResult;
use anyhow::Result;
use std::path::Path;

/// Generate JSON output from a score result
pub fn generate_json(result: &ScoreResult, pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(serde_json::to_string(result)?)
    }
}

/// Write JSON to file
pub fn write_json_file(result: &ScoreResult, path: &Path, pretty: bool) -> Result<()> {
    let json = generate_json(result, pretty)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CvssEngine;

    #[test]
    fn test_json_generation() {
        let result =
            CvssEngine::evaluate_vector("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H").unwrap();

        let json = generate_json(&result, false).unwrap();
        assert!(json.contains("\"vector\""));
        assert!(json.contains("9.8"));

        let pretty_json = generate_json(&result, true).unwrap();
        assert!(pretty_json.contains("\"severity\""));
        assert!(pretty_json.contains("\n")); // Check for pretty printing
    }

    #[test]
    fn test_json_round_trips() {
        let result = CvssEngine::evaluate_vector(
            "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/E:F/RL:W/RC:R",
        )
        .unwrap();

        let json = generate_json(&result, false).unwrap();
        let parsed: ScoreResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
