//! JSON output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::{OutputFormatter, Report};

/// JSON formatter - outputs full report as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON report"
    }

    fn format(&self, report: &Report, _config: &Config) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::tests::sample_report;

    #[test]
    fn test_json_format() {
        let output = JsonFormatter
            .format(&sample_report(), &Config::default())
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["title"], "Singapore");
        assert!(parsed["center"].get("lat").is_some());

        let first = &parsed["series"][0];
        for field in ["date", "humidity", "radiation", "tMin", "tMax", "base", "range"] {
            assert!(first.get(field).is_some(), "missing {}", field);
        }
    }

    #[test]
    fn test_json_formatter_info() {
        assert_eq!(JsonFormatter.name(), "json");
        assert!(!JsonFormatter.description().is_empty());
    }
}
