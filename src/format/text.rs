//! Human-readable text output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::{OutputFormatter, Report};

/// Text formatter - outputs a header and one table row per day
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable table"
    }

    fn format(&self, report: &Report, _config: &Config) -> Result<String> {
        let mut output = String::new();

        // Header
        output.push_str(&format!("{}\n", report.title));
        output.push_str(&format!(
            "Center: ({:.4}, {:.4})\n\n",
            report.center.lat, report.center.lng
        ));
        output.push_str(&format!(
            "{:<10}  {:>8}  {:>9}  {:>6}  {:>6}  {:>6}\n",
            "date", "humidity", "radiation", "tMin", "tMax", "range"
        ));

        // One row per day
        for r in &report.series {
            let p = &r.point;
            output.push_str(&format!(
                "{:<10}  {:>7}%  {:>9}  {:>6.1}  {:>6.1}  {:>6.1}\n",
                p.date, p.humidity, p.radiation, p.t_min, p.t_max, r.range
            ));
        }

        Ok(output)
    }
}
