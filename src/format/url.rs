//! URL output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::{OutputFormatter, Report};

/// URL formatter - outputs a map URL centered on the report
pub struct UrlFormatter;

impl UrlFormatter {
    /// Format URL with optional provider override
    pub fn format_with_provider(
        &self,
        report: &Report,
        config: &Config,
        provider: Option<&str>,
    ) -> Result<String> {
        config.format_url(provider, report.center.lat, report.center.lng, report.zoom)
    }
}

impl OutputFormatter for UrlFormatter {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "Map URL for the report center"
    }

    fn format(&self, report: &Report, config: &Config) -> Result<String> {
        self.format_with_provider(report, config, None)
    }
}
