//! Show command handler
//!
//! Prints the nationwide series, or one region's, with range fields.

use crate::catalog::Catalog;
use crate::cli::CatalogArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter, url::UrlFormatter, Report};
use clap::Args;

/// Show command arguments
#[derive(Args)]
pub struct ShowArgs {
    /// Region id or name (nationwide when omitted)
    pub region: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Map URL provider for the url format
    #[arg(long)]
    pub provider: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

/// Run the show command
pub fn run(args: ShowArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let mut config = Config::load()?;
    args.catalog.apply(&mut config);

    let catalog = Catalog::from_config(&config)?;
    let report = build_report(&catalog, &config, args.region.as_deref())?;

    let format = args.format.unwrap_or_else(|| config.generation.format.clone());
    let output = if format.eq_ignore_ascii_case("url") {
        UrlFormatter.format_with_provider(&report, &config, args.provider.as_deref())?
    } else {
        let formatter = get_formatter(&format)
            .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;
        formatter.format(&report, &config)?
    };

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Pick the report for an optional region id or name
pub fn build_report(catalog: &Catalog, config: &Config, region: Option<&str>) -> Result<Report> {
    match region {
        Some(query) => {
            let location = catalog
                .resolve(query)
                .ok_or_else(|| Error::UnknownRegion(query.to_string()))?;
            Ok(Report::region(location, config))
        }
        None => Report::nationwide(catalog, config),
    }
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
