//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod regions;
pub mod serve;
pub mod show;

use crate::config::Config;
use crate::error::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Region weather dashboard
#[derive(Parser)]
#[command(name = "region-dash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Print the nationwide or a single region's series
    Show(show::ShowArgs),

    /// List or search regions
    Regions(regions::RegionsArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Catalog overrides shared by commands that build a catalog
#[derive(Args, Clone, Default)]
pub struct CatalogArgs {
    /// GeoJSON FeatureCollection of named regions
    #[arg(long)]
    pub regions: Option<PathBuf>,

    /// Seed the random source for a reproducible catalog
    #[arg(long)]
    pub seed: Option<u64>,

    /// Days per series
    #[arg(long, short = 'd')]
    pub days: Option<usize>,
}

impl CatalogArgs {
    /// Overlay these flags on a loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.regions {
            config.data.regions = Some(path.clone());
        }
        if let Some(seed) = self.seed {
            config.generation.seed = Some(seed);
        }
        if let Some(days) = self.days {
            config.generation.days = days;
        }
    }
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args).await,
        Commands::Show(args) => show::run(args),
        Commands::Regions(args) => regions::run(args),
        Commands::Config(args) => config::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_catalog_args_override() {
        let mut config = Config::default();
        let args = CatalogArgs {
            regions: Some(PathBuf::from("areas.geojson")),
            seed: Some(11),
            days: Some(30),
        };
        args.apply(&mut config);

        assert_eq!(config.data.regions, Some(PathBuf::from("areas.geojson")));
        assert_eq!(config.generation.seed, Some(11));
        assert_eq!(config.generation.days, 30);
    }

    #[test]
    fn test_negative_days_rejected() {
        let result = Cli::try_parse_from(["region-dash", "show", "--days", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["region-dash", "show", "bedok", "-f", "json", "--seed", "4"])
            .unwrap();
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.region.as_deref(), Some("bedok"));
                assert_eq!(args.format.as_deref(), Some("json"));
                assert_eq!(args.catalog.seed, Some(4));
            }
            _ => panic!("expected show"),
        }
    }
}
