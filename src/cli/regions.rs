//! Regions command handler
//!
//! Lists catalog regions, optionally filtered by a search query.

use crate::catalog::{Catalog, RegionSummary};
use crate::cli::CatalogArgs;
use crate::config::Config;
use crate::error::Result;
use clap::Args;

/// Regions command arguments
#[derive(Args)]
pub struct RegionsArgs {
    /// Only show regions whose name contains this text
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

/// Run the regions command
pub fn run(args: RegionsArgs) -> Result<()> {
    let mut config = Config::load()?;
    args.catalog.apply(&mut config);

    let catalog = Catalog::from_config(&config)?;

    let (regions, auto_pick) = match &args.search {
        Some(query) => {
            let result = catalog.search(query);
            (result.matches, result.auto_pick)
        }
        None => (catalog.summaries(), None),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&regions)?);
        return Ok(());
    }

    if regions.is_empty() {
        println!("No matches");
        return Ok(());
    }

    print!("{}", render_table(&regions));
    if let Some(id) = auto_pick {
        eprintln!("\nSingle match: {}", id);
    }

    Ok(())
}

/// One line per region: id, name, center
fn render_table(regions: &[RegionSummary]) -> String {
    let id_width = regions.iter().map(|r| r.id.len()).max().unwrap_or(0);
    let name_width = regions.iter().map(|r| r.name.len()).max().unwrap_or(0);

    regions
        .iter()
        .map(|r| {
            format!(
                "{:<iw$}  {:<nw$}  ({:.4}, {:.4})\n",
                r.id,
                r.name,
                r.coords.lat,
                r.coords.lng,
                iw = id_width,
                nw = name_width
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;

    #[test]
    fn test_render_table() {
        let catalog = sample_catalog();
        let table = render_table(&catalog.summaries());

        assert_eq!(table.lines().count(), catalog.len());
        assert!(table.lines().next().unwrap().starts_with("choa-chu-kang"));
        assert!(table.contains("Bukit Timah"));
    }

    #[test]
    fn test_render_empty() {
        assert!(render_table(&[]).is_empty());
    }
}
