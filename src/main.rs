//! region-dash CLI entry point
//!
//! Region weather dashboard - CLI + web app

use region_dash::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
