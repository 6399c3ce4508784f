//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "generation.seed")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    if args.path {
        println!("{}", Config::config_path()?.display());
        return Ok(());
    }

    if args.reset {
        Config::default().save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    match (args.key.as_deref(), args.value.as_deref()) {
        (None, None) => show_all_config(&config),

        (Some(key), None) => {
            let value = config.get(key).ok_or_else(|| unknown_key(key))?;
            println!("{}", value);
        }

        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save()?;
            println!("{} = {}", key, value);
        }

        (None, Some(_)) => {
            return Err(Error::Config("Must specify a key to set a value".to_string()));
        }
    }

    Ok(())
}

fn unknown_key(key: &str) -> Error {
    Error::Config(format!(
        "Unknown config key: {}\n\nAvailable keys:\n  {}",
        key,
        Config::available_keys().join("\n  ")
    ))
}

/// Display all configuration values
fn show_all_config(config: &Config) {
    println!("[generation]");
    println!("days = {}", config.generation.days);
    match config.generation.seed {
        Some(seed) => println!("seed = {}", seed),
        None => println!("seed = # unset, fresh series each run"),
    }
    println!("format = \"{}\"", config.generation.format);
    println!();

    println!("[data]");
    match &config.data.regions {
        Some(path) => println!("regions = \"{}\"", path.display()),
        None => println!("regions = # unset, bundled regions"),
    }
    println!();

    println!("[map]");
    println!("title = \"{}\"", config.map.title);
    println!("center_lat = {}", config.map.center_lat);
    println!("center_lng = {}", config.map.center_lng);
    println!("zoom = {}", config.map.zoom);
    println!("detail_zoom = {}", config.map.detail_zoom);
    println!();

    println!("[server]");
    println!("host = \"{}\"", config.server.host);
    println!("port = {}", config.server.port);
    println!();

    println!("[url]");
    println!("default = \"{}\"", config.url.default);
    println!();

    println!("[url.providers]");
    let mut providers: Vec<_> = config.url.providers.iter().collect();
    providers.sort();
    for (name, template) in providers {
        println!("{} = \"{}\"", name, template);
    }
}
