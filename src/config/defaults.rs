//! Default configuration values
//!
//! Named constants for all tunable parameters

pub use crate::constants::generation::DEFAULT_DAYS;
pub use crate::constants::map::{
    DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG, DEFAULT_DETAIL_ZOOM, DEFAULT_TITLE, DEFAULT_ZOOM,
};

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7979;

/// Default URL provider
pub const DEFAULT_URL_PROVIDER: &str = "openstreetmap";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "region-dash";
