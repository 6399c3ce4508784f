//! Region id derivation

use crate::error::{Error, Result};

/// Derive a stable id from a display name
///
/// Lowercases the name, collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen and strips hyphens at either end.
///
/// # Errors
/// `Error::InvalidRegionName` when nothing alphanumeric remains.
pub fn region_id(name: &str) -> Result<String> {
    let mut id = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !id.is_empty() {
                id.push('-');
            }
            pending_hyphen = false;
            id.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    if id.is_empty() {
        return Err(Error::InvalidRegionName(name.to_string()));
    }
    Ok(id)
}
