//! Load/save of the whole application state as one JSON file.

use crate::models::AppData;
use std::path::Path;

/// Load app data from `path`. Missing or unreadable files load as `None`
/// (the caller starts fresh); a corrupt file is logged, not fatal.
pub fn load(path: &Path) -> Option<AppData> {
    let raw = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(data) => Some(data),
        Err(e) => {
            log::warn!("Ignoring corrupt data file {}: {}", path.display(), e);
            None
        }
    }
}

/// Save the whole app data blob to `path` as pretty JSON.
pub fn save(path: &Path, data: &AppData) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)
}
