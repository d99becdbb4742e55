//! JSON persistence helpers for save files under a save directory.
//!
//! The default directory is `~/.castaway/`; `CASTAWAY_HOME` overrides it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the save directory.
pub const SAVE_DIR_ENV: &str = "CASTAWAY_HOME";

/// Resolve the save directory without creating it.
pub fn default_save_dir() -> io::Result<PathBuf> {
    if let Some(dir) = std::env::var_os(SAVE_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(".castaway"))
}

/// Get the full path for a save file, creating the directory if needed.
pub fn save_path(dir: &Path, filename: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    Ok(dir.join(filename))
}

/// Load a JSON file, returning `T::default()` if it is missing or invalid.
///
/// A file that exists but fails to parse is logged before falling back.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(
    dir: &Path,
    filename: &str,
) -> T {
    let path = dir.join(filename);
    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return T::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unreadable save file, using defaults");
            return T::default();
        }
    };
    match serde_json::from_str(&json) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "corrupt save file, using defaults");
            T::default()
        }
    }
}

/// Save a value as pretty-printed JSON.
pub fn save_json<T: serde::Serialize>(dir: &Path, filename: &str, data: &T) -> io::Result<()> {
    let path = save_path(dir, filename)?;
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}
