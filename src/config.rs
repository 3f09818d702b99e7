//! Settings file location and persistence.
//!
//! Reader settings are stored as pretty printed JSON in `reader.json` inside
//! the Shiori home directory: `$SHIORI_HOME` when set, otherwise
//! `<config dir>/shiori`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{info, warn};

use crate::{
    error::{Error, Result},
    settings::ReaderSettings,
};

/// Environment variable overriding the home directory.
pub const HOME_ENV: &str = "SHIORI_HOME";

/// File name of the reader settings inside the home directory.
pub const SETTINGS_FILE: &str = "reader.json";

/// Directory holding Shiori's files.
pub fn shiori_home() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(HOME_ENV) {
        return Ok(PathBuf::from(path));
    }

    dirs::config_dir()
        .map(|dir| dir.join("shiori"))
        .ok_or_else(|| Error::not_found(format!("config directory, set {HOME_ENV}")))
}

/// Default location of the reader settings file.
pub fn settings_path() -> Result<PathBuf> {
    Ok(shiori_home()?.join(SETTINGS_FILE))
}

/// Reads settings from `path`.
///
/// A missing file yields [`ReaderSettings::default`]; fields missing from an
/// existing file take their default values.
pub fn load_settings(path: &Path) -> Result<ReaderSettings> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("no settings at {}, using defaults", path.display());
            return Ok(ReaderSettings::default());
        }
        Err(e) => return Err(e.into()),
    };

    let settings: ReaderSettings = serde_json::from_str(&content)?;

    let bound = settings.existing_keys();
    let mut unique = bound.clone();
    unique.sort_unstable();
    unique.dedup();
    if unique.len() != bound.len() {
        warn!(
            "{} binds a key to more than one action, the first action wins",
            path.display()
        );
    }

    Ok(settings)
}

/// Writes `settings` to `path`, creating parent directories as needed.
pub fn save_settings(path: &Path, settings: &ReaderSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string_pretty(settings)?;
    fs::write(path, content)?;
    info!("saved reader settings to {}", path.display());
    Ok(())
}
