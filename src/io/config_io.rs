use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::io::store::StoreError;
use crate::model::config::AppConfig;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "JH_DATA_DIR";

/// Resolve the data directory: explicit flag, then `JH_DATA_DIR`, then
/// `$XDG_DATA_HOME/just-habits`, then `~/.local/share/just-habits`.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf, StoreError> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    resolve_from_env(
        std::env::var_os(DATA_DIR_ENV).map(PathBuf::from),
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn resolve_from_env(
    data_dir: Option<PathBuf>,
    xdg_data_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Result<PathBuf, StoreError> {
    if let Some(dir) = data_dir.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    if let Some(xdg) = xdg_data_home.filter(|d| d.is_absolute()) {
        return Ok(xdg.join("just-habits"));
    }
    home.filter(|d| !d.as_os_str().is_empty())
        .map(|h| h.join(".local").join("share").join("just-habits"))
        .ok_or(StoreError::NoDataDir)
}

/// Path of config.toml in the data directory
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// Read config.toml. A missing file yields the defaults.
pub fn read_config(data_dir: &Path) -> Result<AppConfig, StoreError> {
    let path = config_path(data_dir);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => return Err(StoreError::Read { path, source: e }),
    };
    toml::from_str(&text).map_err(|e| StoreError::Config { path, source: e })
}
