//! Where inline-edit keeps its files on disk.
//!
//! One directory per user holds `config.yaml` and a `logs/` folder.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "inline-edit";

/// The per-user directory, if one can be determined.
///
/// `%APPDATA%\inline-edit` on Windows. Elsewhere `$XDG_CONFIG_HOME/inline-edit`,
/// falling back to `~/.config/inline-edit`.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        let base = env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;
        Some(base.join(APP_DIR))
    }
}

/// Default editable config read by `EditableConfig::load`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Rolling debug logs written with `--log-file`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn create_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path).map_err(|e| format!("cannot create {}: {}", path.display(), e))
}

/// The logs directory, created if missing
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "no per-user config directory".to_string())?;
    create_dir(&logs)?;
    Ok(logs)
}
