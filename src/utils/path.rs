//! Path utilities for finding data directories

use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

/// Returns the folder where config and debug logs are stored.
/// Uses the executable directory when a `config` folder sits next to it,
/// then the per-user data directory, then the current directory.
pub fn get_data_dir() -> PathBuf {
    if let Ok(exe_path) = env::current_exe() {
        if let Some(parent) = exe_path.parent() {
            if parent.join("config").exists() {
                return parent.to_path_buf();
            }
        }
    }

    if let Some(dirs) = ProjectDirs::from("", "", "auto-fish") {
        return dirs.data_dir().to_path_buf();
    }

    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Default config file location under a data directory
pub fn config_path(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join("config").join("config.json")
}
