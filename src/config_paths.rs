//! Per-user configuration directory
//!
//! Everything gridpad persists lives in one directory:
//!
//! ```text
//! <config dir>/
//! ├── config.yaml
//! ├── themes/<id>.yaml
//! └── logs/gridpad.log.YYYY-MM-DD
//! ```
//!
//! The layout inside the directory is built by
//! [`ConfigLocation`](crate::model::ConfigLocation).

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "gridpad";

/// Editor settings file inside the config dir
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// User theme directory inside the config dir
pub const THEMES_DIR_NAME: &str = "themes";

/// Log directory inside the config dir
pub const LOGS_DIR_NAME: &str = "logs";

/// Base name of the rotated log files (`gridpad.log.YYYY-MM-DD`)
pub const LOG_FILE_NAME: &str = "gridpad.log";

/// Base config directory for gridpad
///
/// `$XDG_CONFIG_HOME/gridpad`, falling back to `~/.config/gridpad`.
/// On Windows, `%APPDATA%\gridpad`.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .map(|base| base.join(APP_DIR))
    }
}

/// Create `dir` and any missing parents
pub fn ensure_dir(dir: &Path) -> Result<(), String> {
    fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create directory {}: {}", dir.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_is_app_specific() {
        let Some(dir) = config_dir() else {
            return;
        };
        assert!(dir.ends_with(APP_DIR));
    }

    #[test]
    fn test_ensure_dir_creates_parents() {
        let tmp = tempfile::TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Existing directories are fine
        ensure_dir(&nested).unwrap();
    }
}
