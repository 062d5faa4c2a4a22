//! Platform directory lookup.
//!
//! Resolves where configuration is read from and where the span journal is
//! written, following the XDG conventions through the `dirs` crate. A `~`
//! prefix in user-supplied paths is expanded against the home directory.

use std::path::{Path, PathBuf};

/// Directory name used under the platform config and data roots.
pub const APP_DIR: &str = "translaterm";

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Returns `$XDG_CONFIG_HOME/translaterm` (or the platform equivalent).
///
/// Falls back to `./.translaterm` when the platform has no config directory.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".translaterm"), |dir| dir.join(APP_DIR))
}

/// Returns the default configuration file path.
#[must_use]
pub fn default_config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Returns `$XDG_DATA_HOME/translaterm` (or the platform equivalent).
///
/// Falls back to `./.translaterm` when the platform has no data directory.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".translaterm"), |dir| dir.join(APP_DIR))
}

/// Expands a leading `~` to the home directory.
///
/// Paths without the prefix, and every path when the home directory is
/// unknown, are returned unchanged.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use translaterm::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), Path::new("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}

/// Creates `dir` and its parents if missing.
///
/// # Errors
///
/// Returns the underlying I/O error if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_end_with_app_name() {
        assert!(config_dir().ends_with(APP_DIR));
        assert!(data_dir().ends_with(APP_DIR));
        assert!(default_config_path().ends_with("translaterm/config.toml"));
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/themes/x.toml"), home.join("themes/x.toml"));
            assert_eq!(expand_tilde("~"), home);
        }
        assert_eq!(expand_tilde("relative/path"), PathBuf::from("relative/path"));
    }

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a/b/c");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
