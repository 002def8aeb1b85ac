//! Platform-specific location of the rename file.
//!
//! The engine itself only needs *a* writable directory.  Hosts that do not
//! already have one can use [`config_dir`], which follows the conventions of
//! the game's mod loader:
//!
//! - Windows:  `%LOCALAPPDATA%\ModTheSpire\RenameTheSpire`
//! - macOS:    `~/Library/Preferences/ModTheSpire/RenameTheSpire`
//! - Others:   `$XDG_CONFIG_HOME/ModTheSpire/RenameTheSpire`
//!   (or `~/.config/ModTheSpire/RenameTheSpire`)

use std::path::PathBuf;

use thiserror::Error;

/// File name of the rename configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "card_renames.json";

/// Mod loader directory shared by every mod.
const LOADER_DIR: &str = "ModTheSpire";

/// This mod's directory under [`LOADER_DIR`].
const MOD_DIR: &str = "RenameTheSpire";

/// Error type for directory resolution.
#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    /// The environment variables the platform path is built from are unset.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,
}

/// Determines the platform-appropriate directory for the rename file.
///
/// # Errors
///
/// Returns [`PathError::NoPlatformConfigDir`] when the base directory cannot
/// be determined from the environment.
pub fn config_dir() -> Result<PathBuf, PathError> {
    platform_base_dir()
        .map(|base| base.join(LOADER_DIR).join(MOD_DIR))
        .ok_or(PathError::NoPlatformConfigDir)
}

/// Resolves the full path to the rename file.
///
/// # Errors
///
/// Returns [`PathError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, PathError> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Resolves the per-user base directory the mod loader keeps settings in.
fn platform_base_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("LOCALAPPDATA").map(PathBuf::from)
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| PathBuf::from(h).join("Library").join("Preferences"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        std::env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_path_ends_with_file_name() {
        // Skipped silently when the environment has no home directory.
        if let Ok(path) = config_file_path() {
            assert!(path.ends_with(CONFIG_FILE_NAME), "got {path:?}");
        }
    }

    #[test]
    fn test_config_dir_ends_with_mod_directories() {
        if let Ok(dir) = config_dir() {
            assert!(dir.ends_with(PathBuf::from(LOADER_DIR).join(MOD_DIR)), "got {dir:?}");
        }
    }

    #[test]
    fn test_platform_base_dir_is_some_when_home_is_set() {
        #[cfg(target_os = "windows")]
        if std::env::var_os("LOCALAPPDATA").is_some() {
            assert!(platform_base_dir().is_some());
        }
        #[cfg(not(target_os = "windows"))]
        if std::env::var_os("HOME").is_some() {
            assert!(platform_base_dir().is_some());
        }
    }
}
