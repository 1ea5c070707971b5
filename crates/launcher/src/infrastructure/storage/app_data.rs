//! Platform application-data directory resolution.
//!
//! The default config file lives in a `UnixNetwork` folder under the
//! platform's per-user application-data root:
//! - Windows:  `%APPDATA%\UnixNetwork\launcher.cfg`
//! - Linux:    `$XDG_CONFIG_HOME/UnixNetwork/launcher.cfg` (or `~/.config/...`)
//! - macOS:    `~/Library/Application Support/UnixNetwork/launcher.cfg`
//!
//! The root is looked up through the [`AppDataProvider`] trait so tests can
//! point the store somewhere harmless.

use std::path::PathBuf;

use super::error::ConfigError;

/// Name of the folder created under the application-data root.
pub const COMPANY_DIR: &str = "UnixNetwork";

/// Supplies the base application-data directory.
#[cfg_attr(test, mockall::automock)]
pub trait AppDataProvider: Send + Sync {
    /// The per-user application-data root, or `None` when the environment
    /// does not define one.
    fn base_dir(&self) -> Option<PathBuf>;
}

/// Resolves the application-data root from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformAppData;

impl AppDataProvider for PlatformAppData {
    fn base_dir(&self) -> Option<PathBuf> {
        platform_app_data_dir()
    }
}

/// Returns `<app-data>/UnixNetwork`.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformDataDir`] when the provider has no root.
pub fn launcher_dir(provider: &dyn AppDataProvider) -> Result<PathBuf, ConfigError> {
    provider
        .base_dir()
        .map(|base| base.join(COMPANY_DIR))
        .ok_or(ConfigError::NoPlatformDataDir)
}

/// Resolves the platform application-data root without the `UnixNetwork` folder.
fn platform_app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(PathBuf::from)
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME")
            .map(|h| PathBuf::from(h).join("Library").join("Application Support"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launcher_dir_appends_company_folder() {
        // Arrange
        let mut provider = MockAppDataProvider::new();
        provider
            .expect_base_dir()
            .times(1)
            .returning(|| Some(PathBuf::from("/home/user/.config")));

        // Act
        let dir = launcher_dir(&provider).unwrap();

        // Assert
        assert_eq!(dir, PathBuf::from("/home/user/.config/UnixNetwork"));
    }

    #[test]
    fn test_launcher_dir_without_root_is_an_error() {
        let mut provider = MockAppDataProvider::new();
        provider.expect_base_dir().returning(|| None);

        let result = launcher_dir(&provider);

        assert!(matches!(result, Err(ConfigError::NoPlatformDataDir)));
    }

    #[test]
    fn test_platform_app_data_dir_returns_some_on_this_platform() {
        // Only asserted when the relevant variable is present; stripped CI
        // containers may have neither.
        let result = PlatformAppData.base_dir();
        #[cfg(target_os = "windows")]
        if std::env::var_os("APPDATA").is_some() {
            assert!(result.is_some());
        }
        #[cfg(target_os = "linux")]
        {
            let has_xdg = std::env::var_os("XDG_CONFIG_HOME").is_some();
            let has_home = std::env::var_os("HOME").is_some();
            if has_xdg || has_home {
                assert!(result.is_some());
            }
        }
        #[cfg(target_os = "macos")]
        if std::env::var_os("HOME").is_some() {
            assert!(result.is_some());
        }
    }
}
