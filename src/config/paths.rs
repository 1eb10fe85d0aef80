//! Path management for Wedding Bells
//!
//! Provides XDG-compliant path resolution for configuration, local backend
//! data and logs.
//!
//! ## Path Resolution Order
//!
//! 1. `WEDDING_BELLS_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/wedding-bells` or `~/.config/wedding-bells`
//! 3. Windows: `%APPDATA%\wedding-bells`

use std::path::PathBuf;

use crate::error::WeddingError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "WEDDING_BELLS_DATA_DIR";

/// Manages all paths used by Wedding Bells
#[derive(Debug, Clone)]
pub struct WeddingPaths {
    /// Base directory for all Wedding Bells data
    base_dir: PathBuf,
}

impl WeddingPaths {
    /// Create a new WeddingPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, WeddingError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create WeddingPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding document collections
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the log directory
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the local account list
    pub fn accounts_file(&self) -> PathBuf {
        self.base_dir.join("accounts.json")
    }

    /// Get the path to the persisted sign-in session
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Get the path to the TUI log file
    pub fn log_file(&self) -> PathBuf {
        self.log_dir().join("wedding-bells.log")
    }

    /// Get the file backing a document collection (`users/<uid>/expenses` etc.)
    pub fn collection_file(&self, segments: &[&str]) -> PathBuf {
        let mut path = self.data_dir();
        for segment in segments {
            path.push(segment);
        }
        path.set_extension("json");
        path
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), WeddingError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WeddingError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| WeddingError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| WeddingError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }

    /// Check if Wedding Bells has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, WeddingError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".config"))
            .ok_or_else(|| WeddingError::Config("Could not determine home directory".into()))?,
    };
    Ok(config_base.join("wedding-bells"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, WeddingError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| WeddingError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("wedding-bells"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WeddingPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.log_file(), temp_dir.path().join("logs").join("wedding-bells.log"));
    }

    #[test]
    fn test_collection_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WeddingPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            paths.collection_file(&["users", "abc", "expenses"]),
            temp_dir
                .path()
                .join("data")
                .join("users")
                .join("abc")
                .join("expenses.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WeddingPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.log_dir().exists());
        assert!(!paths.is_initialized());
    }
}
