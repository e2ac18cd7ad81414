//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading punch table
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{TimesheetError, TimesheetResult};

use super::types::{ColumnAliases, ColumnsConfig, ProfileMetadata, TimesheetConfig};

/// Loads and provides access to the timesheet configuration.
///
/// # Directory Structure
///
/// ```text
/// config/timesheet/
/// ├── profile.yaml   # Profile metadata
/// └── columns.yaml   # Header aliases per logical column
/// ```
///
/// # Example
///
/// ```no_run
/// use punch_timesheet::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/timesheet").unwrap();
/// println!("Date headers: {:?}", loader.columns().punch_date);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: TimesheetConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if a required file is missing and
    /// `ConfigParseError` if a file is not valid YAML for its structure.
    pub fn load<P: AsRef<Path>>(path: P) -> TimesheetResult<Self> {
        let path = path.as_ref();

        let profile = Self::load_yaml::<ProfileMetadata>(&path.join("profile.yaml"))?;
        let columns = Self::load_yaml::<ColumnsConfig>(&path.join("columns.yaml"))?;

        Self::validate_columns(&path.join("columns.yaml"), &columns.columns)?;

        Ok(Self {
            config: TimesheetConfig::new(profile, columns.columns),
        })
    }

    /// Returns a loader holding the built-in header aliases.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> TimesheetResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TimesheetError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| TimesheetError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Every logical column needs at least one non-blank alias.
    fn validate_columns(path: &Path, columns: &ColumnAliases) -> TimesheetResult<()> {
        let lists = [
            ("punch_date", &columns.punch_date),
            ("punch_time", &columns.punch_time),
            ("direction", &columns.direction),
            ("employee_id", &columns.employee_id),
        ];

        for (name, aliases) in lists {
            if aliases.iter().all(|alias| alias.trim().is_empty()) {
                return Err(TimesheetError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("column '{}' has no aliases", name),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &TimesheetConfig {
        &self.config
    }

    /// Returns the profile metadata.
    pub fn profile(&self) -> &ProfileMetadata {
        self.config.profile()
    }

    /// Returns the header aliases.
    pub fn columns(&self) -> &ColumnAliases {
        self.config.columns()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/timesheet"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "punch-timesheet-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.profile().name, "default");
        assert_eq!(loader.columns().punch_date[0], "punch date");
        assert_eq!(loader.columns().direction[0], "directionality");
    }

    #[test]
    fn test_shipped_configuration_matches_builtin_primary_headers() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let builtin = ConfigLoader::builtin();

        assert_eq!(loader.columns().punch_date[0], builtin.columns().punch_date[0]);
        assert_eq!(loader.columns().punch_time[0], builtin.columns().punch_time[0]);
        assert_eq!(loader.columns().direction[0], builtin.columns().direction[0]);
        assert_eq!(loader.columns().employee_id[0], builtin.columns().employee_id[0]);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(TimesheetError::ConfigNotFound { path }) => {
                assert!(path.contains("profile.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir("invalid-yaml");
        fs::write(dir.join("profile.yaml"), "name: test\nversion: '1'\n").unwrap();
        fs::write(dir.join("columns.yaml"), "columns: [not, a, map").unwrap();

        match ConfigLoader::load(&dir) {
            Err(TimesheetError::ConfigParseError { path, .. }) => {
                assert!(path.contains("columns.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_aliases_are_rejected() {
        let dir = scratch_dir("blank-aliases");
        fs::write(dir.join("profile.yaml"), "name: test\nversion: '1'\n").unwrap();
        fs::write(
            dir.join("columns.yaml"),
            "columns:\n  punch_date: ['date']\n  punch_time: ['  ']\n  direction: ['dir']\n  employee_id: ['id']\n",
        )
        .unwrap();

        match ConfigLoader::load(&dir) {
            Err(TimesheetError::ConfigParseError { message, .. }) => {
                assert_eq!(message, "column 'punch_time' has no aliases");
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
