//! CLI argument validation functions
//!
//! This module provides custom validation functions for CLI arguments
//! that go beyond what clap can validate automatically.

use std::fs;
use std::path::PathBuf;

/// Longest accepted timeout: one day
const MAX_TIMEOUT_MS: u64 = 24 * 60 * 60 * 1000;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!(
            "Cannot read configuration file '{}': {}",
            path_str, e
        )),
    }
}

/// Validate timeout is a positive number of milliseconds, at most one day
pub fn validate_timeout_ms(timeout_str: &str) -> Result<u64, String> {
    let timeout: u64 = timeout_str.parse().map_err(|_| {
        format!(
            "Timeout must be a positive number of milliseconds, got: '{}'",
            timeout_str
        )
    })?;

    if timeout == 0 {
        return Err("Timeout must be greater than 0. Omit --timeout to disable auto-close.".to_string());
    }

    if timeout > MAX_TIMEOUT_MS {
        return Err(format!("Timeout cannot exceed one day ({} ms)", MAX_TIMEOUT_MS));
    }

    Ok(timeout)
}

/// Validate the notification title is not blank
pub fn validate_title(title: &str) -> Result<String, String> {
    if title.trim().is_empty() {
        return Err("Title cannot be empty".to_string());
    }
    Ok(title.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_timeout_ms() {
        assert_eq!(validate_timeout_ms("1500"), Ok(1500));
        assert!(validate_timeout_ms("0").is_err());
        assert!(validate_timeout_ms("-5").is_err());
        assert!(validate_timeout_ms("soon").is_err());
        assert!(validate_timeout_ms("86400001").is_err());
    }

    #[test]
    fn test_validate_title() {
        assert_eq!(validate_title("Hello"), Ok("Hello".to_string()));
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn test_validate_config_file_path() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert!(validate_config_file_path(path).is_ok());

        assert!(validate_config_file_path("/definitely/not/here.toml").is_err());

        let dir = tempfile::TempDir::new().unwrap();
        assert!(validate_config_file_path(dir.path().to_str().unwrap()).is_err());
    }
}
