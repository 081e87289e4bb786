//! Tests for the logger module

use crate::logger::config::*;
use crate::logger::writer::LogFileWriter;
use std::path::PathBuf;

#[cfg(test)]
mod config_tests {
    use super::*;

    /// Helper function to create a test configuration
    fn create_test_config() -> LoggerConfig {
        LoggerConfig {
            console: ConsoleConfig {
                enabled: true,
                colored: false,
            },
            file: FileConfig {
                enabled: false,
                path: PathBuf::from("test.log"),
                append: true,
                format: LogFormat::Full,
            },
            level: "info".to_string(),
        }
    }

    #[test]
    fn test_default_config_creation() {
        let config = LoggerConfig::default();
        assert!(config.console.enabled);
        assert!(config.console.colored);
        assert!(!config.file.enabled);
        assert_eq!(config.level, "info");
    }

    #[test]
    fn test_config_validation() {
        let mut config = create_test_config();

        // Valid config should pass
        assert!(config.validate().is_ok());

        // Config with both outputs disabled should fail
        config.console.enabled = false;
        config.file.enabled = false;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_level_rejected() {
        let mut config = create_test_config();
        config.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_enabled_file_needs_path() {
        let mut config = create_test_config();
        config.file.enabled = true;
        config.file.path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_format_default() {
        assert_eq!(LogFormat::default(), LogFormat::Full);
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Default values are valid
        #[test]
        fn property_config_defaults_are_valid(_dummy in 0u8..1u8) {
            prop_assert!(LoggerConfig::default().validate().is_ok());
            prop_assert!(FileConfig::default().validate().is_ok());
        }

        /// Any config with at least one output and a known level validates
        #[test]
        fn property_valid_configs_validate(
            console_enabled in any::<bool>(),
            file_enabled in any::<bool>(),
            colored in any::<bool>(),
            append in any::<bool>(),
            level in prop_oneof![
                Just("trace"), Just("debug"), Just("info"), Just("warn"), Just("error")
            ],
        ) {
            prop_assume!(console_enabled || file_enabled);

            let config = LoggerConfig {
                console: ConsoleConfig { enabled: console_enabled, colored },
                file: FileConfig {
                    enabled: file_enabled,
                    path: PathBuf::from("logs/test.log"),
                    append,
                    format: LogFormat::Compact,
                },
                level: level.to_string(),
            };
            prop_assert!(config.validate().is_ok());
        }
    }
}

#[cfg(test)]
mod writer_tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn test_writer_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/dir/app.log");
        let config = FileConfig {
            enabled: true,
            path: path.clone(),
            append: true,
            format: LogFormat::Full,
        };

        let writer = LogFileWriter::new(&config).unwrap();
        {
            let mut guard = writer.make_writer();
            guard.write_all(b"hello\n").unwrap();
        }

        assert!(!writer.is_in_fallback_mode());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_writer_truncates_without_append() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "old contents\n").unwrap();

        let config = FileConfig {
            enabled: true,
            path: path.clone(),
            append: false,
            format: LogFormat::Json,
        };

        let writer = LogFileWriter::new(&config).unwrap();
        {
            let mut guard = writer.make_writer();
            guard.write_all(b"new\n").unwrap();
        }

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_writer_rejects_empty_path() {
        let config = FileConfig {
            enabled: true,
            path: PathBuf::new(),
            append: true,
            format: LogFormat::Full,
        };
        assert!(LogFileWriter::new(&config).is_err());
    }
}

#[cfg(test)]
mod subscriber_tests {
    use super::*;
    use crate::logger::build_both;
    use tempfile::TempDir;
    use tracing_subscriber::EnvFilter;

    #[test]
    fn test_console_and_file_subscriber_for_every_format() {
        for format in [LogFormat::Full, LogFormat::Compact, LogFormat::Json] {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("both.log");
            let config = LoggerConfig {
                console: ConsoleConfig::new(true, false),
                file: FileConfig {
                    enabled: true,
                    path: path.clone(),
                    append: false,
                    format,
                },
                level: "info".to_string(),
            };

            let subscriber = build_both(&config, EnvFilter::new("info"), false).unwrap();
            tracing::subscriber::with_default(subscriber, || {
                tracing::info!(format = format.as_str(), "written to both outputs");
            });

            let contents = std::fs::read_to_string(&path).unwrap();
            assert!(
                contents.contains("written to both outputs"),
                "{} output missing message: {contents}",
                format.as_str()
            );
        }
    }
}
