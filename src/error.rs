//! Domain-specific error types for the deployment engine.
//!
//! Internal modules return typed errors while the command handlers at the
//! CLI boundary convert them to [`anyhow::Error`] via `?`.
//!
//! - [`ConfigError`]: config file read / parse, fatal at the CLI boundary
//! - [`DeployError`]: per-file copy failures, unsupported platform
//! - [`PlatformError`]: unknown platform selector
//!
//! [`DeployError`] values never abort a deployment: the engine renders them
//! as warning lines and carries on.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that arise from loading the TOML config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("IO error reading config file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The config file is not valid TOML or does not match the schema.
    #[error("Invalid config file {path}: {source}")]
    Parse {
        /// Path to the offending file.
        path: String,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// Failures observed while deploying resources.
#[derive(Error, Debug)]
pub enum DeployError {
    /// A declared source file does not exist at copy time.
    #[error("{} does not exist", .path.display())]
    MissingSource {
        /// Absolute path of the generated asset that was expected.
        path: PathBuf,
    },

    /// Any other I/O failure from the copy primitive.
    #[error("failed to copy {} to {}: {source}", .from.display(), .to.display())]
    Copy {
        /// Source path of the failed copy.
        from: PathBuf,
        /// Destination path of the failed copy.
        to: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The platform has no native project layout.
    #[error("Copying to native projects is not supported for the {platform} platform")]
    UnsupportedPlatform {
        /// Human-readable platform name.
        platform: String,
    },
}

impl DeployError {
    /// Classify an I/O error returned by the copy primitive.
    ///
    /// `NotFound` maps to [`DeployError::MissingSource`]; everything else is a
    /// generic [`DeployError::Copy`].
    #[must_use]
    pub fn from_copy(from: &Path, to: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::MissingSource {
                path: from.to_path_buf(),
            }
        } else {
            Self::Copy {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                source: err,
            }
        }
    }

    /// Render the error as a single warning-sink line.
    #[must_use]
    pub fn warning_line(&self) -> String {
        format!("WARN:\t{self}")
    }
}

/// Errors that arise from platform selectors.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The selector names no known platform.
    #[error("Unknown platform '{0}'")]
    Unknown(String),
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // DeployError
    // -----------------------------------------------------------------------

    #[test]
    fn not_found_is_missing_source() {
        let e = DeployError::from_copy(
            Path::new("/gen/android/icon/drawable-mdpi-icon.png"),
            Path::new("android/app/src/main/res/mipmap/ic_launcher.png"),
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(matches!(e, DeployError::MissingSource { .. }));
        assert_eq!(
            e.to_string(),
            "/gen/android/icon/drawable-mdpi-icon.png does not exist"
        );
    }

    #[test]
    fn other_io_errors_are_copy_failures() {
        let e = DeployError::from_copy(
            Path::new("/gen/ios/icon/icon-20.png"),
            Path::new("/ro/icon20.png"),
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert!(matches!(e, DeployError::Copy { .. }));
        assert_eq!(
            e.to_string(),
            "failed to copy /gen/ios/icon/icon-20.png to /ro/icon20.png: permission denied"
        );
    }

    #[test]
    fn copy_failure_has_source() {
        use std::error::Error as StdError;
        let e = DeployError::Copy {
            from: PathBuf::from("a"),
            to: PathBuf::from("b"),
            source: io::Error::other("disk full"),
        };
        assert!(e.source().is_some());
    }

    #[test]
    fn unsupported_platform_display() {
        let e = DeployError::UnsupportedPlatform {
            platform: "Windows".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Copying to native projects is not supported for the Windows platform"
        );
    }

    #[test]
    fn warning_line_is_tab_prefixed() {
        let e = DeployError::MissingSource {
            path: PathBuf::from("/gen/x.png"),
        };
        assert_eq!(e.warning_line(), "WARN:\t/gen/x.png does not exist");
    }

    // -----------------------------------------------------------------------
    // ConfigError
    // -----------------------------------------------------------------------

    #[test]
    fn config_error_io_display() {
        let e = ConfigError::Io {
            path: "native-res.toml".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(e.to_string().contains("native-res.toml"));
        assert!(e.to_string().contains("IO error reading config file"));
    }

    #[test]
    fn config_error_parse_display() {
        let source = toml::from_str::<toml::Value>("resources = ").expect_err("invalid toml");
        let e = ConfigError::Parse {
            path: "native-res.toml".to_string(),
            source,
        };
        assert!(e.to_string().starts_with("Invalid config file native-res.toml"));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<ConfigError>();
        assert_send_sync::<DeployError>();
        assert_send_sync::<PlatformError>();
    }

    #[test]
    fn errors_convert_to_anyhow() {
        let _a: anyhow::Error = PlatformError::Unknown("x".to_string()).into();
        let _b: anyhow::Error = DeployError::MissingSource {
            path: PathBuf::from("x"),
        }
        .into();
    }
}
