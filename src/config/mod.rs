//! Project configuration file (`native-res.toml`).
//!
//! Every field is optional; command-line flags override whatever the file
//! sets.
//!
//! ```toml
//! resources = "resources"
//! platforms = ["ios", "android"]
//!
//! [ios]
//! directory = "ios"
//!
//! [android]
//! directory = "android"
//!
//! [copy]
//! icons = true
//! splash = true
//! push = true
//! ```

pub mod toml_loader;

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::deploy::{KindSelection, NativeProjectConfig, NativeProjects};
use crate::error::ConfigError;
use crate::platform::Platform;

/// File name looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "native-res.toml";

/// Generated-assets root used when neither the file nor the CLI sets one.
pub const DEFAULT_RESOURCES_DIR: &str = "resources";

/// Contents of `native-res.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Generated-assets root.
    pub resources: Option<PathBuf>,
    /// Platforms to deploy when none are given on the command line.
    pub platforms: Option<Vec<Platform>>,
    /// iOS project location.
    pub ios: NativeProjectConfig,
    /// Android project location.
    pub android: NativeProjectConfig,
    /// Kinds to copy.
    pub copy: CopyConfig,
}

/// `[copy]` section: which resource kinds to deploy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct CopyConfig {
    /// Copy icons.
    pub icons: bool,
    /// Copy splash screens.
    pub splash: bool,
    /// Copy push-notification icons.
    pub push: bool,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            icons: true,
            splash: true,
            push: true,
        }
    }
}

impl From<CopyConfig> for KindSelection {
    fn from(copy: CopyConfig) -> Self {
        Self {
            icons: copy.icons,
            splash: copy.splash,
            push: copy.push,
        }
    }
}

impl Config {
    /// Load the config file at `path`, or the defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        toml_loader::load_config(path)
    }

    /// Load `explicit` if given, otherwise [`CONFIG_FILE_NAME`] in `dir`.
    ///
    /// An explicitly named file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing, or if the chosen file
    /// cannot be read or parsed.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) if !path.exists() => Err(ConfigError::Io {
                path: path.display().to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
            Some(path) => Self::load(path),
            None => Self::load(&dir.join(CONFIG_FILE_NAME)),
        }
    }

    /// Project locations from the `[ios]` and `[android]` sections.
    #[must_use]
    pub fn projects(&self) -> NativeProjects {
        NativeProjects {
            ios: self.ios.clone(),
            android: self.android.clone(),
        }
    }

    /// Generated-assets root, falling back to [`DEFAULT_RESOURCES_DIR`].
    #[must_use]
    pub fn resources_dir(&self) -> PathBuf {
        self.resources
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCES_DIR))
    }

    /// Platforms to deploy, falling back to iOS and Android.
    #[must_use]
    pub fn platforms(&self) -> Vec<Platform> {
        self.platforms
            .clone()
            .unwrap_or_else(|| vec![Platform::Ios, Platform::Android])
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn write_temp_toml(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, content).expect("write temp toml");
        (dir, path)
    }

    #[test]
    fn empty_file_uses_defaults() {
        let (_dir, path) = write_temp_toml("");
        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.resources_dir(), PathBuf::from("resources"));
        assert_eq!(config.platforms(), [Platform::Ios, Platform::Android]);
        assert_eq!(KindSelection::from(config.copy), KindSelection::all());
    }

    #[test]
    fn full_file() {
        let (_dir, path) = write_temp_toml(
            r#"resources = "build/res"
platforms = ["android"]

[ios]
directory = "apps/ios"

[android]
directory = "apps/android"

[copy]
splash = false
"#,
        );
        let config = Config::load(&path).unwrap();
        assert_eq!(config.resources_dir(), PathBuf::from("build/res"));
        assert_eq!(config.platforms(), [Platform::Android]);
        let projects = config.projects();
        assert_eq!(projects.get(Platform::Ios), &NativeProjectConfig::new("apps/ios"));
        assert_eq!(
            projects.get(Platform::Android),
            &NativeProjectConfig::new("apps/android")
        );
        assert_eq!(
            KindSelection::from(config.copy),
            KindSelection {
                icons: true,
                splash: false,
                push: true
            }
        );
    }

    #[test]
    fn platform_names_ignore_case() {
        let (_dir, path) = write_temp_toml("platforms = [\"iOS\", \"Android\"]\n");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.platforms(), [Platform::Ios, Platform::Android]);
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let (_dir, path) = write_temp_toml("platforms = [\"symbian\"]\n");
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let (_dir, path) = write_temp_toml("[ios]\nfolder = \"x\"\n");
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn discover_uses_file_in_dir() {
        let (dir, _path) = write_temp_toml("resources = \"gen\"\n");
        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config.resources_dir(), PathBuf::from("gen"));
    }

    #[test]
    fn discover_without_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::discover(None, dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn discover_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("custom.toml");
        let err = Config::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn windows_project_is_default() {
        let config = Config::default();
        assert_eq!(
            config.projects().get(Platform::Windows),
            &NativeProjectConfig::default()
        );
    }
}
