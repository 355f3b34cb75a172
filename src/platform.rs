//! Target platform selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlatformError;

/// Target platform selector.
///
/// `Windows` is a recognised selector that has no native project layout;
/// deploying to it is reported as unsupported rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Platform {
    /// Xcode project with an asset catalog.
    Ios,
    /// Gradle project with an `res/` tree.
    Android,
    /// Known selector without a native project layout.
    Windows,
}

impl Platform {
    /// Every known platform selector.
    pub const ALL: [Self; 3] = [Self::Ios, Self::Android, Self::Windows];

    /// Stable lowercase identifier used on the command line and in config.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Windows => "windows",
        }
    }

    /// Human-readable label for messages.
    #[must_use]
    pub const fn pretty_name(self) -> &'static str {
        match self {
            Self::Ios => "iOS",
            Self::Android => "Android",
            Self::Windows => "Windows",
        }
    }

    /// Project directory used when the caller does not configure one.
    ///
    /// `None` for platforms without a native project layout.
    #[must_use]
    pub const fn default_directory(self) -> Option<&'static str> {
        match self {
            Self::Ios => Some("ios"),
            Self::Android => Some("android"),
            Self::Windows => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.id() == wanted)
            .ok_or_else(|| PlatformError::Unknown(s.to_string()))
    }
}

impl TryFrom<String> for Platform {
    type Error = PlatformError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
