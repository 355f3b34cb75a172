//! Platform deployment: dispatch catalog groups to the copier and report.
//!
//! - `copier`: concurrent copy of one group with failure isolation
//!
//! Groups run strictly one after another (icon, splash, push); only the
//! entries inside a group fan out.  That bounds the number of files open at
//! once to the size of the largest group.

mod copier;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::catalog::{self, ResourceKind};
use crate::error::DeployError;
use crate::logging::{Log, Logger, Sink};
use crate::operations::{FileCopier, SystemFileCopier};
use crate::platform::Platform;

/// Location of a platform's native project.
///
/// # Examples
///
/// ```
/// use native_res::deploy::NativeProjectConfig;
/// use native_res::platform::Platform;
/// use std::path::PathBuf;
///
/// let default = NativeProjectConfig::default();
/// assert_eq!(default.project_root(Platform::Android), Some(PathBuf::from("android")));
///
/// let custom = NativeProjectConfig::new("apps/mobile/ios");
/// assert_eq!(custom.project_root(Platform::Ios), Some(PathBuf::from("apps/mobile/ios")));
/// assert_eq!(custom.project_root(Platform::Windows), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NativeProjectConfig {
    /// Project directory; the platform default applies when unset or empty.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl NativeProjectConfig {
    /// Config pointing at an explicit project directory.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: Some(directory.into()),
        }
    }

    /// Resolve the project root for `platform`.
    ///
    /// `None` when the platform has no native project layout.
    #[must_use]
    pub fn project_root(&self, platform: Platform) -> Option<PathBuf> {
        let default = platform.default_directory()?;
        Some(
            self.directory
                .as_ref()
                .filter(|d| !d.as_os_str().is_empty())
                .cloned()
                .unwrap_or_else(|| PathBuf::from(default)),
        )
    }
}

/// Project locations for every platform, as configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NativeProjects {
    /// iOS project location.
    pub ios: NativeProjectConfig,
    /// Android project location.
    pub android: NativeProjectConfig,
}

static NO_PROJECT: NativeProjectConfig = NativeProjectConfig { directory: None };

impl NativeProjects {
    /// Location configured for `platform`.
    #[must_use]
    pub fn get(&self, platform: Platform) -> &NativeProjectConfig {
        match platform {
            Platform::Ios => &self.ios,
            Platform::Android => &self.android,
            Platform::Windows => &NO_PROJECT,
        }
    }
}

/// Which resource kinds a deployment copies.
///
/// # Examples
///
/// ```
/// use native_res::catalog::ResourceKind;
/// use native_res::deploy::KindSelection;
///
/// let icons_only = KindSelection { icons: true, ..KindSelection::none() };
/// assert!(icons_only.includes(ResourceKind::Icon));
/// assert!(!icons_only.includes(ResourceKind::Splash));
/// assert!(KindSelection::all().includes(ResourceKind::Push));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSelection {
    /// Copy icons (including adaptive layers and round icons).
    pub icons: bool,
    /// Copy splash screens.
    pub splash: bool,
    /// Copy push-notification icons.
    pub push: bool,
}

impl KindSelection {
    /// Every kind enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            icons: true,
            splash: true,
            push: true,
        }
    }

    /// Every kind disabled.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            icons: false,
            splash: false,
            push: false,
        }
    }

    /// Whether `kind` is enabled.
    #[must_use]
    pub const fn includes(self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::Icon => self.icons,
            ResourceKind::Splash => self.splash,
            ResourceKind::Push => self.push,
        }
    }
}

impl Default for KindSelection {
    fn default() -> Self {
        Self::all()
    }
}

/// One deployment: a platform, its generated assets and its project.
#[derive(Debug, Clone, Copy)]
pub struct DeployRequest<'a> {
    /// Target platform.
    pub platform: Platform,
    /// Root of the generated assets (contains `ios/`, `android/`).
    pub resources_dir: &'a Path,
    /// Native project location.
    pub project: &'a NativeProjectConfig,
    /// Kinds to copy.
    pub kinds: KindSelection,
}

/// Result of [`Deployer::deploy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployOutcome {
    /// Groups were processed; `attempted` counts catalog entries, not
    /// successful copies.
    Copied {
        /// Number of catalog entries attempted.
        attempted: usize,
    },
    /// The platform has no native project layout; nothing was done.
    Unsupported,
}

/// Deploys catalog groups into a native project.
pub struct Deployer {
    log: Arc<dyn Log>,
    copier: Arc<dyn FileCopier>,
    parallel: bool,
}

impl fmt::Debug for Deployer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deployer")
            .field("log", &"<dyn Log>")
            .field("copier", &"<dyn FileCopier>")
            .field("parallel", &self.parallel)
            .finish()
    }
}

impl Deployer {
    /// Deployer using the real filesystem with parallel copies.
    #[must_use]
    pub fn new(log: Arc<dyn Log>) -> Self {
        Self {
            log,
            copier: Arc::new(SystemFileCopier),
            parallel: true,
        }
    }

    /// Replace the copy primitive.
    #[must_use]
    pub fn with_copier(mut self, copier: Arc<dyn FileCopier>) -> Self {
        self.copier = copier;
        self
    }

    /// Enable or disable concurrent copies inside a group.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Copy the selected resource groups for `request.platform`.
    ///
    /// Emits one summary line on `progress` on success.  An unsupported
    /// platform produces a single line on `warnings` and no summary.  Copy
    /// failures are reported on `warnings` and never abort the deployment.
    pub fn deploy(
        &self,
        request: &DeployRequest<'_>,
        progress: &dyn Sink,
        warnings: &dyn Sink,
    ) -> DeployOutcome {
        let platform = request.platform;
        let Some(project_root) = request.project.project_root(platform) else {
            let err = DeployError::UnsupportedPlatform {
                platform: platform.pretty_name().to_string(),
            };
            warnings.write_line(&err.warning_line());
            return DeployOutcome::Unsupported;
        };
        self.log
            .debug(&format!("project root: {}", project_root.display()));

        let mut attempted = 0;
        for group in catalog::groups(platform) {
            if !request.kinds.includes(group.kind) {
                self.log.debug(&format!("skipping {} resources", group.kind));
                continue;
            }
            let source_root = request.resources_dir.join(group.source_dir);
            let target_root = project_root.join(group.target_dir);
            attempted += copier::copy_group(
                self,
                &source_root,
                &target_root,
                group.entries,
                warnings,
            );
        }

        progress.write_line(&format!(
            "Copied {attempted} resource items to {}",
            platform.pretty_name()
        ));
        DeployOutcome::Copied { attempted }
    }
}

/// Copy generated resources into a native project with the default
/// [`Deployer`] (real filesystem, parallel copies).
///
/// `progress` receives the summary line, `warnings` one line per unavailable
/// source; pass [`NullSink`](crate::logging::NullSink) to discard either.
#[allow(clippy::too_many_arguments)]
pub fn deploy_resources(
    platform: Platform,
    resources_dir: &Path,
    project: &NativeProjectConfig,
    include_icons: bool,
    include_splash: bool,
    include_push_icons: bool,
    progress: &dyn Sink,
    warnings: &dyn Sink,
) -> DeployOutcome {
    let request = DeployRequest {
        platform,
        resources_dir,
        project,
        kinds: KindSelection {
            icons: include_icons,
            splash: include_splash,
            push: include_push_icons,
        },
    };
    Deployer::new(Arc::new(Logger::new())).deploy(&request, progress, warnings)
}
