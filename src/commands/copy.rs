//! Command: copy generated resources into the native projects.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};

use crate::cli::{CopyOpts, GlobalOpts};
use crate::config::Config;
use crate::deploy::{
    DeployOutcome, DeployRequest, Deployer, KindSelection, NativeProjectConfig, NativeProjects,
};
use crate::logging::{Log, LogSink, Logger, Sink};
use crate::operations::DryRunCopier;
use crate::platform::Platform;

/// Effective settings after merging the config file with command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPlan {
    /// Generated-assets root.
    pub resources_dir: PathBuf,
    /// Platforms to deploy, in order.
    pub platforms: Vec<Platform>,
    /// Project locations.
    pub projects: NativeProjects,
    /// Kinds to copy.
    pub kinds: KindSelection,
}

impl CopyPlan {
    /// Merge `config` with `opts`; flags win over file values.
    #[must_use]
    pub fn resolve(config: &Config, opts: &CopyOpts) -> Self {
        let mut kinds = KindSelection::from(config.copy);
        kinds.icons &= !opts.skip_icons;
        kinds.splash &= !opts.skip_splash;
        kinds.push &= !opts.skip_push;

        let mut projects = config.projects();
        if let Some(dir) = &opts.ios_project {
            projects.ios = NativeProjectConfig::new(dir);
        }
        if let Some(dir) = &opts.android_project {
            projects.android = NativeProjectConfig::new(dir);
        }

        Self {
            resources_dir: opts
                .resources
                .clone()
                .unwrap_or_else(|| config.resources_dir()),
            platforms: if opts.platforms.is_empty() {
                config.platforms()
            } else {
                opts.platforms.clone()
            },
            projects,
            kinds,
        }
    }
}

/// Run the copy command.
///
/// # Errors
///
/// Returns an error if the working directory cannot be determined or the
/// configuration file cannot be loaded.
pub fn run(global: &GlobalOpts, opts: &CopyOpts, log: &Logger) -> Result<()> {
    let cwd = std::env::current_dir().context("determining working directory")?;

    log.stage("Loading configuration");
    let config = Config::discover(global.config.as_deref(), &cwd)?;
    let plan = CopyPlan::resolve(&config, opts);
    log.debug(&format!("resources: {}", plan.resources_dir.display()));

    let log: Arc<dyn Log> = Arc::new(*log);
    let progress = LogSink::progress(Arc::clone(&log));
    let warnings = LogSink::warnings(Arc::clone(&log));
    execute(&plan, global, &log, &progress, &warnings);
    Ok(())
}

/// Deploy every platform in `plan`, one after another.
///
/// Returns one outcome per platform, in plan order.
pub fn execute(
    plan: &CopyPlan,
    global: &GlobalOpts,
    log: &Arc<dyn Log>,
    progress: &dyn Sink,
    warnings: &dyn Sink,
) -> Vec<DeployOutcome> {
    let mut deployer = Deployer::new(Arc::clone(log)).with_parallel(global.parallel);
    if global.dry_run {
        deployer = deployer.with_copier(Arc::new(DryRunCopier::new(Arc::clone(log))));
    }

    plan.platforms
        .iter()
        .map(|&platform| {
            log.stage(&format!("Copying {} resources", platform.pretty_name()));
            let request = DeployRequest {
                platform,
                resources_dir: &plan.resources_dir,
                project: plan.projects.get(platform),
                kinds: plan.kinds,
            };
            deployer.deploy(&request, progress, warnings)
        })
        .collect()
}
