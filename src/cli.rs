//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::ResourceCategory;
use crate::platform::Platform;

/// Top-level CLI entry point for the native resource deployer.
#[derive(Parser, Debug)]
#[command(
    name = "native-res",
    about = "Copy generated icons and splash screens into native iOS and Android projects",
    version
)]
pub struct Cli {
    #[allow(missing_docs)]
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[allow(missing_docs)]
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Preview copies without writing any file
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Disable parallel copies within a resource group (parallel is enabled by default)
    #[arg(long = "no-parallel", global = true, action = clap::ArgAction::SetFalse)]
    pub parallel: bool,

    /// Config file to use instead of ./native-res.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Copy generated resources into the native projects
    Copy(CopyOpts),
    /// Show the resource catalog for a platform
    List(ListOpts),
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
    /// Print version information
    Version,
}

/// Options for the `copy` subcommand.
#[derive(Parser, Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct CopyOpts {
    /// Root of the generated assets (contains ios/ and android/)
    #[arg(long)]
    pub resources: Option<PathBuf>,

    /// Platforms to deploy (ios, android, windows)
    #[arg(short, long = "platform", value_delimiter = ',')]
    pub platforms: Vec<Platform>,

    /// iOS native project directory
    #[arg(long)]
    pub ios_project: Option<PathBuf>,

    /// Android native project directory
    #[arg(long)]
    pub android_project: Option<PathBuf>,

    /// Do not copy icons
    #[arg(long)]
    pub skip_icons: bool,

    /// Do not copy splash screens
    #[arg(long)]
    pub skip_splash: bool,

    /// Do not copy push-notification icons
    #[arg(long)]
    pub skip_push: bool,
}

/// Options for the `list` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ListOpts {
    /// Platform whose catalog to show
    #[arg(short, long, default_value = "android")]
    pub platform: Platform,

    /// Restrict output to one category (e.g. android-round)
    #[arg(short, long, value_parser = parse_category)]
    pub category: Option<ResourceCategory>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

fn parse_category(s: &str) -> Result<ResourceCategory, String> {
    ResourceCategory::from_id(s).ok_or_else(|| {
        let known: Vec<&str> = ResourceCategory::ALL.iter().map(|c| c.id()).collect();
        format!("unknown category '{s}' (expected one of: {})", known.join(", "))
    })
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_copy_defaults() {
        let cli = Cli::parse_from(["native-res", "copy"]);
        assert!(
            matches!(&cli.command, Command::Copy(_)),
            "Expected Copy command"
        );
        if let Command::Copy(opts) = cli.command {
            assert!(opts.platforms.is_empty());
            assert!(opts.resources.is_none());
            assert!(!opts.skip_icons && !opts.skip_splash && !opts.skip_push);
        }
    }

    #[test]
    fn parse_copy_platform_list() {
        let cli = Cli::parse_from(["native-res", "copy", "--platform", "ios,Android"]);
        if let Command::Copy(opts) = cli.command {
            assert_eq!(opts.platforms, vec![Platform::Ios, Platform::Android]);
        } else {
            panic!("Expected Copy command");
        }
    }

    #[test]
    fn parse_copy_rejects_unknown_platform() {
        assert!(Cli::try_parse_from(["native-res", "copy", "-p", "symbian"]).is_err());
    }

    #[test]
    fn parse_copy_overrides() {
        let cli = Cli::parse_from([
            "native-res",
            "copy",
            "--resources",
            "/gen",
            "--ios-project",
            "apps/ios",
            "--android-project",
            "apps/android",
            "--skip-splash",
            "--skip-push",
        ]);
        if let Command::Copy(opts) = cli.command {
            assert_eq!(opts.resources, Some(PathBuf::from("/gen")));
            assert_eq!(opts.ios_project, Some(PathBuf::from("apps/ios")));
            assert_eq!(opts.android_project, Some(PathBuf::from("apps/android")));
            assert!(!opts.skip_icons);
            assert!(opts.skip_splash);
            assert!(opts.skip_push);
        } else {
            panic!("Expected Copy command");
        }
    }

    #[test]
    fn parse_dry_run_short() {
        let cli = Cli::parse_from(["native-res", "-d", "copy"]);
        assert!(cli.global.dry_run);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from(["native-res", "copy", "--config", "ci/native-res.toml"]);
        assert_eq!(
            cli.global.config,
            Some(PathBuf::from("ci/native-res.toml"))
        );
    }

    #[test]
    fn parse_list_with_category() {
        let cli = Cli::parse_from(["native-res", "list", "-c", "android-push", "--json"]);
        if let Command::List(opts) = cli.command {
            assert_eq!(opts.platform, Platform::Android);
            assert_eq!(opts.category, Some(ResourceCategory::AndroidPush));
            assert!(opts.json);
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn parse_list_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["native-res", "list", "-c", "favicon"]).is_err());
    }

    #[test]
    fn parse_completions() {
        let cli = Cli::parse_from(["native-res", "completions", "bash"]);
        assert!(matches!(
            cli.command,
            Command::Completions {
                shell: clap_complete::Shell::Bash
            }
        ));
    }

    #[test]
    fn parse_version() {
        let cli = Cli::parse_from(["native-res", "version"]);
        assert!(matches!(cli.command, Command::Version));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::parse_from(["native-res", "-v", "copy"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parallel_is_enabled_by_default() {
        let cli = Cli::parse_from(["native-res", "copy"]);
        assert!(cli.global.parallel, "parallel should be true by default");
    }

    #[test]
    fn no_parallel_disables_parallel() {
        let cli = Cli::parse_from(["native-res", "--no-parallel", "copy"]);
        assert!(
            !cli.global.parallel,
            "--no-parallel should set parallel to false"
        );
    }
}
