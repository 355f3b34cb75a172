//! Native resource deployer.
//!
//! Copies generated app icons, splash screens and push-notification icons
//! into the fixed locations that native iOS (Xcode asset catalog) and
//! Android (Gradle `res/` tree) projects expect.
//!
//! The public API is organised into layers:
//!
//! - **[`catalog`]**: compiled-in `(source, target)` tables per platform
//! - **[`deploy`]**: resolve the project, select groups, fan out copies
//! - **[`operations`]**: the file-copy primitive behind a mockable trait
//! - **[`commands`]**: top-level subcommand orchestration (`copy`, `list`)
//!
//! The one-call entry point is [`deploy::deploy_resources`].
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod deploy;
pub mod error;
pub mod logging;
pub mod operations;
pub mod platform;
