//! File-copy primitive used by the deployer.
//!
//! Provides the [`FileCopier`] trait so that deployment can be unit-tested
//! without touching the real filesystem.  Production code uses
//! [`SystemFileCopier`]; `--dry-run` uses [`DryRunCopier`].

use std::fmt;
use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::logging::Log;

/// Copies one file to one destination.
///
/// Implementations must create missing destination directories, overwrite an
/// existing destination and preserve the byte content exactly.  A missing
/// source must surface as [`io::ErrorKind::NotFound`].
#[cfg_attr(test, mockall::automock)]
pub trait FileCopier: Send + Sync {
    /// Copy `source` to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` cannot be read or `target` cannot be
    /// written.
    fn copy(&self, source: &Path, target: &Path) -> io::Result<()>;
}

/// Production [`FileCopier`] that delegates to [`std::fs`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFileCopier;

impl FileCopier for SystemFileCopier {
    fn copy(&self, source: &Path, target: &Path) -> io::Result<()> {
        // Fail on the source first so a missing asset never leaves empty
        // directories behind in the project tree.
        require_regular_file(source)?;
        ensure_parent_dir(target)?;
        std::fs::copy(source, target).map(|_| ())
    }
}

/// [`FileCopier`] that validates sources but writes nothing.
///
/// Sources are checked exactly like [`SystemFileCopier`] does, so a dry run
/// reports the same warnings as a real deployment would.
pub struct DryRunCopier {
    log: Arc<dyn Log>,
}

impl DryRunCopier {
    /// Create a dry-run copier reporting through `log`.
    #[must_use]
    pub fn new(log: Arc<dyn Log>) -> Self {
        Self { log }
    }
}

impl fmt::Debug for DryRunCopier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DryRunCopier")
            .field("log", &"<dyn Log>")
            .finish()
    }
}

impl FileCopier for DryRunCopier {
    fn copy(&self, source: &Path, target: &Path) -> io::Result<()> {
        require_regular_file(source)?;
        self.log.dry_run(&format!(
            "would copy {} -> {}",
            source.display(),
            target.display()
        ));
        Ok(())
    }
}

/// Check that `source` exists and is a regular file.
///
/// An absent path keeps the `NotFound` from [`std::fs::metadata`]; anything
/// that exists but is not a regular file is `InvalidInput`.
fn require_regular_file(source: &Path) -> io::Result<()> {
    if std::fs::metadata(source)?.is_file() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a regular file", source.display()),
        ))
    }
}

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
