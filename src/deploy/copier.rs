//! Fan-out copy of one resource group.

use std::path::Path;

use super::Deployer;
use crate::catalog::ResourceEntry;
use crate::error::DeployError;
use crate::logging::Sink;

/// Copy every entry of a group from `source_root` into `target_root`.
///
/// Copies run concurrently on the Rayon pool when parallelism is enabled and
/// there is more than one entry.  A failing copy never affects its siblings:
/// each failure becomes one line on `warnings`, written in catalog order once
/// the whole batch has settled.
///
/// Returns the number of entries **attempted**, which is always
/// `entries.len()` regardless of how many copies succeeded.
pub(super) fn copy_group(
    deployer: &Deployer,
    source_root: &Path,
    target_root: &Path,
    entries: &[ResourceEntry],
    warnings: &dyn Sink,
) -> usize {
    let copy = |entry: &ResourceEntry| copy_entry(deployer, source_root, target_root, entry).err();

    let failures: Vec<DeployError> = if deployer.parallel && entries.len() > 1 {
        use rayon::prelude::*;
        deployer.log.debug(&format!(
            "copying {} resources in parallel",
            entries.len()
        ));
        entries.par_iter().filter_map(copy).collect()
    } else {
        entries.iter().filter_map(copy).collect()
    };

    for failure in &failures {
        warnings.write_line(&failure.warning_line());
    }

    entries.len()
}

/// Copy a single entry, classifying any I/O failure.
fn copy_entry(
    deployer: &Deployer,
    source_root: &Path,
    target_root: &Path,
    entry: &ResourceEntry,
) -> Result<(), DeployError> {
    let source = source_root.join(entry.source);
    let target = target_root.join(entry.target);

    deployer.log.debug(&format!(
        "copying generated resource from {} to {}",
        source.display(),
        target.display()
    ));

    deployer.copier.copy(&source, &target).map_err(|e| {
        deployer.log.debug(&format!("{}: {e}", entry.category));
        DeployError::from_copy(&source, &target, e)
    })
}
