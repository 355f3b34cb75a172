//! Command: show the resource catalog.

use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;

use crate::catalog::{self, ResourceCategory, ResourceEntry, ResourceKind};
use crate::cli::ListOpts;

/// One catalog row with paths relative to the assets root and project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedEntry {
    /// Role of the image.
    pub category: ResourceCategory,
    /// Selection switch enabling the row.
    pub kind: ResourceKind,
    /// Path under the generated-assets root.
    pub source: String,
    /// Path under the native project root.
    pub target: String,
}

/// Collect the rows selected by `opts`, in catalog order.
#[must_use]
pub fn collect(opts: &ListOpts) -> Vec<ListedEntry> {
    catalog::groups(opts.platform)
        .iter()
        .flat_map(|group| {
            let entries: Vec<&ResourceEntry> = match opts.category {
                Some(c) if c.kind() != group.kind => Vec::new(),
                Some(c) => catalog::entries(opts.platform, c),
                None => group.entries.iter().collect(),
            };
            entries.into_iter().map(move |e| ListedEntry {
                category: e.category,
                kind: group.kind,
                source: format!("{}/{}", group.source_dir, e.source),
                target: format!("{}/{}", group.target_dir, e.target),
            })
        })
        .collect()
}

/// Render the rows selected by `opts` as text or JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(opts: &ListOpts) -> Result<String> {
    let entries = collect(opts);
    if opts.json {
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    let width = entries
        .iter()
        .map(|e| e.category.id().len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for e in &entries {
        writeln!(
            out,
            "{:<width$}  {} -> {}",
            e.category.id(),
            e.source,
            e.target
        )?;
    }
    Ok(out)
}

/// Run the list command.
///
/// # Errors
///
/// Returns an error if the output cannot be rendered.
#[allow(clippy::print_stdout)]
pub fn run(opts: &ListOpts) -> Result<()> {
    let out = render(opts)?;
    if opts.json {
        println!("{out}");
    } else {
        print!("{out}");
    }
    Ok(())
}
