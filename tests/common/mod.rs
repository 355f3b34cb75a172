// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed workspace holding a generated-assets
// tree and native project directories, plus a fluent builder so each test
// can choose which generated files exist.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use native_res::catalog;
use native_res::deploy::NativeProjectConfig;
use native_res::platform::Platform;

/// Deterministic file content for a generated asset, unique per source path.
pub fn asset_bytes(relative: &str) -> Vec<u8> {
    format!("PNG:{relative}").into_bytes()
}

/// An isolated workspace backed by a [`tempfile::TempDir`].
///
/// Layout:
/// - `gen/`      generated assets (`gen/ios/icon/...`, `gen/android/...`)
/// - `ios/`      iOS project root
/// - `android/`  Android project root
pub struct IntegrationTestContext {
    /// Temporary directory holding the whole workspace.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create an empty workspace.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Workspace root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Generated-assets root.
    pub fn resources_dir(&self) -> PathBuf {
        self.root_path().join("gen")
    }

    /// Project config pointing at `<root>/<platform id>`.
    pub fn project(&self, platform: Platform) -> NativeProjectConfig {
        NativeProjectConfig::new(self.project_root(platform))
    }

    /// Project root for `platform` inside the workspace.
    pub fn project_root(&self, platform: Platform) -> PathBuf {
        self.root_path().join(platform.id())
    }

    /// Absolute path of a generated source file.
    pub fn source_path(&self, group_dir: &str, file: &str) -> PathBuf {
        self.resources_dir().join(group_dir).join(file)
    }

    /// Write one generated asset.
    pub fn write_asset(&self, group_dir: &str, file: &str) {
        let path = self.source_path(group_dir, file);
        std::fs::create_dir_all(path.parent().expect("asset parent")).expect("create asset dir");
        std::fs::write(&path, asset_bytes(&format!("{group_dir}/{file}"))).expect("write asset");
    }
}

/// Builder for an [`IntegrationTestContext`] populated from the catalog.
pub struct TestContextBuilder {
    platforms: Vec<Platform>,
    omit: Vec<String>,
}

impl TestContextBuilder {
    /// Start with no generated assets.
    pub fn new() -> Self {
        Self {
            platforms: Vec::new(),
            omit: Vec::new(),
        }
    }

    /// Generate every source the catalog lists for `platform`.
    pub fn with_assets_for(mut self, platform: Platform) -> Self {
        self.platforms.push(platform);
        self
    }

    /// Leave out one source, given as `<group dir>/<file>`.
    pub fn without(mut self, relative: &str) -> Self {
        self.omit.push(relative.to_string());
        self
    }

    /// Create the workspace.
    pub fn build(self) -> IntegrationTestContext {
        let ctx = IntegrationTestContext::new();
        for platform in self.platforms {
            for group in catalog::groups(platform) {
                for entry in group.entries {
                    let relative = format!("{}/{}", group.source_dir, entry.source);
                    if !self.omit.contains(&relative) {
                        ctx.write_asset(group.source_dir, entry.source);
                    }
                }
            }
        }
        ctx
    }
}
