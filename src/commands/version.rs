//! Command: print version information.

/// Version string embedded by `build.rs`, or the crate version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("NATIVE_RES_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the native-res version to stdout.
#[allow(clippy::print_stdout)]
pub fn run() {
    println!("native-res {}", version());
}
