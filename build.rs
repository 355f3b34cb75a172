//! Build script: embeds the crate version (from `NATIVE_RES_VERSION` or `git describe`).

use std::process::Command;

fn main() {
    // NATIVE_RES_VERSION wins when set (release builds), otherwise ask git.
    if let Ok(version) = std::env::var("NATIVE_RES_VERSION") {
        println!("cargo:rustc-env=NATIVE_RES_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=NATIVE_RES_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=NATIVE_RES_VERSION");
}
