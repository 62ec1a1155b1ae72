use std::env;
use std::process::Command;

/// Revision baked into `fleetdash_core::VERSION`.
///
/// `FLEETDASH_GIT_SHA` wins when set, for builds from a source archive
/// without a `.git` directory.
fn revision() -> String {
    if let Ok(sha) = env::var("FLEETDASH_GIT_SHA")
        && !sha.trim().is_empty()
    {
        return sha.trim().to_string();
    }
    Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=8"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".into())
}

fn main() {
    println!("cargo:rustc-env=FLEETDASH_GIT_SHA={}", revision());
    println!("cargo:rerun-if-env-changed=FLEETDASH_GIT_SHA");
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");
}
