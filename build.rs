// build.rs

//! Captures the build metadata printed by `txtidy --version`.
//!
//! Release pipelines inject the values through `TXTIDY_BUILD_TAG`,
//! `TXTIDY_BUILD_COMMIT` and `TXTIDY_BUILD_DATE`. Local builds fall back to
//! the package version, the checked out git commit and the current UTC time.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=TXTIDY_BUILD_TAG");
    println!("cargo:rerun-if-env-changed=TXTIDY_BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=TXTIDY_BUILD_DATE");
    println!("cargo:rerun-if-changed=build.rs");

    let tag = env::var("TXTIDY_BUILD_TAG").unwrap_or_else(|_| {
        format!("v{}", env::var("CARGO_PKG_VERSION").unwrap_or_default())
    });

    let commit = env::var("TXTIDY_BUILD_COMMIT")
        .ok()
        .or_else(|| command_output("git", &["rev-parse", "HEAD"]))
        .unwrap_or_else(|| "0000000000".to_string());

    let date = env::var("TXTIDY_BUILD_DATE")
        .ok()
        .or_else(|| command_output("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]))
        .unwrap_or_else(|| "1970-01-01T00:00:00Z".to_string());

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let toolchain =
        command_output(&rustc, &["--version"]).unwrap_or_else(|| "rustc (unknown)".to_string());

    println!("cargo:rustc-env=TXTIDY_BUILD_TAG={}", tag);
    println!("cargo:rustc-env=TXTIDY_BUILD_COMMIT={}", commit);
    println!("cargo:rustc-env=TXTIDY_BUILD_DATE={}", date);
    println!("cargo:rustc-env=TXTIDY_BUILD_TOOLCHAIN={}", toolchain);
}

/// Runs a command and returns its trimmed stdout, or `None` if it failed.
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
