// src/version.rs

//! Renders the `--version` line from the metadata captured by `build.rs`.

/// Release tag, e.g. `v1.0.0`.
pub const BUILD_TAG: &str = env!("TXTIDY_BUILD_TAG");
/// Full commit hash the binary was built from.
pub const BUILD_COMMIT: &str = env!("TXTIDY_BUILD_COMMIT");
/// Build time in RFC 3339 format.
pub const BUILD_DATE: &str = env!("TXTIDY_BUILD_DATE");
/// Output of `rustc --version` for the compiler used.
pub const BUILD_TOOLCHAIN: &str = env!("TXTIDY_BUILD_TOOLCHAIN");

/// Returns the single version line, e.g.
/// `txtidy v1.0.0 (0123456789), built with rustc 1.80.0 on 2024-01-01T00:00:00Z`.
pub fn version_line() -> String {
    format_version_line(BUILD_TAG, BUILD_COMMIT, BUILD_TOOLCHAIN, BUILD_DATE)
}

fn format_version_line(tag: &str, commit: &str, toolchain: &str, date: &str) -> String {
    let short_commit = commit.get(..10).unwrap_or(commit);
    format!(
        "txtidy {} ({}), built with {} on {}",
        tag, short_commit, toolchain, date
    )
}
