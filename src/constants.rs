// src/constants.rs

/// Directory names whose subtrees are skipped unless `--all` is given.
pub const DEFAULT_EXCLUDED_DIRS: [&str; 6] = [
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "bower_components",
    "vendor",
];

/// Separator between a file path and its outcome (U+2026, not three dots).
pub const ELLIPSIS: &str = "\u{2026}";

/// UTF-8 byte order mark.
pub const UTF8_BOM: &[u8; 3] = b"\xEF\xBB\xBF";
