// tests/library_api.rs

mod common;

use common::create_file;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};
use txtidy::errors::Error;
use txtidy::{run, tidy, tidy_tree, CancellationToken, ConfigBuilder, RunSummary};

// --- Test Harness for reducing boilerplate ---

/// Holds a temporary root directory for a single library API test.
struct TestHarness {
    _temp_dir: TempDir,
    root: PathBuf,
    token: CancellationToken,
}

impl TestHarness {
    fn new() -> Self {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
            token: CancellationToken::new(),
        }
    }

    fn file(&self, path: &str, content: &[u8]) {
        create_file(&self.root, path, content).unwrap();
    }

    fn read(&self, path: &str) -> Vec<u8> {
        fs::read(self.root.join(path)).unwrap()
    }

    /// A builder rooted at the harness directory.
    fn builder(&self, patterns: &[&str]) -> ConfigBuilder {
        ConfigBuilder::new()
            .root_dir(&self.root)
            .patterns(patterns.iter().map(|p| p.to_string()).collect())
    }

    /// Runs with `builder` and returns the summary and captured output.
    fn run(&self, builder: ConfigBuilder) -> (RunSummary, String) {
        let config = builder.build().unwrap();
        let mut out = Vec::<u8>::new();
        let summary = run(&config, &self.token, &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }
}

// --- Tidy scenarios ---

#[test]
fn test_scenario_crlf() {
    assert_eq!(tidy(b"hello\r\nworld\r\n"), b"hello\nworld\n");
}

#[test]
fn test_scenario_blank_lines_and_trailing_whitespace() {
    assert_eq!(tidy(b"  \n\nhello   \nworld\t\n\n\n"), b"hello\nworld\n");
}

#[test]
fn test_scenario_bom() {
    let once = tidy(b"\xEF\xBB\xBFhi\n");
    assert_eq!(once, b"hi\n");
    assert_eq!(tidy(&once), b"hi\n");
}

#[test]
fn test_scenario_empty() {
    assert_eq!(tidy(b""), b"\n");
}

#[test]
fn test_scenario_clean_file_not_rewritten() {
    let h = TestHarness::new();
    h.file("fine.txt", b"already\nfine\n");
    let before = fs::metadata(h.root.join("fine.txt")).unwrap().modified().unwrap();

    let (summary, output) = h.run(h.builder(&["*.txt"]));

    assert_eq!(tidy(b"already\nfine\n"), b"already\nfine\n");
    assert_eq!(summary.matched, 1);
    assert_eq!(summary.unchanged, 1);
    assert_eq!(summary.fixed, 0);
    assert!(!output.contains("fixed."));
    assert_eq!(h.read("fine.txt"), b"already\nfine\n");
    assert_eq!(
        fs::metadata(h.root.join("fine.txt")).unwrap().modified().unwrap(),
        before
    );
}

#[test]
fn test_double_bom_keeps_second() {
    assert_eq!(tidy(b"\xEF\xBB\xBF\xEF\xBB\xBFx"), b"\xEF\xBB\xBFx\n");
}

#[test]
fn test_unicode_whitespace_trimmed_at_ends_only() {
    // NBSP and ideographic space around the content, NBSP inside it.
    let input = "\u{00A0}\u{3000}\nkeep\u{00A0}inner\n\u{3000}".as_bytes();
    assert_eq!(tidy(input), "keep\u{00A0}inner\n".as_bytes());
}

#[test]
fn test_invalid_utf8_stops_trimming() {
    assert_eq!(tidy(b"\xFF  data \n\n"), b"\xFF  data\n");
}

// --- Traversal through the library ---

#[test]
fn test_tree_scenario() {
    let h = TestHarness::new();
    h.file("a.txt", b"a  \r\n");
    h.file("sub/.git/config", b"c  \r\n");
    h.file("sub/b.txt", b"b\n");

    let (summary, output) = h.run(h.builder(&["*.txt"]));

    assert_eq!(
        summary,
        RunSummary {
            matched: 2,
            fixed: 1,
            unchanged: 1,
            errors: 0
        }
    );
    assert_eq!(
        output,
        format!("{} \u{2026} fixed.\n", h.root.join("a.txt").display())
    );
    assert_eq!(h.read("a.txt"), b"a\n");
    assert_eq!(h.read("sub/b.txt"), b"b\n");
    assert_eq!(h.read("sub/.git/config"), b"c  \r\n");
}

#[test]
fn test_custom_excluded_dirs() {
    let h = TestHarness::new();
    h.file("build/out.txt", b"o  ");
    h.file(".git/keep.txt", b"k  ");

    let builder = h
        .builder(&["*.txt"])
        .excluded_dirs(vec!["build".to_string()]);
    let (summary, _) = h.run(builder);

    assert_eq!(summary.fixed, 1);
    assert_eq!(h.read("build/out.txt"), b"o  ");
    // The default list was replaced, so .git is walked.
    assert_eq!(h.read(".git/keep.txt"), b"k\n");
}

#[test]
fn test_visit_all_overrides_exclusions() {
    let h = TestHarness::new();
    h.file("node_modules/m.txt", b"m  ");

    let (summary, _) = h.run(h.builder(&["*.txt"]).visit_all(true));

    assert_eq!(summary.fixed, 1);
    assert_eq!(h.read("node_modules/m.txt"), b"m\n");
}

#[test]
fn test_multiple_patterns_any_match() {
    let h = TestHarness::new();
    h.file("a.md", b"a ");
    h.file("b.rs", b"b ");
    h.file("c.toml", b"c ");

    let (summary, _) = h.run(h.builder(&["*.md", "*.rs"]));

    assert_eq!(summary.matched, 2);
    assert_eq!(h.read("c.toml"), b"c ");
}

#[test]
fn test_character_class_pattern() {
    let h = TestHarness::new();
    h.file("v1.txt", b"1 ");
    h.file("v2.txt", b"2 ");
    h.file("vx.txt", b"x ");

    let (summary, _) = h.run(h.builder(&["v[0-9].txt"]));

    assert_eq!(summary.fixed, 2);
    assert_eq!(h.read("vx.txt"), b"x ");
}

#[test]
fn test_cancelled_before_start() {
    let h = TestHarness::new();
    h.file("a.txt", b"a  ");
    h.token.cancel();

    let config = h.builder(&["*.txt"]).build().unwrap();
    let result = tidy_tree(&config, &h.token, &mut Vec::<u8>::new());

    assert!(matches!(result, Err(Error::Interrupted)));
    assert_eq!(h.read("a.txt"), b"a  ");
}

// --- Configuration errors ---

#[test]
fn test_build_without_patterns_fails() {
    let h = TestHarness::new();
    let result = h.builder(&[]).build();
    assert!(matches!(result, Err(Error::NoPatterns)));
}

#[test]
fn test_build_with_invalid_pattern_fails() {
    let h = TestHarness::new();
    let result = h.builder(&["*.txt", "[z-"]).build();
    match result {
        Err(Error::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "[z-"),
        other => panic!("expected InvalidPattern, got {:?}", other),
    }
}

#[test]
fn test_build_with_missing_root_fails() {
    let h = TestHarness::new();
    let result = ConfigBuilder::new()
        .root_dir(h.root.join("missing"))
        .patterns(vec!["*".to_string()])
        .build();
    assert!(matches!(result, Err(Error::RootNotFound(_))));
}
