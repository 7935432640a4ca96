//! Integration tests for topictag
//!
//! These tests lay out real files in temporary directories and drive the
//! library the way the CLI does: config to registry, registry to indexer,
//! file text to tag navigation.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use topictag::{
    config::TopicTagConfig,
    groups::{FilterSpec, GroupSpec, Registry},
    indexer::{self, IndexerConfig, IndexerError},
    navigate::{self, NavigateError, SearchOptions},
    tags::{self, TagIndex},
};

/// Helper function to create a fixture file
fn create_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn txt_group(dir: &Path) -> GroupSpec {
    GroupSpec {
        name: "notes".into(),
        base_directory: dir.to_path_buf(),
        include: FilterSpec::Glob("*.txt".into()),
        exclude: Some(FilterSpec::List(vec!["skip.txt".into()])),
        ..GroupSpec::default()
    }
}

#[test]
fn test_group_resolves_included_minus_excluded() {
    let dir = TempDir::new().unwrap();
    create_file(dir.path(), "a.txt", "");
    create_file(dir.path(), "b.txt", "");
    create_file(dir.path(), "skip.txt", "");
    create_file(dir.path(), "c.md", "");

    let mut registry = Registry::new();
    let group = registry.add_group(txt_group(dir.path())).unwrap();

    assert_eq!(group.files, vec![dir.path().join("a.txt"), dir.path().join("b.txt")]);
    assert!(group.files.iter().all(|f| f.is_absolute()));
}

#[test]
fn test_rescan_reflects_filesystem_changes() {
    let dir = TempDir::new().unwrap();
    create_file(dir.path(), "a.txt", "");

    let mut registry = Registry::new();
    registry.add_group(txt_group(dir.path())).unwrap();
    create_file(dir.path(), "b.txt", "");
    fs::remove_file(dir.path().join("a.txt")).unwrap();

    let files = registry.scan_group("notes").unwrap().to_vec();
    assert_eq!(files, vec![dir.path().join("b.txt")]);
}

#[test]
fn test_config_round_trip_declares_groups() {
    let dir = TempDir::new().unwrap();
    create_file(dir.path(), "a.txt", "");
    let config_path = dir.path().join("config.toml");

    let config = TopicTagConfig {
        groups: vec![GroupSpec {
            selected: true,
            ..txt_group(dir.path())
        }],
        ..TopicTagConfig::default()
    };
    config.save_to(&config_path).unwrap();

    let loaded = TopicTagConfig::load_from(&config_path).unwrap();
    assert_eq!(loaded, config);

    let registry = loaded.registry();
    assert_eq!(registry.selected_names(), vec!["notes".to_string()]);
    assert_eq!(registry.get("notes").unwrap().files.len(), 1);
}

#[test]
fn test_handwritten_config_filter_forms() {
    let dir = TempDir::new().unwrap();
    create_file(dir.path(), "one.org", "");
    create_file(dir.path(), "two.org", "");
    create_file(dir.path(), "readme.md", "");
    let config_path = create_file(
        dir.path(),
        "config.toml",
        &format!(
            r#"
quiet = true

[indexer]
program = "ctags-universal"
timeout_secs = 5

[[groups]]
name = "org"
base_directory = "{base}"
format = "org"
include = {{ regex = "\\.org$" }}
exclude = "two.*"

[[groups]]
name = "pinned"
base_directory = "{base}"
include = ["readme.md", "./readme.md", "missing.md"]
"#,
            base = dir.path().display()
        ),
    );

    let config = TopicTagConfig::load_from(&config_path).unwrap();
    assert!(config.quiet);
    assert_eq!(config.indexer.program, "ctags-universal");
    assert_eq!(config.indexer.timeout_secs, Some(5));

    let registry = config.registry();
    assert_eq!(registry.get("org").unwrap().files, vec![dir.path().join("one.org")]);
    assert_eq!(
        registry.get("pinned").unwrap().files,
        vec![dir.path().join("readme.md"), dir.path().join("missing.md")]
    );
}

#[test]
fn test_invalid_group_in_config_does_not_block_others() {
    let dir = TempDir::new().unwrap();
    create_file(dir.path(), "a.txt", "");
    let config_path = create_file(
        dir.path(),
        "config.toml",
        r#"
[[groups]]
name = "bad"
base_directory = "."
include = { regex = "(" }

[[groups]]
name = "notes"
base_directory = "."
include = "*.txt"
"#,
    );

    let config = TopicTagConfig::load_from(&config_path).unwrap();
    assert_eq!(config.groups.len(), 2);

    let registry = config.registry();
    assert_eq!(registry.names(), vec!["notes"]);
    assert_eq!(registry.get("notes").unwrap().files, vec![dir.path().join("a.txt")]);
}

#[test]
fn test_missing_indexer_is_launch_error() {
    let dir = TempDir::new().unwrap();
    create_file(dir.path(), "a.txt", "");

    let mut registry = Registry::new();
    registry.add_group(txt_group(dir.path())).unwrap();
    let config = IndexerConfig {
        program: "topictag-integration-no-such-indexer".into(),
        timeout_secs: None,
    };

    let err = indexer::index_group(&mut registry, "notes", &config).unwrap_err();
    assert!(matches!(err, IndexerError::Launch { .. }));
    assert_eq!(err.group(), Some("notes"));
}

#[cfg(unix)]
#[test]
fn test_indexer_exit_status_decides_success() {
    let dir = TempDir::new().unwrap();
    create_file(dir.path(), "a.txt", "");

    let mut registry = Registry::new();
    registry
        .add_group(GroupSpec {
            selected: true,
            ..txt_group(dir.path())
        })
        .unwrap();

    let ok = IndexerConfig {
        program: "true".into(),
        timeout_secs: None,
    };
    let report = indexer::index_group(&mut registry, "notes", &ok).unwrap();
    assert_eq!(report.files, 1);
    assert_eq!(report.output, dir.path().join("TAGS"));

    let failing = IndexerConfig {
        program: "false".into(),
        timeout_secs: None,
    };
    let results = indexer::index_selected(&mut registry, &failing);
    assert_eq!(results.len(), 1);
    assert!(matches!(results[0].1, Err(IndexerError::Failed { .. })));
}

#[cfg(unix)]
#[test]
fn test_indexer_receives_output_rule_and_files() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    create_file(dir.path(), "a.txt", "<: alpha :>");
    let script = create_file(
        dir.path(),
        "fake-etags.sh",
        concat!(
            "#!/bin/sh\n",
            "for a in \"$@\"; do case \"$a\" in --output=*) out=\"${a#--output=}\";; esac; done\n",
            "printf '%s\\n' \"$@\" > \"$out\"\n",
        ),
    );
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let mut registry = Registry::new();
    registry
        .add_group(GroupSpec {
            index_output_file: Some("topics.idx".into()),
            index_extra_arguments: vec!["--append".into()],
            ..txt_group(dir.path())
        })
        .unwrap();
    let config = IndexerConfig {
        program: script.display().to_string(),
        timeout_secs: Some(10),
    };

    let report = indexer::index_group(&mut registry, "notes", &config).unwrap();
    let written = fs::read_to_string(&report.output).unwrap();
    let lines: Vec<&str> = written.lines().collect();

    assert_eq!(lines[0], format!("--output={}", dir.path().join("topics.idx").display()));
    assert_eq!(lines[1], r"--regex=/<:[ \t]+\([^ \t\r\n]+\)[ \t]+:>/\1/");
    assert_eq!(lines[2], "--append");
    assert_eq!(lines[3], dir.path().join("a.txt").display().to_string());
}

#[test]
fn test_tag_listing_and_cache() {
    let text = "// <: parser-state :>\nfn parse() {}\n// <: io :> <: parser-state :>\n";
    assert_eq!(tags::find_all_tags(text), vec!["parser-state", "io", "parser-state"]);

    let mut index = TagIndex::new();
    assert_eq!(index.rescan("buffer", text), ["io", "parser-state"]);
    assert_eq!(index.rescan("buffer", "<: other :>"), ["other"]);
    assert_eq!(index.len(), 1);
}

#[test]
fn test_navigation_wraps_in_both_directions() {
    let text = "<: foo :> middle <: bar :> end <: foo :>";
    let second = text.rfind("<: foo").unwrap();

    let span = navigate::next_occurrence(text, 1, "foo", SearchOptions::default())
        .unwrap()
        .unwrap();
    assert_eq!(span.start, second);

    let span = navigate::next_occurrence(text, text.len(), "foo", SearchOptions::default())
        .unwrap()
        .unwrap();
    assert_eq!(span.start, 0);

    let span = navigate::previous_occurrence(text, 0, "foo", SearchOptions::default())
        .unwrap()
        .unwrap();
    assert_eq!(span.start, second);
}

#[test]
fn test_navigation_error_modes() {
    let text = "<: foo :>";
    let strict = SearchOptions::default();
    assert!(matches!(
        navigate::next_occurrence(text, 0, "bar", strict),
        Err(NavigateError::NoMatch { .. })
    ));
    assert_eq!(
        navigate::next_occurrence(text, 0, "bar", SearchOptions::lenient()).unwrap(),
        None
    );

    let no_wrap = SearchOptions {
        no_wrap: true,
        no_error: true,
        bound: None,
    };
    assert_eq!(navigate::next_occurrence(text, 5, "foo", no_wrap).unwrap(), None);
}

#[test]
fn test_choose_prefers_current_line() {
    let text = "<: early :>\nsome text <: here :>\nmore\n";
    let cursor = text.find("some").unwrap();
    let line = navigate::line_bounds(text, cursor);
    assert_eq!(navigate::auto_choose_tag(text, cursor, line), Some("here".to_string()));

    let cursor = text.find("more").unwrap();
    let line = navigate::line_bounds(text, cursor);
    assert_eq!(navigate::auto_choose_tag(text, cursor, line), Some("here".to_string()));
}
