//! Index command - run the external indexer over groups

use colored::Colorize;

use super::Session;
use crate::{
    TopicTagError,
    indexer::{self, IndexerConfig, IndexerError},
    output,
};

type Result<T> = std::result::Result<T, TopicTagError>;

/// Execute the index command
///
/// Every requested group is attempted even if an earlier one fails; the
/// first failure is returned once all have run.
///
/// # Errors
/// Returns the first `IndexerError` (wrapped in `TopicTagError`) raised by
/// any group.
pub fn execute(
    session: &mut Session,
    names: &[String],
    program: Option<&str>,
    timeout: Option<u64>,
    dry_run: bool,
) -> Result<()> {
    let mut config: IndexerConfig = session.config.indexer.clone();
    if let Some(program) = program {
        config.program = program.to_string();
    }
    if timeout.is_some() {
        config.timeout_secs = timeout;
    }

    if dry_run {
        let names = if names.is_empty() {
            session.registry.selected_names()
        } else {
            names.to_vec()
        };
        for name in &names {
            let group = session.registry.get_mut(name).map_err(IndexerError::from)?;
            group.rescan();
            println!("{}", indexer::build_invocation(group, &config));
        }
        return Ok(());
    }

    let results = if names.is_empty() {
        indexer::index_selected(&mut session.registry, &config)
    } else {
        names
            .iter()
            .map(|name| {
                let result = indexer::index_group(&mut session.registry, name, &config);
                (name.clone(), result)
            })
            .collect()
    };

    if results.is_empty() && !session.quiet {
        println!("No groups selected. Name groups to index or run 'topictag groups select'.");
    }

    let mut first_error = None;
    for (_, result) in results {
        match result {
            Ok(report) => {
                if !session.quiet {
                    println!(
                        "{} {}: indexed {} file(s) into {}",
                        "✓".green(),
                        report.group,
                        report.files,
                        output::format_path(&report.output, session.path_format)
                    );
                }
            }
            Err(e) => {
                eprintln!("{} {e}", "✗".red());
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PathFormat, TopicTagConfig};
    use crate::groups::GroupSpec;
    use crate::testing::TestDir;

    fn session(dir: &TestDir) -> Session {
        let config = TopicTagConfig {
            groups: vec![dir.glob_group("g", "*.txt")],
            ..TopicTagConfig::default()
        };
        Session::new(config, dir.join("c.toml"), PathFormat::Absolute, true)
    }

    #[test]
    fn test_missing_program_surfaces_launch_error() {
        let dir = TestDir::with_files(&["a.txt"]);
        let mut session = session(&dir);
        let err = execute(
            &mut session,
            &["g".to_string()],
            Some("topictag-test-no-such-indexer"),
            None,
            false,
        )
        .unwrap_err();
        assert!(matches!(err, TopicTagError::IndexerError(IndexerError::Launch { .. })));
    }

    #[test]
    fn test_dry_run_does_not_launch() {
        let dir = TestDir::with_files(&["a.txt"]);
        let mut session = session(&dir);
        execute(
            &mut session,
            &["g".to_string()],
            Some("topictag-test-no-such-indexer"),
            None,
            true,
        )
        .unwrap();
        assert!(!dir.join("TAGS").exists());
    }

    #[test]
    fn test_unknown_group_is_same_error_with_and_without_dry_run() {
        let dir = TestDir::new();
        let mut session = session(&dir);
        for dry_run in [false, true] {
            let names = ["ghost".to_string()];
            let err = execute(&mut session, &names, None, None, dry_run).unwrap_err();
            assert!(matches!(err, TopicTagError::IndexerError(IndexerError::Group(_))));
        }
    }

    #[test]
    fn test_no_names_indexes_selected_groups() {
        let dir = TestDir::with_files(&["a.txt"]);
        let config = TopicTagConfig {
            groups: vec![
                GroupSpec {
                    selected: true,
                    ..dir.glob_group("picked", "*.txt")
                },
                dir.glob_group("idle", "*.txt"),
            ],
            ..TopicTagConfig::default()
        };
        let mut session = Session::new(config, dir.join("c.toml"), PathFormat::Absolute, true);
        let err = execute(&mut session, &[], Some("topictag-test-no-such-indexer"), None, false)
            .unwrap_err();
        match err {
            TopicTagError::IndexerError(e) => assert_eq!(e.group(), Some("picked")),
            other => panic!("Expected indexer error, got {other:?}"),
        }
    }

    #[test]
    fn test_nothing_selected_is_ok() {
        let dir = TestDir::new();
        let mut session = session(&dir);
        execute(&mut session, &[], Some("topictag-test-no-such-indexer"), None, false).unwrap();
    }
}
