//! External indexer driver
//!
//! Runs an etags-compatible program over a group's files so topic tags show
//! up in the generated index next to ordinary symbols. The invocation is
//!
//! ```text
//! <program> --output=<index file> --regex=<tag rule> [extra args...] [files...]
//! ```
//!
//! The program's standard streams are discarded; only its exit status
//! matters.

pub mod error;

pub use error::IndexerError;

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::groups::{Group, Registry};
use crate::patterns::tags::indexer_rule;

/// Program used when none is configured
pub const DEFAULT_PROGRAM: &str = "etags";

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Indexer settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexerConfig {
    /// Executable name or path
    #[serde(default = "default_program")]
    pub program: String,

    /// Kill the indexer after this many seconds; unset waits forever
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            timeout_secs: None,
        }
    }
}

impl IndexerConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// A fully built indexer command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Outcome of a successful indexer run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexReport {
    pub group: String,
    pub files: usize,
    pub output: PathBuf,
}

/// Build the command line for `group` from its current file snapshot.
#[must_use]
pub fn build_invocation(group: &Group, config: &IndexerConfig) -> Invocation {
    let mut output = OsString::from("--output=");
    output.push(group.index_output_path());

    let mut args = Vec::with_capacity(2 + group.index_extra_arguments.len() + group.files.len());
    args.push(output);
    args.push(OsString::from(format!("--regex={}", indexer_rule())));
    args.extend(group.index_extra_arguments.iter().map(OsString::from));
    args.extend(group.files.iter().map(OsString::from));

    Invocation {
        program: config.program.clone(),
        args,
    }
}

/// Rescan `group` and run the indexer over its files.
///
/// # Errors
/// * Returns `IndexerError::Launch` if the program cannot be started.
/// * Returns `IndexerError::Failed` if it exits unsuccessfully.
/// * Returns `IndexerError::Timeout` if it outlives the configured timeout.
/// * Returns `IndexerError::Wait` if its status cannot be collected.
pub fn run_indexer(group: &mut Group, config: &IndexerConfig) -> Result<IndexReport, IndexerError> {
    group.rescan();
    let invocation = build_invocation(group, config);
    tracing::info!(
        group = %group.name,
        files = group.files.len(),
        program = %invocation.program,
        "running indexer"
    );
    tracing::debug!(command = %invocation, "indexer command line");

    let status = execute(&invocation, &group.name, config.timeout())?;
    if !status.success() {
        tracing::warn!(group = %group.name, %status, "indexer failed");
        return Err(IndexerError::Failed {
            group: group.name.clone(),
            status,
        });
    }

    Ok(IndexReport {
        group: group.name.clone(),
        files: group.files.len(),
        output: group.index_output_path(),
    })
}

/// Run the indexer for the named group.
///
/// # Errors
/// Returns `IndexerError::Group` if the group is unknown, otherwise the
/// errors of [`run_indexer`].
pub fn index_group(
    registry: &mut Registry,
    name: &str,
    config: &IndexerConfig,
) -> Result<IndexReport, IndexerError> {
    run_indexer(registry.get_mut(name)?, config)
}

/// Run the indexer for every selected group, in name order.
///
/// A failing group does not stop the remaining ones.
pub fn index_selected(
    registry: &mut Registry,
    config: &IndexerConfig,
) -> Vec<(String, Result<IndexReport, IndexerError>)> {
    registry
        .selected_names()
        .into_iter()
        .map(|name| {
            let result = index_group(registry, &name, config);
            (name, result)
        })
        .collect()
}

fn execute(
    invocation: &Invocation,
    group: &str,
    timeout: Option<Duration>,
) -> Result<ExitStatus, IndexerError> {
    let mut child = Command::new(&invocation.program)
        .args(&invocation.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| IndexerError::Launch {
            group: group.to_string(),
            program: invocation.program.clone(),
            source,
        })?;

    let wait_error = |source| IndexerError::Wait {
        group: group.to_string(),
        source,
    };

    let Some(limit) = timeout else {
        return child.wait().map_err(wait_error);
    };

    let started = Instant::now();
    loop {
        if let Some(status) = child.try_wait().map_err(wait_error)? {
            return Ok(status);
        }
        if started.elapsed() >= limit {
            // Already-exited races are harmless here
            let _ = child.kill();
            let _ = child.wait();
            return Err(IndexerError::Timeout {
                group: group.to_string(),
                after: limit,
            });
        }
        thread::sleep(POLL_INTERVAL);
    }
}
