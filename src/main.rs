//! Topictag CLI application entry point
//!
//! Command-line front end for inline topic tags: define groups of files,
//! refresh them, run the etags-compatible indexer over them, and locate tag
//! occurrences inside a file.
//!
//! # Usage
//!
//! ```bash
//! # Define a group and select it
//! topictag groups add notes --base ~/notes --glob '*.org' --exclude scratch.org --select
//!
//! # Rebuild the TAGS file of every selected group
//! topictag index
//!
//! # Where is the next <: parser-state :> after byte 120?
//! topictag next src/parser.rs parser-state --at 120
//!
//! # Quiet mode (only output results)
//! topictag -q tags notes.org
//! ```
//!
//! # Configuration
//!
//! Groups are declared in `~/.config/topictag/config.toml` on Linux (see
//! `topictag config path`). A missing file means no groups; `topictag config
//! init` writes a starter file.

use topictag::{
    TopicTagError,
    cli::{Cli, Commands},
    commands::{self, Session},
    config::TopicTagConfig,
    logging,
};

type Result<T> = std::result::Result<T, TopicTagError>;

/// Main entry point for the topictag application
///
/// Parses command-line arguments, loads configuration, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `TopicTagError` if configuration loading fails or any command
/// handler returns an error.
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    if let Commands::Config { command } = &cli.command {
        return commands::config(command, cli.config.as_deref(), cli.quiet);
    }

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => TopicTagConfig::config_path()?,
    };
    let config = TopicTagConfig::load_from(&config_path)?;

    let quiet = cli.quiet || config.quiet;
    let path_format = cli.path_format(config.path_format);
    let mut session = Session::new(config, config_path, path_format, quiet);

    match &cli.command {
        Commands::Groups { command } => commands::groups(&mut session, command)?,
        Commands::Scan { groups } => commands::scan(&mut session, groups)?,
        Commands::Index {
            groups,
            program,
            timeout,
            dry_run,
        } => commands::index(&mut session, groups, program.as_deref(), *timeout, *dry_run)?,
        Commands::Tags { file, all } => commands::tags(&mut session, file, *all)?,
        Commands::Next(args) => commands::navigate::next(&session, args)?,
        Commands::Prev(args) => commands::navigate::prev(&session, args)?,
        Commands::Choose { file, at } => commands::navigate::choose(&session, file, *at)?,
        Commands::Seek { group, tag } => commands::navigate::seek(&session, group, tag)?,
        Commands::Config { .. } => unreachable!(),
    }

    Ok(())
}
