//! Groups command - inspect and edit group definitions
//!
//! `add`, `remove`, `select` and `deselect` change the session registry and
//! write the matching definition change back to the configuration file, so
//! the next session declares the same groups.

use serde_json::json;

use super::Session;
use crate::{
    TopicTagError,
    cli::{GroupAddArgs, GroupsCommands},
    groups::{FilterSpec, Group, GroupFormat, GroupSpec},
    output,
};

type Result<T> = std::result::Result<T, TopicTagError>;

/// Execute the group management command
///
/// # Errors
/// Returns an error if a named group does not exist, a pattern is invalid,
/// or the configuration cannot be saved.
pub fn execute(session: &mut Session, command: &GroupsCommands) -> Result<()> {
    match command {
        GroupsCommands::List { selected, json } => list(session, *selected, *json),
        GroupsCommands::Show { name, json } => show(session, name, *json),
        GroupsCommands::Add(args) => add(session, args),
        GroupsCommands::Remove { name } => remove(session, name),
        GroupsCommands::Select { name } => set_selected(session, name, true),
        GroupsCommands::Deselect { name } => set_selected(session, name, false),
    }
}

fn list(session: &Session, selected_only: bool, json: bool) -> Result<()> {
    let groups: Vec<&Group> = session
        .registry
        .groups()
        .into_iter()
        .filter(|g| !selected_only || g.selected)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    if groups.is_empty() {
        if !session.quiet {
            println!("No groups defined.");
        }
        return Ok(());
    }

    if !session.quiet {
        println!("Groups (* = selected):");
    }
    for group in groups {
        println!("{}", output::group_summary(group, session.path_format, session.quiet));
    }
    Ok(())
}

fn show(session: &Session, name: &str, json: bool) -> Result<()> {
    let group = session.registry.get(name)?;
    let spec = session.config.groups.iter().rev().find(|s| s.name == name);

    if json {
        let value = json!({
            "group": group,
            "include": spec.map(|s| s.include.to_string()),
            "exclude": spec.and_then(|s| s.exclude.as_ref()).map(ToString::to_string),
            "index_output": group.index_output_path(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if !session.quiet {
        println!("{}", output::group_summary(group, session.path_format, false));
        if let Some(spec) = spec {
            println!("  include: {}", spec.include);
            if let Some(exclude) = &spec.exclude {
                println!("  exclude: {exclude}");
            }
        }
        println!(
            "  index:   {}",
            output::format_path(&group.index_output_path(), session.path_format)
        );
        if !group.index_extra_arguments.is_empty() {
            println!("  indexer arguments: {}", group.index_extra_arguments.join(" "));
        }
        println!("  files:");
    }
    for file in &group.files {
        if session.quiet {
            println!("{}", output::format_path(file, session.path_format));
        } else {
            println!("    {}", output::colorize_path(file, session.path_format));
        }
    }
    Ok(())
}

/// Translate `groups add` arguments into a group spec
///
/// # Errors
/// Returns `TopicTagError::InvalidInput` if no include rule is given.
pub fn spec_from_args(args: &GroupAddArgs) -> Result<GroupSpec> {
    let include = if let Some(glob) = &args.glob {
        FilterSpec::Glob(glob.clone())
    } else if let Some(regex) = &args.regex {
        FilterSpec::Regex { regex: regex.clone() }
    } else if !args.files.is_empty() {
        FilterSpec::List(args.files.clone())
    } else {
        return Err(TopicTagError::InvalidInput(
            "No include rule given. Use --glob, --regex or --file.".into(),
        ));
    };

    let exclude = match (&args.exclude_glob, args.exclude.is_empty()) {
        (Some(glob), _) => Some(FilterSpec::Glob(glob.clone())),
        (None, false) => Some(FilterSpec::List(args.exclude.clone())),
        (None, true) => None,
    };

    Ok(GroupSpec {
        name: args.name.clone(),
        base_directory: args.base.clone(),
        format: GroupFormat::from(args.format.clone()),
        include,
        exclude,
        description: args.description.clone(),
        index_output_file: args.output.clone(),
        index_extra_arguments: args.indexer_args.clone(),
        selected: args.select,
    })
}

fn add(session: &mut Session, args: &GroupAddArgs) -> Result<()> {
    let mut spec = spec_from_args(args)?;
    spec.base_directory = crate::groups::resolve::absolutize(&spec.base_directory);

    let group = session.registry.add_group(spec.clone())?;
    let count = group.files.len();

    session.config.groups.retain(|s| s.name != spec.name);
    session.config.groups.push(spec);
    session.save_config()?;

    if !session.quiet {
        println!("Added group '{}' ({count} file(s))", args.name);
    }
    Ok(())
}

fn remove(session: &mut Session, name: &str) -> Result<()> {
    let registered = session.registry.delete_group(name).is_some();
    let before = session.config.groups.len();
    session.config.groups.retain(|s| s.name != name);
    let declared = before != session.config.groups.len();

    if declared {
        session.save_config()?;
    }
    let existed = registered || declared;

    if !session.quiet {
        if existed {
            println!("Removed group '{name}'");
        } else {
            println!("No group named '{name}'");
        }
    }
    Ok(())
}

fn set_selected(session: &mut Session, name: &str, selected: bool) -> Result<()> {
    if selected {
        session.registry.select(name)?;
    } else {
        session.registry.deselect(name)?;
    }

    for spec in session.config.groups.iter_mut().filter(|s| s.name == name) {
        spec.selected = selected;
    }
    session.save_config()?;

    if !session.quiet {
        let state = if selected { "Selected" } else { "Deselected" };
        println!("{state} group '{name}'");
    }
    Ok(())
}
