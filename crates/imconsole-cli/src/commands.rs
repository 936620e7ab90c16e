//! Subcommands.
//!
//! Mutating commands run through the same [`SubmitControl`] runtime a
//! dashboard view uses; toasts go to the log via [`LogNotifier`]. Query
//! results are written to stdout.

use std::{
    io::{self, Write},
    sync::Arc,
    time::Instant,
};

use clap::{Subcommand, ValueEnum};
use imconsole_app::{
    AliasQuery, AliasesAction, AliasesEvent, AliasesView, DELETE_PHRASE, SortDirection,
    SubmitControl, SubmitPhase, Submission, Teardown, modal,
};
use imconsole_core::{
    LogNotifier, Notifier, Operation, Route, Services,
    lron::{ActionType, Channel, LronCondition, LronConfig},
    ops::FlushTarget,
    queries,
};
use serde_json::Value;

use crate::{error::CliError, host::CliHost};

/// Flush target as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    /// Plain indices.
    Indices,
    /// Data streams.
    DataStreams,
    /// Aliases.
    Aliases,
}

impl From<TargetArg> for FlushTarget {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Indices => Self::Indices,
            TargetArg::DataStreams => Self::DataStreams,
            TargetArg::Aliases => Self::Aliases,
        }
    }
}

fn parse_action(s: &str) -> Result<ActionType, String> {
    ActionType::from_lron_name(s).ok_or_else(|| {
        let names: Vec<_> = ActionType::ALL.iter().map(|a| a.lron_name()).collect();
        format!("unknown action {s:?}, expected one of {}", names.join(", "))
    })
}

fn parse_direction(s: &str) -> Result<SortDirection, String> {
    SortDirection::parse(s).ok_or_else(|| format!("expected asc or desc, got {s:?}"))
}

/// Console subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Flush indices, data streams or aliases. Without names, flush every
    /// open index.
    Flush {
        /// Kind of entity named.
        #[arg(long, value_enum, default_value_t = TargetArg::Indices)]
        target: TargetArg,
        /// Entities to flush.
        items: Vec<String>,
    },

    /// Remove aliases from every index they point at.
    DeleteAliases {
        /// Confirmation phrase; must be exactly `delete`.
        #[arg(long, default_value = "")]
        confirm: String,
        /// Aliases to delete.
        #[arg(required = true)]
        aliases: Vec<String>,
    },

    /// Delete composable index templates.
    DeleteTemplates {
        /// Confirmation phrase; must be exactly `delete`.
        #[arg(long, default_value = "")]
        confirm: String,
        /// Templates to delete.
        #[arg(required = true)]
        templates: Vec<String>,
    },

    /// List aliases grouped by name.
    Aliases {
        /// Start from a saved query string (`from=0&search=...`).
        #[arg(long)]
        query: Option<String>,
        /// Alias name prefix.
        #[arg(long)]
        search: Option<String>,
        /// Zero-based page.
        #[arg(long)]
        page: Option<usize>,
        /// Rows per page.
        #[arg(long)]
        size: Option<usize>,
        /// Column to sort by.
        #[arg(long)]
        sort_field: Option<String>,
        /// Sort direction (asc, desc).
        #[arg(long, value_parser = parse_direction)]
        sort_direction: Option<SortDirection>,
    },

    /// Show the default notification config for an action type.
    Lron {
        /// Action type (reindex, split, shrink, open, forcemerge).
        #[arg(value_parser = parse_action)]
        action: ActionType,
    },

    /// Attach notification channels to a running task.
    AssociateLron {
        /// Task id (`node:task`).
        task_id: String,
        /// Channel id to notify. Repeatable.
        #[arg(long = "channel")]
        channels: Vec<String>,
        /// Notify when the task succeeds.
        #[arg(long)]
        on_success: bool,
        /// Notify when the task fails.
        #[arg(long)]
        on_failure: bool,
    },

    /// Show a composable index template prepared for editing.
    Template {
        /// Template name.
        name: String,
    },

    /// List templates that can back a data stream.
    DataStreamTemplates,

    /// Create a data stream.
    CreateDataStream {
        /// Data stream name.
        name: String,
    },
}

/// Run one subcommand.
pub async fn run(command: Command, services: &Services) -> Result<(), CliError> {
    let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier);

    match command {
        Command::Flush { target, items } => {
            submit(modal::flush(target.into(), items), None, services, notifier).await
        },
        Command::DeleteAliases { confirm, aliases } => {
            submit(modal::delete_aliases(aliases), Some(confirm), services, notifier).await
        },
        Command::DeleteTemplates { confirm, templates } => {
            submit(modal::delete_templates(templates), Some(confirm), services, notifier).await
        },
        Command::CreateDataStream { name } => {
            submit(modal::create_data_stream(name), None, services, notifier).await
        },
        Command::Aliases { query, search, page, size, sort_field, sort_direction } => {
            let mut parsed = query.as_deref().map(AliasQuery::from_query_string).unwrap_or_default();
            if let Some(search) = search {
                parsed.search = search;
            }
            if let Some(page) = page {
                parsed.from = page;
            }
            if let Some(size) = size.filter(|s| *s > 0) {
                parsed.size = size;
            }
            if let Some(field) = sort_field {
                parsed.sort_field = field;
            }
            if let Some(direction) = sort_direction {
                parsed.sort_direction = direction;
            }
            list_aliases(parsed, services, notifier.as_ref()).await
        },
        Command::Lron { action } => {
            let list = queries::get_lron_config(services, action).await;
            let list = list.into_result().map_err(|e| {
                notifier.add_danger(&e);
                CliError::Failed(e)
            })?;
            print_json(&serde_json::to_value(list)?)
        },
        Command::AssociateLron { task_id, channels, on_success, on_failure } => {
            let config = LronConfig {
                lron_condition: LronCondition { success: on_success, failure: on_failure },
                channels: channels.into_iter().map(|id| Channel { id }).collect(),
                ..LronConfig::default()
            };
            if queries::associate_with_task(services, notifier.as_ref(), &task_id, config).await {
                writeln!(io::stdout().lock(), "ok")?;
                Ok(())
            } else {
                Err(CliError::Failed(format!("could not associate task {task_id}")))
            }
        },
        Command::Template { name } => {
            let template = queries::get_template(services, notifier.as_ref(), &name).await;
            print_json(&template.into_result().map_err(CliError::Failed)?)
        },
        Command::DataStreamTemplates => {
            let templates = queries::get_data_stream_templates(services).await;
            let mut out = io::stdout().lock();
            for template in templates {
                writeln!(out, "{}", template.name)?;
            }
            Ok(())
        },
    }
}

/// Run a confirm control to completion.
async fn submit<O: Operation>(
    submission: Submission<O>,
    confirmation: Option<String>,
    services: &Services,
    notifier: Arc<dyn Notifier>,
) -> Result<(), CliError> {
    let control = SubmitControl::new(
        submission,
        CliHost,
        Some(services.clone()),
        notifier,
        Teardown::new(),
    );

    if let Some(text) = confirmation {
        control.input(text).await;
    }
    if !control.can_confirm().await {
        return Err(CliError::ConfirmationRequired(DELETE_PHRASE));
    }

    control.confirm().await;

    match control.phase().await {
        SubmitPhase::Succeeded => {
            writeln!(io::stdout().lock(), "ok")?;
            Ok(())
        },
        SubmitPhase::Failed { error } => Err(CliError::Failed(error)),
        phase => Err(CliError::Failed(format!("submission ended in {phase:?}"))),
    }
}

/// Load one page of aliases and print it.
async fn list_aliases(
    query: AliasQuery,
    services: &Services,
    notifier: &dyn Notifier,
) -> Result<(), CliError> {
    let mut view = AliasesView::new(query);
    let mut pending = view.handle(AliasesEvent::Mount { now: Instant::now() });
    let mut failure = None;

    while !pending.is_empty() {
        for action in std::mem::take(&mut pending) {
            match action {
                AliasesAction::Render => {},
                AliasesAction::SyncQuery(query) => tracing::debug!(%query, "aliases query"),
                AliasesAction::NotifyDanger(message) => {
                    notifier.add_danger(&message);
                    failure = Some(message);
                },
                AliasesAction::Fetch { seq, request } => {
                    let result = services.call(Route::Direct, request).await;
                    pending.extend(view.handle(AliasesEvent::Loaded { seq, result }));
                },
            }
        }
    }

    if let Some(message) = failure {
        return Err(CliError::Failed(message));
    }

    let mut out = io::stdout().lock();
    for group in view.rows() {
        let write_index = group.first.extra.get("is_write_index").and_then(Value::as_str);
        writeln!(out, "{}\t{}\t{}", group.alias, group.indices.join(","), write_index.unwrap_or("-"))?;
    }
    writeln!(out, "{}", page_summary(view.query(), view.total()))?;
    Ok(())
}

/// One-based page position and the number of matching aliases.
fn page_summary(query: &AliasQuery, total: usize) -> String {
    let pages = total.div_ceil(query.size.max(1)).max(1);
    format!("page {} of {pages}, {total} aliases", query.from + 1)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser, Debug)]
    struct Wrapper {
        #[command(subcommand)]
        command: Command,
    }

    fn parse(args: &[&str]) -> Command {
        let mut argv = vec!["imconsole"];
        argv.extend_from_slice(args);
        Wrapper::parse_from(argv).command
    }

    #[test]
    fn flush_defaults_to_indices() {
        match parse(&["flush", "a", "b"]) {
            Command::Flush { target, items } => {
                assert_eq!(target, TargetArg::Indices);
                assert_eq!(items, vec!["a", "b"]);
            },
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            parse(&["flush", "--target", "data-streams"]),
            Command::Flush { target: TargetArg::DataStreams, .. }
        ));
    }

    #[test]
    fn lron_action_names() {
        assert!(matches!(parse(&["lron", "forcemerge"]), Command::Lron {
            action: ActionType::ForceMerge
        }));
        assert!(Wrapper::try_parse_from(["imconsole", "lron", "delete"]).is_err());
    }

    #[test]
    fn delete_aliases_needs_names() {
        assert!(Wrapper::try_parse_from(["imconsole", "delete-aliases", "--confirm", "delete"]).is_err());
    }

    #[test]
    fn delete_templates_parses() {
        assert!(matches!(
            parse(&["delete-templates", "--confirm", "delete", "t1", "t2"]),
            Command::DeleteTemplates { confirm, templates }
                if confirm == "delete" && templates == ["t1", "t2"]
        ));
    }

    #[test]
    fn page_summary_is_one_based() {
        let query = AliasQuery::default();
        assert_eq!(page_summary(&query, 45), "page 1 of 3, 45 aliases");
        assert_eq!(page_summary(&AliasQuery { from: 2, ..query.clone() }, 45), "page 3 of 3, 45 aliases");
        assert_eq!(page_summary(&query, 0), "page 1 of 1, 0 aliases");
    }

    #[test]
    fn sort_direction_is_validated() {
        assert!(matches!(parse(&["aliases", "--sort-direction", "asc"]), Command::Aliases {
            sort_direction: Some(SortDirection::Asc),
            ..
        }));
        assert!(Wrapper::try_parse_from(["imconsole", "aliases", "--sort-direction", "up"]).is_err());
    }
}
