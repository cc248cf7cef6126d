use std::str::FromStr;

use spend_domain::{
    dates::{format_date, parse_date},
    AttributeType, DateWindow, FilterState, FilterUpdate, MetricType,
};

use crate::cli::commands::data::join_or_none;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "sector",
            "Restrict to the given sectors (no values clears)",
            "sector [value...]",
            cmd_sector,
        ),
        CommandEntry::new(
            "category",
            "Restrict to the given categories (no values clears)",
            "category [value...]",
            cmd_category,
        ),
        CommandEntry::new(
            "dates",
            "Set or clear the inclusive date window",
            "dates <start YYYY-MM-DD> <end YYYY-MM-DD> | dates clear",
            cmd_dates,
        ),
        CommandEntry::new(
            "group",
            "Set the grouping attributes (no values groups by all)",
            "group [country|state|city|sector|category...]",
            cmd_group,
        ),
        CommandEntry::new(
            "metrics",
            "Set the metrics to aggregate (no values selects all)",
            "metrics [mySpend|sameStoreSpend|newStoreSpend|lostStoreSpend...]",
            cmd_metrics,
        ),
        CommandEntry::new("filters", "Show the active filters", "filters", cmd_filters),
        CommandEntry::new("reset", "Restore the default filters", "reset", cmd_reset),
    ]
}

fn cmd_sector(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let state = context
        .dashboard
        .update_filters(FilterUpdate::new().sectors(args.iter().copied()));
    report_set("Sector", &state.sector.iter().collect::<Vec<_>>());
    Ok(())
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let state = context
        .dashboard
        .update_filters(FilterUpdate::new().categories(args.iter().copied()));
    report_set("Category", &state.category.iter().collect::<Vec<_>>());
    Ok(())
}

fn report_set(label: &str, values: &[&String]) {
    if values.is_empty() {
        output::success(format!("{label} filter cleared."));
    } else {
        output::success(format!("{label} filter: {}.", join_or_none(values)));
    }
}

fn cmd_dates(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    const USAGE: &str = "dates <start YYYY-MM-DD> <end YYYY-MM-DD> | dates clear";

    match args {
        ["clear"] => {
            context
                .dashboard
                .update_filters(FilterUpdate::new().dates(None, None));
            output::success("Date filter cleared.");
        }
        [start, end] => {
            let start = parse_cli_date(start)?;
            let end = parse_cli_date(end)?;
            context
                .dashboard
                .update_filters(FilterUpdate::new().dates(Some(start), Some(end)));
            match DateWindow::new(start, end) {
                Ok(window) => output::success(format!("Date filter: {window}.")),
                Err(err) => {
                    output::warning(format!("{err}; only records spanning both dates match."))
                }
            }
        }
        _ => return Err(CommandError::usage(USAGE)),
    }
    Ok(())
}

fn parse_cli_date(raw: &str) -> Result<chrono::NaiveDate, CommandError> {
    parse_date(raw).ok_or_else(|| {
        CommandError::InvalidArguments(format!("invalid date `{raw}`; expected YYYY-MM-DD"))
    })
}

fn cmd_group(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let attributes: Vec<AttributeType> = parse_distinct(args)?;
    let state = context
        .dashboard
        .update_filters(FilterUpdate::new().attributes(attributes));
    let labels: Vec<&str> = state
        .effective_attributes()
        .iter()
        .map(|attribute| attribute.label())
        .collect();
    output::success(format!("Grouping by {}.", labels.join(" > ")));
    Ok(())
}

fn cmd_metrics(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let metrics: Vec<MetricType> = parse_distinct(args)?;
    let state = context
        .dashboard
        .update_filters(FilterUpdate::new().metrics(metrics));
    let labels: Vec<&str> = state
        .effective_metrics()
        .iter()
        .map(|metric| metric.label())
        .collect();
    output::success(format!("Metrics: {}.", labels.join(", ")));
    Ok(())
}

/// Parses each argument, rejecting unknown and repeated values.
fn parse_distinct<T>(args: &[&str]) -> Result<Vec<T>, CommandError>
where
    T: FromStr + PartialEq,
    T::Err: std::fmt::Display,
{
    let mut values = Vec::with_capacity(args.len());
    for raw in args {
        let value = raw
            .parse::<T>()
            .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
        if values.contains(&value) {
            return Err(CommandError::InvalidArguments(format!(
                "`{raw}` is listed more than once"
            )));
        }
        values.push(value);
    }
    Ok(values)
}

fn cmd_filters(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let state = context.dashboard.filters();
    output::section("Filters");
    for line in describe_filters(state) {
        output::plain(line);
    }
    output::info(format!(
        "{} active filters; {} of {} records match.",
        state.active_filter_count(),
        context.dashboard.filtered_count(),
        context.dashboard.records().len()
    ));
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.dashboard.reset_filters();
    output::success("Filters reset.");
    Ok(())
}

pub(crate) fn describe_filters(state: &FilterState) -> Vec<String> {
    let bound = |date: Option<chrono::NaiveDate>| {
        date.map(format_date).unwrap_or_else(|| "(open)".into())
    };
    let attributes: Vec<&str> = state
        .effective_attributes()
        .iter()
        .map(|attribute| attribute.key())
        .collect();
    let metrics: Vec<&str> = state
        .effective_metrics()
        .iter()
        .map(|metric| metric.key())
        .collect();
    let sectors: Vec<&String> = state.sector.iter().collect();
    let categories: Vec<&String> = state.category.iter().collect();

    vec![
        format!(
            "Dates:    {} .. {}",
            bound(state.start_date),
            bound(state.end_date)
        ),
        format!("Sector:   {}", join_or_any(&sectors)),
        format!("Category: {}", join_or_any(&categories)),
        format!("Group by: {}", attributes.join(", ")),
        format!("Metrics:  {}", metrics.join(", ")),
    ]
}

fn join_or_any(values: &[&String]) -> String {
    if values.is_empty() {
        "(any)".into()
    } else {
        join_or_none(values)
    }
}
