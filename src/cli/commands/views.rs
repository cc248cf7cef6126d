use spend_core::{SortOrder, TableColumn, TablePage, TableService, TableSort};
use spend_domain::{AttributeType, SummaryData, Trend};

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::formatters::{format_amount, format_field, format_percent};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::{Column, TextTable};

const TABLE_USAGE: &str = "table [column] [asc|desc] [page]";
const GROUP_COLUMN_WIDTH: usize = 48;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Show headline totals for the filtered records",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "table",
            "Show the grouped table, optionally sorted and paged",
            TABLE_USAGE,
            cmd_table,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let Some(user) = context.dashboard.current_user() else {
        output::warning("No user selected.");
        return Ok(());
    };

    output::section(format!("Summary for {}", user.name));
    output::plain(render_summary(
        context.dashboard.summary(),
        &context.config.currency,
    ));
    output::info(format!(
        "{} of {} records match the current filters.",
        context.dashboard.filtered_count(),
        context.dashboard.records().len()
    ));
    Ok(())
}

pub(crate) fn render_summary(summary: &SummaryData, currency: &str) -> String {
    let mut table = TextTable::new(vec![
        Column::left("Metric"),
        Column::right("Current"),
        Column::right("Reference"),
        Column::right("Change"),
        Column::right("% Change"),
        Column::left("Trend"),
    ]);
    for (metric, value) in summary {
        table.push_row(vec![
            metric.card_label().to_string(),
            format_amount(value.current, currency),
            format_amount(value.reference, currency),
            format_amount(value.absolute_change, currency),
            format_percent(value.percent_change),
            Trend::of(value).label().to_string(),
        ]);
    }
    table.render()
}

/// Arguments of the `table` command after parsing.
#[derive(Debug, Default, PartialEq)]
struct TableArgs {
    column: Option<TableColumn>,
    order: Option<SortOrder>,
    page: Option<usize>,
}

fn parse_table_args(args: &[&str]) -> Result<TableArgs, CommandError> {
    let mut parsed = TableArgs::default();
    for arg in args {
        match *arg {
            "asc" => parsed.order = Some(SortOrder::Ascending),
            "desc" => parsed.order = Some(SortOrder::Descending),
            raw if raw.chars().all(|c| c.is_ascii_digit()) => {
                let page: usize = raw.parse().map_err(|_| CommandError::usage(TABLE_USAGE))?;
                if page == 0 {
                    return Err(CommandError::InvalidArguments(
                        "pages are numbered from 1".into(),
                    ));
                }
                parsed.page = Some(page);
            }
            raw => parsed.column = Some(raw.parse()?),
        }
    }
    Ok(parsed)
}

/// Resolves the sort to apply: an explicit order wins, a bare column behaves
/// like a header click, and no column re-applies the previous sort.
fn resolve_sort(current: TableSort, args: &TableArgs) -> TableSort {
    match (args.column, args.order) {
        (Some(column), Some(order)) => TableSort { column, order },
        (Some(column), None) => current.request(column),
        (None, Some(order)) => TableSort { order, ..current },
        (None, None) => current,
    }
}

fn cmd_table(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let args = parse_table_args(args)?;
    let filters = context.dashboard.filters();
    let columns = TableService::columns(&filters.effective_metrics());
    let attributes = filters.effective_attributes();

    let sort = resolve_sort(context.table_sort, &args);
    if !columns.contains(&sort.column) {
        return Err(CommandError::InvalidArguments(format!(
            "column `{}` is not shown; select its metric with `metrics`",
            sort.column
        )));
    }
    context.table_sort = sort;

    let mut rows = TableService::rows(context.dashboard.grouped());
    if rows.is_empty() {
        output::info("No records match the current filters.");
        return Ok(());
    }
    TableService::sort(&mut rows, sort);
    let page = TableService::paginate(
        rows,
        args.page.unwrap_or(1) - 1,
        context.config.rows_per_page,
    );

    output::section(format!("Spend by {}", group_title(&attributes)));
    output::plain(render_table(&columns, &page, sort));
    output::info(page_footer(&page, sort));
    Ok(())
}

fn group_title(attributes: &[AttributeType]) -> String {
    attributes
        .iter()
        .map(|attribute| attribute.label())
        .collect::<Vec<_>>()
        .join(" > ")
}

pub(crate) fn render_table(columns: &[TableColumn], page: &TablePage, sort: TableSort) -> String {
    let headers = columns
        .iter()
        .map(|column| {
            let mut header = column.label();
            if *column == sort.column {
                header.push_str(match sort.order {
                    SortOrder::Ascending => " ▲",
                    SortOrder::Descending => " ▼",
                });
            }
            if column.is_numeric() {
                Column::right(header)
            } else {
                Column::left(header).with_max_width(GROUP_COLUMN_WIDTH)
            }
        })
        .collect();

    let mut table = TextTable::new(headers);
    for row in &page.rows {
        let cells = columns
            .iter()
            .map(|column| match column {
                TableColumn::Group => row.group.clone(),
                TableColumn::Metric { metric, field } => row
                    .value(*metric, *field)
                    .map(|value| format_field(*field, value))
                    .unwrap_or_default(),
            })
            .collect();
        table.push_row(cells);
    }
    table.render()
}

fn page_footer(page: &TablePage, sort: TableSort) -> String {
    let order = match sort.order {
        SortOrder::Ascending => "ascending",
        SortOrder::Descending => "descending",
    };
    if page.rows.is_empty() {
        return format!(
            "Page {} is past the end; there are {} pages.",
            page.page + 1,
            page.page_count
        );
    }
    format!(
        "Page {} of {} ({} groups), sorted by {} {}.",
        page.page + 1,
        page.page_count,
        page.total_rows,
        sort.column,
        order
    )
}
