//! Flattens grouped aggregates into sortable, paginated table rows.

use std::{cmp::Ordering, fmt, str::FromStr};

use spend_domain::{GroupedData, MetricField, MetricTotals, MetricType};

use crate::CoreError;

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// A column of the grouped table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableColumn {
    Group,
    Metric { metric: MetricType, field: MetricField },
}

impl TableColumn {
    pub fn is_numeric(&self) -> bool {
        matches!(self, TableColumn::Metric { .. })
    }

    /// Column identifier, e.g. `group` or `mySpend_percentChange`.
    pub fn key(&self) -> String {
        match self {
            TableColumn::Group => "group".into(),
            TableColumn::Metric { metric, field } => format!("{}_{}", metric.key(), field.key()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            TableColumn::Group => "Group".into(),
            TableColumn::Metric { metric, field } => {
                format!("{} ({})", metric.label(), field.label())
            }
        }
    }
}

impl fmt::Display for TableColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for TableColumn {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "group" {
            return Ok(TableColumn::Group);
        }
        let invalid = || CoreError::InvalidFilter(format!("unknown table column `{value}`"));
        let (metric, field) = value.split_once('_').ok_or_else(invalid)?;
        Ok(TableColumn::Metric {
            metric: metric.parse().map_err(|_| invalid())?,
            field: field.parse().map_err(|_| invalid())?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Active sort selection; defaults to the group column, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSort {
    pub column: TableColumn,
    pub order: SortOrder,
}

impl Default for TableSort {
    fn default() -> Self {
        Self {
            column: TableColumn::Group,
            order: SortOrder::Ascending,
        }
    }
}

impl TableSort {
    /// Header-click semantics: the active ascending column flips to
    /// descending, anything else sorts ascending by `column`.
    pub fn request(self, column: TableColumn) -> Self {
        let order = if self.column == column && self.order == SortOrder::Ascending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        Self { column, order }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Position of the group in the grouped data (insertion order).
    pub index: usize,
    pub group: String,
    pub metrics: MetricTotals,
}

impl TableRow {
    pub fn value(&self, metric: MetricType, field: MetricField) -> Option<f64> {
        self.metrics.get(&metric).map(|value| value.value(field))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    pub rows: Vec<TableRow>,
    pub page: usize,
    pub rows_per_page: usize,
    pub total_rows: usize,
    pub page_count: usize,
}

pub struct TableService;

impl TableService {
    /// `Group` followed by the four value columns of every effective metric.
    pub fn columns(metrics: &[MetricType]) -> Vec<TableColumn> {
        let metrics = if metrics.is_empty() {
            &MetricType::ALL[..]
        } else {
            metrics
        };
        let mut columns = vec![TableColumn::Group];
        for metric in metrics {
            columns.extend(
                MetricField::ALL
                    .into_iter()
                    .map(|field| TableColumn::Metric { metric: *metric, field }),
            );
        }
        columns
    }

    pub fn rows(grouped: &GroupedData) -> Vec<TableRow> {
        grouped
            .iter()
            .enumerate()
            .map(|(index, (group, metrics))| TableRow {
                index,
                group: group.clone(),
                metrics: metrics.clone(),
            })
            .collect()
    }

    /// Stable sort by `sort.column`; ties fall back to the original row index.
    pub fn sort(rows: &mut [TableRow], sort: TableSort) {
        rows.sort_by(|a, b| {
            let ordering = match sort.column {
                TableColumn::Group => a.group.cmp(&b.group),
                TableColumn::Metric { metric, field } => {
                    compare_values(a.value(metric, field), b.value(metric, field))
                }
            };
            let ordering = match sort.order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            };
            ordering.then(a.index.cmp(&b.index))
        });
    }

    /// Zero-based page of `rows`. A page past the end is empty.
    pub fn paginate(rows: Vec<TableRow>, page: usize, rows_per_page: usize) -> TablePage {
        let rows_per_page = rows_per_page.max(1);
        let total_rows = rows.len();
        let page_count = total_rows.div_ceil(rows_per_page);
        let rows = rows
            .into_iter()
            .skip(page.saturating_mul(rows_per_page))
            .take(rows_per_page)
            .collect();
        TablePage {
            rows,
            page,
            rows_per_page,
            total_rows,
            page_count,
        }
    }
}

fn compare_values(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (a, b) => a.is_some().cmp(&b.is_some()),
    }
}
