//! Aggregate shapes produced by the grouping and summary engines.

use indexmap::IndexMap;

use crate::metric::{MetricType, SpendMetric};

/// Per-metric totals, ordered by the effective metric list.
pub type MetricTotals = IndexMap<MetricType, SpendMetric>;

/// Group key to per-metric totals, in first-occurrence order of the groups.
pub type GroupedData = IndexMap<String, MetricTotals>;

/// Grand total per metric over every filtered record.
pub type SummaryData = MetricTotals;

/// Direction of a percent change, used by headline cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increase,
    Decrease,
    NoChange,
}

impl Trend {
    pub fn of(metric: &SpendMetric) -> Self {
        if metric.percent_change > 0.0 {
            Trend::Increase
        } else if metric.percent_change < 0.0 {
            Trend::Decrease
        } else {
            Trend::NoChange
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Trend::Increase => "Increase",
            Trend::Decrease => "Decrease",
            Trend::NoChange => "No change",
        }
    }
}
