//! Filter configuration applied to a user's records before aggregation.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::metric::{AttributeType, MetricType};

/// Active date range, value restrictions, and output dimensions.
///
/// The default value is the reset state: no date bounds, no restrictions,
/// and empty attribute/metric lists (meaning "all").
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub sector: BTreeSet<String>,
    #[serde(default)]
    pub category: BTreeSet<String>,
    /// Grouping order; empty means every attribute in canonical order.
    #[serde(default)]
    pub attributes: Vec<AttributeType>,
    #[serde(default)]
    pub metrics: Vec<MetricType>,
}

impl FilterState {
    /// Returns a new state with every field present in `update` replaced.
    pub fn merged(&self, update: FilterUpdate) -> FilterState {
        let mut next = self.clone();
        if let Some(start_date) = update.start_date {
            next.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            next.end_date = end_date;
        }
        if let Some(sector) = update.sector {
            next.sector = sector;
        }
        if let Some(category) = update.category {
            next.category = category;
        }
        if let Some(attributes) = update.attributes {
            next.attributes = attributes;
        }
        if let Some(metrics) = update.metrics {
            next.metrics = metrics;
        }
        next
    }

    pub fn effective_attributes(&self) -> Vec<AttributeType> {
        if self.attributes.is_empty() {
            AttributeType::ALL.to_vec()
        } else {
            self.attributes.clone()
        }
    }

    pub fn effective_metrics(&self) -> Vec<MetricType> {
        if self.metrics.is_empty() {
            MetricType::ALL.to_vec()
        } else {
            self.metrics.clone()
        }
    }

    /// The `(start, end)` date bounds, present when both are set. The bounds
    /// are returned as given, even when `start > end`.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start_date.zip(self.end_date)
    }

    /// Number of facets differing from the reset state.
    pub fn active_filter_count(&self) -> usize {
        usize::from(self.start_date.is_some())
            + usize::from(self.end_date.is_some())
            + self.sector.len()
            + self.category.len()
            + self.attributes.len()
            + self.metrics.len()
    }

    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }
}

/// Partial filter update; absent fields keep their current value.
///
/// Date fields are tri-state: `None` keeps the bound, `Some(None)` clears it,
/// and `Some(Some(date))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub sector: Option<BTreeSet<String>>,
    pub category: Option<BTreeSet<String>>,
    pub attributes: Option<Vec<AttributeType>>,
    pub metrics: Option<Vec<MetricType>>,
}

impl FilterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn sectors<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sector = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn categories<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn attributes(mut self, attributes: Vec<AttributeType>) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn metrics(mut self, metrics: Vec<MetricType>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn has_effect(&self) -> bool {
        self.start_date.is_some()
            || self.end_date.is_some()
            || self.sector.is_some()
            || self.category.is_some()
            || self.attributes.is_some()
            || self.metrics.is_some()
    }
}
