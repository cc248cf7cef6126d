use indexmap::IndexSet;
use spend_domain::Record;

/// Distinct values available for the sector and category pickers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub sectors: Vec<String>,
    pub categories: Vec<String>,
}

impl FilterOptions {
    /// Collects distinct values in first-occurrence order.
    pub fn from_records(records: &[Record]) -> Self {
        Self {
            sectors: distinct(records.iter().map(|record| record.sector.as_str())),
            categories: distinct(records.iter().map(|record| record.category.as_str())),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .map(str::to_string)
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
