use spend_domain::{MetricType, Record, SpendMetric, SummaryData};

use crate::grouping_service::{accumulate_record, effective, empty_totals};

pub struct SummaryService;

impl SummaryService {
    /// Accumulates every record into one grand total per metric, using the same
    /// summation and percent-change rule as [`crate::GroupingService::group`].
    ///
    /// Every requested metric is present, zero-valued when `records` is empty.
    pub fn summarize<'a, I>(records: I, metrics: &[MetricType]) -> SummaryData
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut totals = empty_totals(effective(metrics, &MetricType::ALL));
        for record in records {
            accumulate_record(&mut totals, record);
        }
        totals.values_mut().for_each(SpendMetric::settle);
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use spend_domain::Location;

    #[test]
    fn empty_input_yields_zeroed_metrics() {
        let summary = SummaryService::summarize(std::iter::empty::<&Record>(), &[]);
        assert_eq!(summary.len(), MetricType::ALL.len());
        for metric in summary.values() {
            assert_eq!(*metric, SpendMetric::zero());
        }
    }

    #[test]
    fn totals_span_all_records() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let records = vec![
            Record::new(Location::new("USA", "Ohio", "Akron"), "Retail", "Toys", day, day)
                .with_metric(MetricType::NewStoreSpend, SpendMetric::new(40.0, 20.0)),
            Record::new(Location::new("USA", "Iowa", "Ames"), "Food", "Dairy", day, day)
                .with_metric(MetricType::NewStoreSpend, SpendMetric::new(20.0, 20.0)),
        ];
        let summary = SummaryService::summarize(&records, &[MetricType::NewStoreSpend]);
        assert_eq!(summary.len(), 1);
        let total = summary[&MetricType::NewStoreSpend];
        assert_eq!(total.current, 60.0);
        assert_eq!(total.reference, 40.0);
        assert_eq!(total.absolute_change, 20.0);
        assert_eq!(total.percent_change, 50.0);
    }
}
