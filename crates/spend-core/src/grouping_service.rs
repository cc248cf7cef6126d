use spend_domain::{AttributeType, GroupedData, MetricTotals, MetricType, Record, SpendMetric};

/// Separator placed between attribute values in a group key.
pub const GROUP_KEY_SEPARATOR: &str = " - ";

pub struct GroupingService;

impl GroupingService {
    /// Partitions `records` by the composite key of `attributes` and sums each
    /// metric per group. Empty `attributes`/`metrics` mean "all", in canonical order.
    pub fn group<'a, I>(
        records: I,
        attributes: &[AttributeType],
        metrics: &[MetricType],
    ) -> GroupedData
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let attributes = effective(attributes, &AttributeType::ALL);
        let metrics = effective(metrics, &MetricType::ALL);

        let mut grouped = GroupedData::new();
        for record in records {
            let totals = grouped
                .entry(Self::group_key(record, attributes))
                .or_insert_with(|| empty_totals(metrics));
            accumulate_record(totals, record);
        }

        for totals in grouped.values_mut() {
            totals.values_mut().for_each(SpendMetric::settle);
        }
        grouped
    }

    /// Joins the record's values for `attributes`, in order, with `" - "`.
    pub fn group_key(record: &Record, attributes: &[AttributeType]) -> String {
        attributes
            .iter()
            .map(|attribute| record.attribute(*attribute))
            .collect::<Vec<_>>()
            .join(GROUP_KEY_SEPARATOR)
    }
}

pub(crate) fn effective<'a, T>(selected: &'a [T], all: &'a [T]) -> &'a [T] {
    if selected.is_empty() {
        all
    } else {
        selected
    }
}

/// Zeroed totals keyed by `metrics`; a repeated metric collapses to one entry.
pub(crate) fn empty_totals(metrics: &[MetricType]) -> MetricTotals {
    metrics
        .iter()
        .map(|metric| (*metric, SpendMetric::zero()))
        .collect()
}

pub(crate) fn accumulate_record(totals: &mut MetricTotals, record: &Record) {
    for (metric, total) in totals.iter_mut() {
        total.accumulate(record.metric(*metric));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use spend_domain::Location;

    fn record(city: &str, sector: &str, current: f64, reference: f64) -> Record {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        Record::new(Location::new("USA", "Texas", city), sector, "General", day, day)
            .with_metric(MetricType::MySpend, SpendMetric::new(current, reference))
    }

    #[test]
    fn key_follows_attribute_order() {
        let rec = record("Austin", "Retail", 1.0, 1.0);
        assert_eq!(
            GroupingService::group_key(&rec, &[AttributeType::Sector, AttributeType::City]),
            "Retail - Austin"
        );
        assert_eq!(
            GroupingService::group_key(&rec, &AttributeType::ALL),
            "USA - Texas - Austin - Retail - General"
        );
    }

    #[test]
    fn groups_keep_first_occurrence_order() {
        let records = vec![
            record("Dallas", "Retail", 1.0, 1.0),
            record("Austin", "Retail", 1.0, 1.0),
            record("Dallas", "Retail", 1.0, 1.0),
        ];
        let grouped = GroupingService::group(&records, &[AttributeType::City], &[]);
        let keys: Vec<_> = grouped.keys().cloned().collect();
        assert_eq!(keys, vec!["Dallas", "Austin"]);
        assert_eq!(grouped["Dallas"][&MetricType::MySpend].current, 2.0);
    }

    #[test]
    fn only_requested_metrics_are_present_in_order() {
        let records = vec![record("Austin", "Retail", 1.0, 1.0)];
        let grouped = GroupingService::group(
            &records,
            &[AttributeType::City],
            &[MetricType::LostStoreSpend, MetricType::MySpend],
        );
        let metrics: Vec<_> = grouped["Austin"].keys().copied().collect();
        assert_eq!(metrics, vec![MetricType::LostStoreSpend, MetricType::MySpend]);
    }

    #[test]
    fn percent_change_uses_summed_values() {
        let records = vec![
            record("Austin", "Retail", 100.0, 80.0),
            record("Austin", "Retail", 50.0, 0.0),
        ];
        let grouped =
            GroupingService::group(&records, &[AttributeType::Sector], &[MetricType::MySpend]);
        let total = grouped["Retail"][&MetricType::MySpend];
        assert_eq!(total.current, 150.0);
        assert_eq!(total.reference, 80.0);
        assert_eq!(total.absolute_change, 70.0);
        assert_eq!(total.percent_change, 87.5);
    }

    #[test]
    fn empty_input_yields_empty_groups() {
        let grouped = GroupingService::group(std::iter::empty::<&Record>(), &[], &[]);
        assert!(grouped.is_empty());
    }
}
