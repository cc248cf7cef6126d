use chrono::NaiveDate;
use spend_domain::{DateWindow, FilterState, Record};

pub struct FilterService;

impl FilterService {
    /// Narrows `records` to those passing the sector, category, and date-overlap
    /// predicates of `state`. Each predicate is a no-op when its filter is unset.
    pub fn apply<'a, I>(records: I, state: &FilterState) -> Vec<&'a Record>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let bounds = Self::active_bounds(state);
        records
            .into_iter()
            .filter(|record| Self::matches_sector(record, state))
            .filter(|record| Self::matches_category(record, state))
            .filter(|record| {
                bounds.map_or(true, |(start, end)| Self::matches_dates(record, start, end))
            })
            .collect()
    }

    pub fn matches_sector(record: &Record, state: &FilterState) -> bool {
        state.sector.is_empty() || state.sector.contains(&record.sector)
    }

    pub fn matches_category(record: &Record, state: &FilterState) -> bool {
        state.category.is_empty() || state.category.contains(&record.category)
    }

    /// Inclusive overlap between the record's validity window and `[start, end]`.
    /// Inverted bounds match nothing.
    pub fn matches_dates(record: &Record, start: NaiveDate, end: NaiveDate) -> bool {
        record.start_date <= end && record.end_date >= start
    }

    pub fn matches_window(record: &Record, window: &DateWindow) -> bool {
        Self::matches_dates(record, window.start, window.end)
    }

    fn active_bounds(state: &FilterState) -> Option<(NaiveDate, NaiveDate)> {
        let bounds = state.date_bounds();
        if let Some((start, end)) = bounds {
            if start > end {
                tracing::warn!(%start, %end, "date filter start is after its end");
            }
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use spend_domain::{FilterUpdate, Location};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(sector: &str, category: &str, start: NaiveDate, end: NaiveDate) -> Record {
        Record::new(
            Location::new("USA", "Texas", "Austin"),
            sector,
            category,
            start,
            end,
        )
    }

    fn march() -> FilterState {
        FilterState::default().merged(
            FilterUpdate::new().dates(Some(date(2024, 3, 1)), Some(date(2024, 3, 31))),
        )
    }

    #[test]
    fn record_ending_inside_window_passes() {
        let rec = record("Retail", "Shoes", date(2024, 2, 15), date(2024, 3, 5));
        assert_eq!(FilterService::apply([&rec], &march()).len(), 1);
    }

    #[test]
    fn record_starting_inside_window_passes() {
        let rec = record("Retail", "Shoes", date(2024, 3, 31), date(2024, 4, 15));
        assert_eq!(FilterService::apply([&rec], &march()).len(), 1);
    }

    #[test]
    fn record_containing_window_passes() {
        let rec = record("Retail", "Shoes", date(2024, 1, 1), date(2024, 12, 31));
        assert_eq!(FilterService::apply([&rec], &march()).len(), 1);
    }

    #[test]
    fn record_outside_window_is_dropped() {
        let before = record("Retail", "Shoes", date(2024, 1, 1), date(2024, 2, 29));
        let after = record("Retail", "Shoes", date(2024, 4, 1), date(2024, 4, 30));
        assert!(FilterService::apply([&before, &after], &march()).is_empty());
    }

    #[test]
    fn single_bound_does_not_filter_dates() {
        let rec = record("Retail", "Shoes", date(2020, 1, 1), date(2020, 1, 2));
        let state = FilterState::default()
            .merged(FilterUpdate::new().dates(Some(date(2024, 3, 1)), None));
        assert_eq!(FilterService::apply([&rec], &state).len(), 1);
    }

    #[test]
    fn inverted_bounds_still_apply_the_overlap_test() {
        let long_ago = record("Retail", "Shoes", date(2020, 1, 1), date(2020, 1, 2));
        let spanning = record("Retail", "Shoes", date(2024, 3, 10), date(2024, 3, 20));
        let state = FilterState::default().merged(
            FilterUpdate::new().dates(Some(date(2024, 3, 31)), Some(date(2024, 3, 1))),
        );
        assert!(FilterService::apply([&long_ago, &spanning], &state).is_empty());
    }

    #[test]
    fn window_predicate_matches_bounds_predicate() {
        let rec = record("Retail", "Shoes", date(2024, 2, 15), date(2024, 3, 5));
        let window = DateWindow::new(date(2024, 3, 1), date(2024, 3, 31)).unwrap();
        assert!(FilterService::matches_window(&rec, &window));
        assert!(FilterService::matches_dates(&rec, window.start, window.end));
    }

    #[test]
    fn sector_and_category_compose_by_and() {
        let d = date(2024, 3, 1);
        let records = vec![
            record("Retail", "Shoes", d, d),
            record("Retail", "Books", d, d),
            record("Food", "Shoes", d, d),
        ];
        let state = FilterState::default().merged(
            FilterUpdate::new()
                .sectors(["Retail"])
                .categories(["Shoes", "Hats"]),
        );
        let kept = FilterService::apply(&records, &state);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].category, "Shoes");
        assert_eq!(kept[0].sector, "Retail");
    }

    #[test]
    fn matching_is_exact() {
        let d = date(2024, 3, 1);
        let rec = record("retail ", "Shoes", d, d);
        let state = FilterState::default().merged(FilterUpdate::new().sectors(["Retail"]));
        assert!(FilterService::apply([&rec], &state).is_empty());
    }
}
