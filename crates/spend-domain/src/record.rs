//! Dated, multi-dimensional spend observations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    dates,
    metric::{AttributeType, MetricType, SpendMetric},
    window::{DateWindow, DateWindowError},
};

/// One spend observation for a user over an inclusive validity window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub country: String,
    pub state: String,
    pub city: String,
    pub sector: String,
    pub category: String,
    #[serde(with = "dates::calendar")]
    pub start_date: NaiveDate,
    #[serde(with = "dates::calendar")]
    pub end_date: NaiveDate,
    pub my_spend: SpendMetric,
    pub same_store_spend: SpendMetric,
    pub new_store_spend: SpendMetric,
    pub lost_store_spend: SpendMetric,
}

impl Record {
    /// Creates a record with all metrics zeroed.
    pub fn new(
        location: Location,
        sector: impl Into<String>,
        category: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            country: location.country,
            state: location.state,
            city: location.city,
            sector: sector.into(),
            category: category.into(),
            start_date,
            end_date,
            my_spend: SpendMetric::zero(),
            same_store_spend: SpendMetric::zero(),
            new_store_spend: SpendMetric::zero(),
            lost_store_spend: SpendMetric::zero(),
        }
    }

    pub fn with_metric(mut self, metric: MetricType, value: SpendMetric) -> Self {
        *self.metric_mut(metric) = value;
        self
    }

    pub fn metric(&self, metric: MetricType) -> &SpendMetric {
        match metric {
            MetricType::MySpend => &self.my_spend,
            MetricType::SameStoreSpend => &self.same_store_spend,
            MetricType::NewStoreSpend => &self.new_store_spend,
            MetricType::LostStoreSpend => &self.lost_store_spend,
        }
    }

    fn metric_mut(&mut self, metric: MetricType) -> &mut SpendMetric {
        match metric {
            MetricType::MySpend => &mut self.my_spend,
            MetricType::SameStoreSpend => &mut self.same_store_spend,
            MetricType::NewStoreSpend => &mut self.new_store_spend,
            MetricType::LostStoreSpend => &mut self.lost_store_spend,
        }
    }

    pub fn attribute(&self, attribute: AttributeType) -> &str {
        match attribute {
            AttributeType::Country => &self.country,
            AttributeType::State => &self.state,
            AttributeType::City => &self.city,
            AttributeType::Sector => &self.sector,
            AttributeType::Category => &self.category,
        }
    }

    /// The record's validity window, failing when the dates are inverted.
    pub fn validity(&self) -> Result<DateWindow, DateWindowError> {
        DateWindow::new(self.start_date, self.end_date)
    }
}

/// Geographic dimensions of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub country: String,
    pub state: String,
    pub city: String,
}

impl Location {
    pub fn new(
        country: impl Into<String>,
        state: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            state: state.into(),
            city: city.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "country": "USA",
        "state": "California",
        "city": "Los Angeles",
        "sector": "Retail",
        "category": "Electronics",
        "startDate": "2024-01-01",
        "endDate": "2024-01-31",
        "mySpend": {"current": 120.5, "reference": 100, "absoluteChange": 20.5, "percentChange": 20.5},
        "sameStoreSpend": {"current": 80, "reference": 70, "absoluteChange": 10, "percentChange": 14.28},
        "newStoreSpend": {"current": 30, "reference": 0, "absoluteChange": 30, "percentChange": 0},
        "lostStoreSpend": {"current": 0, "reference": 12, "absoluteChange": -12, "percentChange": -100}
    }"#;

    #[test]
    fn deserializes_wire_record() {
        let record: Record = serde_json::from_str(SAMPLE).expect("parse record");
        assert_eq!(record.city, "Los Angeles");
        assert_eq!(
            record.start_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(record.metric(MetricType::MySpend).current, 120.5);
        assert_eq!(record.metric(MetricType::LostStoreSpend).reference, 12.0);
        assert_eq!(record.attribute(AttributeType::Sector), "Retail");
    }

    #[test]
    fn rejects_malformed_dates() {
        let broken = SAMPLE.replace("2024-01-31", "31/01/2024");
        let err = serde_json::from_str::<Record>(&broken).expect_err("bad date must fail");
        assert!(err.to_string().contains("malformed date"));
    }

    #[test]
    fn validity_reports_inverted_windows() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let location = Location::new("USA", "Texas", "Austin");
        let record = Record::new(location, "Food", "Grocery", start, end);
        assert!(record.validity().is_err());
    }
}
