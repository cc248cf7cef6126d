//! Spend metric values and the closed enumerations that address them.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One metric's value in the current period against a reference period.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpendMetric {
    pub current: f64,
    pub reference: f64,
    pub absolute_change: f64,
    pub percent_change: f64,
}

impl SpendMetric {
    pub fn new(current: f64, reference: f64) -> Self {
        Self {
            current,
            reference,
            absolute_change: current - reference,
            percent_change: percent_change(current, reference),
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Adds the summable fields of `other` into `self`.
    ///
    /// `percent_change` is left untouched; it is only meaningful once
    /// recomputed from the accumulated totals via [`SpendMetric::settle`].
    pub fn accumulate(&mut self, other: &SpendMetric) {
        self.current += other.current;
        self.reference += other.reference;
        self.absolute_change += other.absolute_change;
    }

    /// Recomputes `percent_change` from the accumulated current and reference.
    pub fn settle(&mut self) {
        self.percent_change = percent_change(self.current, self.reference);
    }

    pub fn value(&self, field: MetricField) -> f64 {
        match field {
            MetricField::Current => self.current,
            MetricField::Reference => self.reference,
            MetricField::AbsoluteChange => self.absolute_change,
            MetricField::PercentChange => self.percent_change,
        }
    }
}

/// Percent change of `current` against `reference`, defined as `0` when the
/// reference is exactly zero.
pub fn percent_change(current: f64, reference: f64) -> f64 {
    if reference != 0.0 {
        (current - reference) / reference * 100.0
    } else {
        0.0
    }
}

/// The four spend metrics carried by every record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum MetricType {
    MySpend,
    SameStoreSpend,
    NewStoreSpend,
    LostStoreSpend,
}

impl MetricType {
    pub const ALL: [MetricType; 4] = [
        MetricType::MySpend,
        MetricType::SameStoreSpend,
        MetricType::NewStoreSpend,
        MetricType::LostStoreSpend,
    ];

    /// Wire name used in data files and filter commands.
    pub fn key(&self) -> &'static str {
        match self {
            MetricType::MySpend => "mySpend",
            MetricType::SameStoreSpend => "sameStoreSpend",
            MetricType::NewStoreSpend => "newStoreSpend",
            MetricType::LostStoreSpend => "lostStoreSpend",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricType::MySpend => "My Spend",
            MetricType::SameStoreSpend => "Same Store Spend",
            MetricType::NewStoreSpend => "New Store Spend",
            MetricType::LostStoreSpend => "Lost Store Spend",
        }
    }

    /// Short title shown on headline summary cards.
    pub fn card_label(&self) -> &'static str {
        match self {
            MetricType::MySpend => "Total Spend",
            MetricType::SameStoreSpend => "Same Store",
            MetricType::NewStoreSpend => "New Store",
            MetricType::LostStoreSpend => "Lost Store",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MetricType {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        MetricType::ALL
            .into_iter()
            .find(|metric| metric.key() == value)
            .ok_or_else(|| UnknownVariant::new("metric", value))
    }
}

/// Dimensional attributes a record can be grouped by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    Country,
    State,
    City,
    Sector,
    Category,
}

impl AttributeType {
    /// Canonical grouping order used when no attributes are selected.
    pub const ALL: [AttributeType; 5] = [
        AttributeType::Country,
        AttributeType::State,
        AttributeType::City,
        AttributeType::Sector,
        AttributeType::Category,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AttributeType::Country => "country",
            AttributeType::State => "state",
            AttributeType::City => "city",
            AttributeType::Sector => "sector",
            AttributeType::Category => "category",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttributeType::Country => "Country",
            AttributeType::State => "State",
            AttributeType::City => "City",
            AttributeType::Sector => "Sector",
            AttributeType::Category => "Category",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AttributeType {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        AttributeType::ALL
            .into_iter()
            .find(|attribute| attribute.key() == value)
            .ok_or_else(|| UnknownVariant::new("attribute", value))
    }
}

/// Numeric fields of a [`SpendMetric`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MetricField {
    Current,
    Reference,
    AbsoluteChange,
    PercentChange,
}

impl MetricField {
    pub const ALL: [MetricField; 4] = [
        MetricField::Current,
        MetricField::Reference,
        MetricField::AbsoluteChange,
        MetricField::PercentChange,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MetricField::Current => "current",
            MetricField::Reference => "reference",
            MetricField::AbsoluteChange => "absoluteChange",
            MetricField::PercentChange => "percentChange",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricField::Current => "Current",
            MetricField::Reference => "Reference",
            MetricField::AbsoluteChange => "Absolute Change",
            MetricField::PercentChange => "% Change",
        }
    }
}

impl FromStr for MetricField {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        MetricField::ALL
            .into_iter()
            .find(|field| field.key() == value)
            .ok_or_else(|| UnknownVariant::new("metric field", value))
    }
}

/// Returned when text does not name a known enumeration variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} `{}`", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_change_is_zero_for_zero_reference() {
        assert_eq!(percent_change(50.0, 0.0), 0.0);
        assert_eq!(percent_change(0.0, 0.0), 0.0);
        assert_eq!(percent_change(150.0, 80.0), 87.5);
    }

    #[test]
    fn accumulate_ignores_incoming_percent_change() {
        let mut total = SpendMetric::zero();
        total.accumulate(&SpendMetric {
            current: 100.0,
            reference: 80.0,
            absolute_change: 20.0,
            percent_change: 999.0,
        });
        assert_eq!(total.percent_change, 0.0);
        total.settle();
        assert_eq!(total.percent_change, 25.0);
    }

    #[test]
    fn metric_and_attribute_keys_round_trip() {
        for metric in MetricType::ALL {
            assert_eq!(metric.key().parse::<MetricType>(), Ok(metric));
        }
        for attribute in AttributeType::ALL {
            assert_eq!(attribute.key().parse::<AttributeType>(), Ok(attribute));
        }
        assert!("MySpend".parse::<MetricType>().is_err());
        assert!("region".parse::<AttributeType>().is_err());
    }

    #[test]
    fn serde_uses_wire_keys() {
        let json = serde_json::to_string(&MetricType::SameStoreSpend).unwrap();
        assert_eq!(json, "\"sameStoreSpend\"");
        let attr: AttributeType = serde_json::from_str("\"city\"").unwrap();
        assert_eq!(attr, AttributeType::City);
    }
}
