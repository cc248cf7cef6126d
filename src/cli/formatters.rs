use spend_domain::MetricField;

/// Formats a monetary value with two decimals followed by the currency code.
pub fn format_amount(value: f64, currency: &str) -> String {
    format!("{} {}", format_number(value), currency)
}

pub fn format_number(value: f64) -> String {
    // Avoid printing `-0.00` for values that round to zero.
    if value.abs() < 0.005 {
        return "0.00".into();
    }
    format!("{:.2}", value)
}

/// Signed percent with two decimals: `+87.50%`, `-12.00%`, `0.00%`.
pub fn format_percent(value: f64) -> String {
    if value.abs() < 0.005 {
        return "0.00%".into();
    }
    if value > 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

pub fn format_field(field: MetricField, value: f64) -> String {
    match field {
        MetricField::PercentChange => format_percent(value),
        _ => format_number(value),
    }
}
