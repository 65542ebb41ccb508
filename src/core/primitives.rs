use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Formats an axis or bar value: whole numbers without decimals, anything
/// else with one decimal place.
#[must_use]
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_owned();
    }
    let rounded = value.round();
    if (value - rounded).abs() <= 1e-9 {
        // `-0.0` would otherwise print as "-0".
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };
        format!("{rounded:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Formats a proportion for legend text, e.g. `32%` or `12.5%`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{}%", format_value(value))
}
