//! Completion percentages for indicators, zones and the whole inspection.

use super::form::ZoneRecord;
use super::value::IndicatorValue;

/// Completion of `actual` against `target`, always within `0..=100`.
///
/// Categorical values only score when both sides carry the same answer.
/// A zero numeric target is met only by a zero reading.
pub fn percentage(actual: &IndicatorValue, target: &IndicatorValue) -> u8 {
    match (actual, target) {
        (IndicatorValue::Numeric(actual), IndicatorValue::Numeric(target)) => {
            if *target == 0.0 {
                return if *actual == 0.0 { 100 } else { 0 };
            }
            round_half_up(actual / target * 100.0).clamp(0.0, 100.0) as u8
        }
        (IndicatorValue::Categorical(actual), IndicatorValue::Categorical(target)) => {
            if actual == target {
                100
            } else {
                0
            }
        }
        _ => 0,
    }
}

/// Unweighted mean of the zone's indicator percentages. Notes never count.
pub fn zone_average(zone: &ZoneRecord) -> u8 {
    let scores: Vec<u8> = zone
        .indicators
        .iter()
        .map(|indicator| percentage(&indicator.actual, &indicator.target))
        .collect();
    mean_percentage(&scores)
}

/// Unweighted mean of per-zone averages.
pub fn overall_average(zone_averages: &[u8]) -> u8 {
    mean_percentage(zone_averages)
}

fn mean_percentage(values: &[u8]) -> u8 {
    if values.is_empty() {
        return 0;
    }
    let total: u32 = values.iter().map(|v| u32::from(*v)).sum();
    round_half_up(f64::from(total) / values.len() as f64).clamp(0.0, 100.0) as u8
}

// Halves round towards +infinity, so 12.5 -> 13 and -2.5 -> -2.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
