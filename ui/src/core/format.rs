//! Formatting helpers for presenting scores.

use super::status::StatusBand;

pub fn format_percent(value: u8) -> String {
    format!("{value}%")
}

/// Badge text such as `72% · AMARILLO`.
pub fn format_badge(value: u8) -> String {
    format!("{value}% · {}", StatusBand::classify(value).label())
}
