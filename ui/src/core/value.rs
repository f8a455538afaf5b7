//! Indicator values: either a count or a categorical answer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorical "done" answer.
pub const YES: &str = "Sí";
/// Categorical "not done" answer.
pub const NO: &str = "No";

/// Value of an indicator target or actual reading.
///
/// Serialized untagged, so `20` and `"Sí"` are both valid JSON inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndicatorValue {
    Numeric(f64),
    Categorical(String),
}

impl IndicatorValue {
    pub fn yes() -> Self {
        Self::Categorical(YES.to_string())
    }

    pub fn no() -> Self {
        Self::Categorical(NO.to_string())
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Numeric(value) => Some(*value),
            Self::Categorical(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Numeric(_) => None,
            Self::Categorical(text) => Some(text.as_str()),
        }
    }

    /// Coerce raw input text into a value of the same kind as `target`.
    ///
    /// Numeric targets accept anything that parses as `f64`; other text is
    /// kept as-is and will simply score zero.
    pub fn coerce(raw: &str, target: &IndicatorValue) -> Self {
        match target {
            Self::Numeric(_) => match raw.trim().parse::<f64>() {
                // `+ 0.0` folds `-0` into `0`.
                Ok(value) if value.is_finite() => Self::Numeric(value + 0.0),
                _ => Self::Categorical(raw.to_string()),
            },
            Self::Categorical(_) => Self::Categorical(raw.to_string()),
        }
    }

    /// Starting reading for an indicator with this target.
    pub fn blank_for(target: &IndicatorValue) -> Self {
        match target {
            Self::Numeric(_) => Self::Numeric(0.0),
            Self::Categorical(_) => Self::no(),
        }
    }
}

impl fmt::Display for IndicatorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Categorical(text) => f.write_str(text),
        }
    }
}

impl From<f64> for IndicatorValue {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for IndicatorValue {
    fn from(value: &str) -> Self {
        Self::Categorical(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_print_in_shortest_form() {
        assert_eq!(IndicatorValue::Numeric(20.0).to_string(), "20");
        assert_eq!(IndicatorValue::Numeric(2.5).to_string(), "2.5");
        assert_eq!(IndicatorValue::yes().to_string(), "Sí");
    }

    #[test]
    fn coerce_follows_target_kind() {
        let numeric = IndicatorValue::Numeric(20.0);
        assert_eq!(
            IndicatorValue::coerce(" 12 ", &numeric),
            IndicatorValue::Numeric(12.0)
        );
        assert_eq!(
            IndicatorValue::coerce("doce", &numeric),
            IndicatorValue::Categorical("doce".into())
        );
        assert_eq!(
            IndicatorValue::coerce("", &numeric),
            IndicatorValue::Categorical(String::new())
        );
        assert_eq!(
            IndicatorValue::coerce("12", &IndicatorValue::yes()),
            IndicatorValue::Categorical("12".into())
        );
    }

    #[test]
    fn untagged_json_accepts_both_kinds() {
        let parsed: Vec<IndicatorValue> = serde_json::from_str(r#"[20, "Sí"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![IndicatorValue::Numeric(20.0), IndicatorValue::yes()]
        );
    }

    #[test]
    fn negative_zero_entry_reads_as_zero() {
        let target = IndicatorValue::Numeric(4.0);
        for raw in ["-0", "-0.0", " -0 "] {
            let value = IndicatorValue::coerce(raw, &target);
            assert_eq!(value.to_string(), "0");
            assert!(value.as_number().is_some_and(|n| n.is_sign_positive()));
        }
    }
}
