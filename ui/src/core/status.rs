//! Traffic-light bands for completion percentages.

/// Lower bound (inclusive) of the green band.
pub const HIGH_THRESHOLD: u8 = 90;
/// Lower bound (inclusive) of the yellow band.
pub const MEDIUM_THRESHOLD: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBand {
    High,
    Medium,
    Low,
}

impl StatusBand {
    pub fn classify(percentage: u8) -> Self {
        if percentage >= HIGH_THRESHOLD {
            Self::High
        } else if percentage >= MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "VERDE",
            Self::Medium => "AMARILLO",
            Self::Low => "ROJO",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::High => "🟢",
            Self::Medium => "🟡",
            Self::Low => "🔴",
        }
    }

    /// A CSS modifier class, e.g. `status--green`.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::High => "status--green",
            Self::Medium => "status--yellow",
            Self::Low => "status--red",
        }
    }
}
