//! Domain core: form state, scoring and the two output formats.

pub mod csv;
pub mod form;
pub mod format;
pub mod link;
pub mod report;
pub mod score;
pub mod status;
pub mod value;
pub mod zones;

pub use form::{FormAction, Indicator, InspectionForm, ZoneRecord};
pub use report::{Alert, ReportSummary, ZoneScore};
pub use status::StatusBand;
pub use value::IndicatorValue;
pub use zones::{IndicatorId, ZoneId};
