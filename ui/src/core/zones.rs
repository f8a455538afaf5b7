//! The four inspection zones and their fixed indicator layout.

use serde::{Deserialize, Serialize};

use super::value::IndicatorValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZoneId {
    #[serde(rename = "taquilleros")]
    Taquilleros,
    #[serde(rename = "almacen_chico")]
    AlmacenChico,
    #[serde(rename = "zona_i_iv")]
    ZonaIIV,
    #[serde(rename = "zona_iii_v")]
    ZonaIIIV,
}

impl ZoneId {
    /// Every zone in report order.
    pub const ALL: [ZoneId; 4] = [
        ZoneId::Taquilleros,
        ZoneId::AlmacenChico,
        ZoneId::ZonaIIV,
        ZoneId::ZonaIIIV,
    ];

    /// Name used in the CSV export and the zone cards.
    pub fn label(self) -> &'static str {
        match self {
            ZoneId::Taquilleros => "Taquilleros",
            ZoneId::AlmacenChico => "Almacén Chico",
            ZoneId::ZonaIIV => "Zona I-IV",
            ZoneId::ZonaIIIV => "Zona III-V",
        }
    }

    /// Upper-case heading used in the report message.
    pub fn heading(self) -> &'static str {
        match self {
            ZoneId::Taquilleros => "TAQUILLEROS",
            ZoneId::AlmacenChico => "ALMACÉN CHICO",
            ZoneId::ZonaIIV => "ZONA I-IV",
            ZoneId::ZonaIIIV => "ZONA III-V",
        }
    }

    /// Colour square shown before the zone line in the report message.
    pub fn marker(self) -> &'static str {
        match self {
            ZoneId::Taquilleros => "🟦",
            ZoneId::AlmacenChico => "🟩",
            ZoneId::ZonaIIV => "🟨",
            ZoneId::ZonaIIIV => "🟧",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ZoneId::Taquilleros => "zone-card--taquilleros",
            ZoneId::AlmacenChico => "zone-card--almacen",
            ZoneId::ZonaIIV => "zone-card--zona-i-iv",
            ZoneId::ZonaIIIV => "zone-card--zona-iii-v",
        }
    }

    /// Indicators of the zone, in display order.
    pub fn indicators(self) -> &'static [IndicatorId] {
        use IndicatorId::*;
        match self {
            ZoneId::Taquilleros => &[Casillas, Pintado, Errores, Apoyos],
            ZoneId::AlmacenChico => &[Casillas, Clasificado, Senaletica, Apoyos],
            ZoneId::ZonaIIV => &[Estantes, Pintado, Retazos],
            ZoneId::ZonaIIIV => &[Clasificado, Senaletica, Apoyo],
        }
    }

    pub fn has_indicator(self, indicator: IndicatorId) -> bool {
        self.indicators().contains(&indicator)
    }

    /// Default target for `indicator` in this zone, or `None` if the zone
    /// does not track it.
    pub fn default_target(self, indicator: IndicatorId) -> Option<IndicatorValue> {
        use IndicatorId::*;
        let count = |value: f64| Some(IndicatorValue::Numeric(value));
        match (self, indicator) {
            (ZoneId::Taquilleros, Casillas) => count(20.0),
            (ZoneId::Taquilleros, Pintado) => count(15.0),
            (ZoneId::Taquilleros, Errores) => count(0.0),
            (ZoneId::Taquilleros, Apoyos) => count(4.0),

            (ZoneId::AlmacenChico, Casillas) => count(15.0),
            (ZoneId::AlmacenChico, Clasificado) => count(12.0),
            (ZoneId::AlmacenChico, Senaletica) => count(8.0),
            (ZoneId::AlmacenChico, Apoyos) => count(3.0),

            (ZoneId::ZonaIIV, Estantes) => count(10.0),
            (ZoneId::ZonaIIV, Pintado) => count(8.0),
            (ZoneId::ZonaIIV, Retazos) => Some(IndicatorValue::yes()),

            (ZoneId::ZonaIIIV, Clasificado) => count(12.0),
            (ZoneId::ZonaIIIV, Senaletica) => count(6.0),
            (ZoneId::ZonaIIIV, Apoyo) => Some(IndicatorValue::yes()),

            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorId {
    Casillas,
    Pintado,
    Errores,
    Apoyos,
    Clasificado,
    Senaletica,
    Estantes,
    Retazos,
    Apoyo,
}

impl IndicatorId {
    pub fn label(self) -> &'static str {
        match self {
            IndicatorId::Casillas => "Casillas",
            IndicatorId::Pintado => "Pintado",
            IndicatorId::Errores => "Errores",
            IndicatorId::Apoyos => "Apoyos",
            IndicatorId::Clasificado => "Clasificado",
            IndicatorId::Senaletica => "Señalética",
            IndicatorId::Estantes => "Estantes",
            IndicatorId::Retazos => "Retazos",
            IndicatorId::Apoyo => "Apoyo",
        }
    }
}
