//! Daily report: zone averages, alert rules and the outbound message text.

use super::form::InspectionForm;
use super::score::{overall_average, zone_average};
use super::status::{StatusBand, MEDIUM_THRESHOLD};
use super::value::NO;
use super::zones::{IndicatorId, ZoneId};

/// Errors above this count in Taquilleros raise an alert.
pub const ERROR_ALERT_THRESHOLD: f64 = 2.0;

/// Shown instead of an empty responsible-person field.
pub const RESPONSIBLE_PLACEHOLDER: &str = "No indicado";

const RULE: &str = "━━━━━━━━━━━━━━";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneScore {
    pub zone: ZoneId,
    pub percentage: u8,
}

impl ZoneScore {
    pub fn band(&self) -> StatusBand {
        StatusBand::classify(self.percentage)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub zones: [ZoneScore; 4],
    pub overall: u8,
}

impl ReportSummary {
    pub fn from_form(form: &InspectionForm) -> Self {
        let zones = form.zones.each_ref().map(|record| ZoneScore {
            zone: record.zone,
            percentage: zone_average(record),
        });
        let averages = zones.map(|score| score.percentage);
        Self {
            zones,
            overall: overall_average(&averages),
        }
    }

    pub fn overall_band(&self) -> StatusBand {
        StatusBand::classify(self.overall)
    }

    pub fn zone(&self, zone: ZoneId) -> ZoneScore {
        self.zones
            .iter()
            .copied()
            .find(|score| score.zone == zone)
            .unwrap_or(ZoneScore {
                zone,
                percentage: 0,
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    LowProgress,
    TaquillerosErrors,
    UnsortedRemnants,
}

impl Alert {
    pub fn message(self) -> &'static str {
        match self {
            Alert::LowProgress => "⚠️ Avance general bajo",
            Alert::TaquillerosErrors => "⚠️ Errores en Taquilleros",
            Alert::UnsortedRemnants => "⚠️ Retazos sin separar Zona I/IV",
        }
    }
}

/// Alert rules, each evaluated independently, in report order.
pub fn alerts(form: &InspectionForm, summary: &ReportSummary) -> Vec<Alert> {
    let mut raised = Vec::new();

    if summary.overall < MEDIUM_THRESHOLD {
        raised.push(Alert::LowProgress);
    }

    let errors = form
        .actual(ZoneId::Taquilleros, IndicatorId::Errores)
        .and_then(|value| value.as_number());
    if errors.is_some_and(|count| count > ERROR_ALERT_THRESHOLD) {
        raised.push(Alert::TaquillerosErrors);
    }

    let remnants = form
        .actual(ZoneId::ZonaIIV, IndicatorId::Retazos)
        .and_then(|value| value.as_text());
    if remnants == Some(NO) {
        raised.push(Alert::UnsortedRemnants);
    }

    raised
}

/// Multi-line report text sent through the messaging link.
pub fn compose_message(form: &InspectionForm, summary: &ReportSummary) -> String {
    let responsible = if form.responsible.is_empty() {
        RESPONSIBLE_PLACEHOLDER
    } else {
        form.responsible.as_str()
    };

    let zone_lines = summary
        .zones
        .iter()
        .map(|score| {
            format!(
                "{} {}: {}% {}",
                score.zone.marker(),
                score.zone.heading(),
                score.percentage,
                score.band().emoji()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let raised = alerts(form, summary);
    let alert_block = if raised.is_empty() {
        "✅ Sin alertas críticas".to_string()
    } else {
        raised
            .iter()
            .map(|alert| alert.message())
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "\n📊 REPORTE DIARIO DE INVENTARIO\n\
         📅 Fecha: {date}\n\
         👤 Encargado: {responsible}\n\
         \n\
         {RULE}\n\
         🎯 AVANCE GENERAL: {overall}% {overall_emoji}\n\
         {RULE}\n\
         \n\
         {zone_lines}\n\
         \n\
         📌 ALERTAS:\n\
         {alert_block}\n",
        date = form.date,
        overall = summary.overall,
        overall_emoji = summary.overall_band().emoji(),
    )
}
