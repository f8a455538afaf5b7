//! Spreadsheet export of the sampled indicators.

use crate::config::CsvQuoting;

use super::form::InspectionForm;
use super::score::percentage;
use super::zones::{IndicatorId, ZoneId};

pub const CSV_HEADER: [&str; 6] = ["Fecha", "Zona", "Indicador", "Meta", "Real", "Porcentaje"];

/// Indicators exported to the spreadsheet, in row order. Not every
/// indicator is exported.
pub const EXPORTED_INDICATORS: [(ZoneId, IndicatorId); 4] = [
    (ZoneId::Taquilleros, IndicatorId::Casillas),
    (ZoneId::Taquilleros, IndicatorId::Pintado),
    (ZoneId::AlmacenChico, IndicatorId::Clasificado),
    (ZoneId::ZonaIIV, IndicatorId::Retazos),
];

pub fn build_rows(form: &InspectionForm) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(EXPORTED_INDICATORS.len() + 1);
    rows.push(CSV_HEADER.into_iter().map(String::from).collect());

    for (zone, id) in EXPORTED_INDICATORS {
        let Some(indicator) = form.zone(zone).indicator(id) else {
            continue;
        };
        rows.push(vec![
            form.date.clone(),
            zone.label().to_string(),
            id.label().to_string(),
            indicator.target.to_string(),
            indicator.actual.to_string(),
            percentage(&indicator.actual, &indicator.target).to_string(),
        ]);
    }

    rows
}

/// CSV text: rows joined with `\n`, no trailing newline.
pub fn build_csv(form: &InspectionForm, quoting: CsvQuoting) -> String {
    build_rows(form)
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|field| match quoting {
                    CsvQuoting::Verbatim => field.clone(),
                    CsvQuoting::Rfc4180 => escape_csv(field),
                })
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}
