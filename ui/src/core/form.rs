//! In-memory inspection form and the reducer that mutates it.

use time::{macros::format_description, OffsetDateTime};

use crate::config::InspectionConfig;

use super::value::IndicatorValue;
use super::zones::{IndicatorId, ZoneId};

#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    pub id: IndicatorId,
    pub target: IndicatorValue,
    pub actual: IndicatorValue,
}

impl Indicator {
    pub fn new(id: IndicatorId, target: IndicatorValue, actual: IndicatorValue) -> Self {
        Self { id, target, actual }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneRecord {
    pub zone: ZoneId,
    pub indicators: Vec<Indicator>,
    pub notes: String,
}

impl ZoneRecord {
    /// Fresh record with configured targets and blank readings.
    pub fn blank(zone: ZoneId, config: &InspectionConfig) -> Self {
        let indicators = zone
            .indicators()
            .iter()
            .filter_map(|id| {
                let target = config.target_for(zone, *id)?;
                let actual = IndicatorValue::blank_for(&target);
                Some(Indicator::new(*id, target, actual))
            })
            .collect();
        Self {
            zone,
            indicators,
            notes: String::new(),
        }
    }

    pub fn indicator(&self, id: IndicatorId) -> Option<&Indicator> {
        self.indicators.iter().find(|indicator| indicator.id == id)
    }

    fn indicator_mut(&mut self, id: IndicatorId) -> Option<&mut Indicator> {
        self.indicators.iter_mut().find(|indicator| indicator.id == id)
    }
}

/// A single user edit.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetDate(String),
    SetResponsible(String),
    SetActual {
        zone: ZoneId,
        indicator: IndicatorId,
        raw: String,
    },
    SetNotes {
        zone: ZoneId,
        notes: String,
    },
    /// Clear every reading and note; date, person and targets stay.
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InspectionForm {
    /// Inspection date as `YYYY-MM-DD`.
    pub date: String,
    pub responsible: String,
    pub zones: [ZoneRecord; 4],
}

impl InspectionForm {
    pub fn new(date: impl Into<String>, config: &InspectionConfig) -> Self {
        Self {
            date: date.into(),
            responsible: String::new(),
            zones: ZoneId::ALL.map(|zone| ZoneRecord::blank(zone, config)),
        }
    }

    /// Form dated today (UTC).
    pub fn today(config: &InspectionConfig) -> Self {
        Self::new(today_iso(), config)
    }

    pub fn zone(&self, zone: ZoneId) -> &ZoneRecord {
        &self.zones[zone_index(zone)]
    }

    fn zone_mut(&mut self, zone: ZoneId) -> &mut ZoneRecord {
        &mut self.zones[zone_index(zone)]
    }

    /// Current reading of `indicator` in `zone`, if the zone tracks it.
    pub fn actual(&self, zone: ZoneId, indicator: IndicatorId) -> Option<&IndicatorValue> {
        self.zone(zone).indicator(indicator).map(|ind| &ind.actual)
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SetDate(date) => self.date = date,
            FormAction::SetResponsible(name) => self.responsible = name,
            FormAction::SetActual {
                zone,
                indicator,
                raw,
            } => {
                if let Some(entry) = self.zone_mut(zone).indicator_mut(indicator) {
                    entry.actual = IndicatorValue::coerce(&raw, &entry.target);
                }
            }
            FormAction::SetNotes { zone, notes } => self.zone_mut(zone).notes = notes,
            FormAction::Reset => {
                for record in self.zones.iter_mut() {
                    record.notes.clear();
                    for entry in record.indicators.iter_mut() {
                        entry.actual = IndicatorValue::blank_for(&entry.target);
                    }
                }
            }
        }
    }

    /// Reducer-style variant of [`InspectionForm::apply`].
    pub fn reduce(mut self, action: FormAction) -> Self {
        self.apply(action);
        self
    }
}

fn zone_index(zone: ZoneId) -> usize {
    match zone {
        ZoneId::Taquilleros => 0,
        ZoneId::AlmacenChico => 1,
        ZoneId::ZonaIIV => 2,
        ZoneId::ZonaIIIV => 3,
    }
}

pub fn today_iso() -> String {
    OffsetDateTime::now_utc()
        .format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::{NO, YES};

    fn blank_form() -> InspectionForm {
        InspectionForm::new("2024-05-02", &InspectionConfig::default())
    }

    #[test]
    fn new_form_uses_default_targets_and_blank_readings() {
        let form = blank_form();
        assert_eq!(form.responsible, "");
        let taquilleros = form.zone(ZoneId::Taquilleros);
        assert_eq!(taquilleros.indicators.len(), 4);
        let casillas = taquilleros.indicator(IndicatorId::Casillas).unwrap();
        assert_eq!(casillas.target, IndicatorValue::Numeric(20.0));
        assert_eq!(casillas.actual, IndicatorValue::Numeric(0.0));

        let retazos = form.zone(ZoneId::ZonaIIV).indicator(IndicatorId::Retazos).unwrap();
        assert_eq!(retazos.target.as_text(), Some(YES));
        assert_eq!(retazos.actual.as_text(), Some(NO));
    }

    #[test]
    fn zones_are_stored_in_report_order() {
        let form = blank_form();
        let order: Vec<ZoneId> = form.zones.iter().map(|z| z.zone).collect();
        assert_eq!(order, ZoneId::ALL.to_vec());
        for zone in ZoneId::ALL {
            assert_eq!(form.zone(zone).zone, zone);
        }
    }

    #[test]
    fn set_actual_coerces_against_target() {
        let mut form = blank_form();
        form.apply(FormAction::SetActual {
            zone: ZoneId::Taquilleros,
            indicator: IndicatorId::Casillas,
            raw: "18".into(),
        });
        form.apply(FormAction::SetActual {
            zone: ZoneId::ZonaIIIV,
            indicator: IndicatorId::Apoyo,
            raw: YES.into(),
        });
        assert_eq!(
            form.actual(ZoneId::Taquilleros, IndicatorId::Casillas),
            Some(&IndicatorValue::Numeric(18.0))
        );
        assert_eq!(
            form.actual(ZoneId::ZonaIIIV, IndicatorId::Apoyo),
            Some(&IndicatorValue::yes())
        );
    }

    #[test]
    fn untracked_indicator_is_ignored() {
        let before = blank_form();
        let after = before.clone().reduce(FormAction::SetActual {
            zone: ZoneId::ZonaIIIV,
            indicator: IndicatorId::Casillas,
            raw: "3".into(),
        });
        assert_eq!(before, after);
    }

    #[test]
    fn header_fields_update_independently() {
        let form = blank_form()
            .reduce(FormAction::SetDate("2024-06-01".into()))
            .reduce(FormAction::SetResponsible("Rosa".into()));
        assert_eq!(form.date, "2024-06-01");
        assert_eq!(form.responsible, "Rosa");
        assert_eq!(form.zones, blank_form().zones);
    }

    #[test]
    fn reset_clears_readings_and_notes_only() {
        let form = blank_form()
            .reduce(FormAction::SetResponsible("Rosa".into()))
            .reduce(FormAction::SetNotes {
                zone: ZoneId::AlmacenChico,
                notes: "pasillo 3 bloqueado".into(),
            })
            .reduce(FormAction::SetActual {
                zone: ZoneId::AlmacenChico,
                indicator: IndicatorId::Senaletica,
                raw: "8".into(),
            })
            .reduce(FormAction::Reset);

        assert_eq!(form.responsible, "Rosa");
        assert_eq!(form.date, "2024-05-02");
        assert_eq!(form.zone(ZoneId::AlmacenChico).notes, "");
        assert_eq!(
            form.actual(ZoneId::AlmacenChico, IndicatorId::Senaletica),
            Some(&IndicatorValue::Numeric(0.0))
        );
    }

    #[test]
    fn configured_targets_flow_into_the_form() {
        let config =
            InspectionConfig::from_json(r#"{ "targets": { "zona_iii_v": { "senaletica": 9 } } }"#)
                .unwrap();
        let form = InspectionForm::new("2024-05-02", &config);
        let senaletica = form
            .zone(ZoneId::ZonaIIIV)
            .indicator(IndicatorId::Senaletica)
            .unwrap();
        assert_eq!(senaletica.target, IndicatorValue::Numeric(9.0));
    }

    #[test]
    fn today_is_iso_formatted() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
        assert_eq!(&today[7..8], "-");
    }
}
