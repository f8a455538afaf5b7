use dioxus::prelude::*;

use crate::core::format::{format_badge, format_percent};
use crate::core::score::percentage;
use crate::core::value::{NO, YES};
use crate::core::{FormAction, Indicator, StatusBand, ZoneId, ZoneRecord};
use crate::t;

/// One zone: an input per indicator, its score and the free-text notes.
#[component]
pub fn ZoneCard(record: ZoneRecord, score: u8, on_action: EventHandler<FormAction>) -> Element {
    let zone = record.zone;
    let label = zone.label();
    let zone_class = zone.css_class();
    let band_class = StatusBand::classify(score).css_class();
    let badge = format_badge(score);
    let notes = record.notes.clone();

    rsx! {
        article { class: "card zone-card {zone_class}",
            header { class: "zone-card__header",
                h2 { "{label}" }
                span { class: "status-badge {band_class}", "{badge}" }
            }

            ul { class: "zone-card__indicators",
                for indicator in record.indicators.iter() {
                    {render_indicator_row(zone, indicator, on_action)}
                }
            }

            label { class: "field zone-card__notes",
                span { class: "field__label", {t!("field-notes")} }
                textarea {
                    class: "field__input",
                    rows: "2",
                    placeholder: t!("field-notes-placeholder"),
                    value: "{notes}",
                    oninput: move |evt: FormEvent| {
                        on_action.call(FormAction::SetNotes {
                            zone,
                            notes: evt.value(),
                        });
                    },
                }
            }
        }
    }
}

fn render_indicator_row(
    zone: ZoneId,
    indicator: &Indicator,
    on_action: EventHandler<FormAction>,
) -> Element {
    let id = indicator.id;
    let name = id.label();
    let target = indicator.target.to_string();
    let actual = indicator.actual.to_string();
    let score = percentage(&indicator.actual, &indicator.target);
    let score_text = format_percent(score);
    let band_class = StatusBand::classify(score).css_class();
    let numeric = indicator.target.is_numeric();

    let on_input = move |evt: FormEvent| {
        on_action.call(FormAction::SetActual {
            zone,
            indicator: id,
            raw: evt.value(),
        });
    };

    rsx! {
        li { class: "zone-card__row",
            span { class: "zone-card__name", "{name}" }
            span { class: "zone-card__target",
                span { class: "field__label", {t!("indicator-target")} }
                " {target}"
            }
            if numeric {
                input {
                    class: "field__input zone-card__actual",
                    r#type: "number",
                    min: "0",
                    step: "1",
                    aria_label: t!("indicator-actual"),
                    value: "{actual}",
                    oninput: on_input,
                }
            } else {
                select {
                    class: "field__input zone-card__actual",
                    aria_label: t!("indicator-actual"),
                    value: "{actual}",
                    onchange: on_input,
                    option { value: YES, selected: actual == YES, {YES} }
                    option { value: NO, selected: actual == NO, {NO} }
                }
            }
            span { class: "zone-card__percent {band_class}", "{score_text}" }
        }
    }
}
