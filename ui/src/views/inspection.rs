use dioxus::prelude::*;

use crate::components::{ActionsPanel, ZoneCard};
use crate::config::InspectionConfig;
use crate::core::format::format_badge;
use crate::core::{FormAction, InspectionForm, ReportSummary};
use crate::t;

/// The whole application: header fields, zone cards, summary and actions.
#[component]
pub fn InspectionPage() -> Element {
    let config = use_hook(InspectionConfig::load);
    let mut form = use_signal({
        let config = config.clone();
        move || InspectionForm::today(&config)
    });

    let snapshot = form();
    let summary = ReportSummary::from_form(&snapshot);
    let overall_class = summary.overall_band().css_class();
    let overall_badge = format_badge(summary.overall);
    let date = snapshot.date.clone();
    let responsible = snapshot.responsible.clone();

    let on_action = move |action: FormAction| form.with_mut(|f| f.apply(action));

    rsx! {
        main { class: "page page-inspection",
            section { class: "card inspection-header",
                div { class: "inspection-header__title",
                    div {
                        h1 { {t!("app-title")} }
                        p { class: "inspection-header__tagline", {t!("app-tagline")} }
                    }
                    div { class: "inspection-header__overall",
                        span { class: "field__label", {t!("summary-overall")} }
                        span { class: "status-badge status-badge--large {overall_class}", "{overall_badge}" }
                    }
                }

                div { class: "inspection-header__fields",
                    label { class: "field",
                        span { class: "field__label", {t!("field-date")} }
                        input {
                            class: "field__input",
                            r#type: "date",
                            value: "{date}",
                            oninput: move |evt: FormEvent| {
                                form.with_mut(|f| f.apply(FormAction::SetDate(evt.value())));
                            },
                        }
                    }
                    label { class: "field",
                        span { class: "field__label", {t!("field-responsible")} }
                        input {
                            class: "field__input",
                            r#type: "text",
                            placeholder: t!("field-responsible-placeholder"),
                            value: "{responsible}",
                            oninput: move |evt: FormEvent| {
                                form.with_mut(|f| f.apply(FormAction::SetResponsible(evt.value())));
                            },
                        }
                    }
                }
            }

            div { class: "zones",
                for record in snapshot.zones.iter() {
                    ZoneCard {
                        record: record.clone(),
                        score: summary.zone(record.zone).percentage,
                        on_action: on_action,
                    }
                }
            }

            ActionsPanel { form: form, config: config.clone() }
        }
    }
}
