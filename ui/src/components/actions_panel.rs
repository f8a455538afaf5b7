use dioxus::prelude::*;
use tracing::warn;

use crate::config::InspectionConfig;
use crate::core::csv::build_csv;
use crate::core::link::{export_filename, report_link};
use crate::core::report::{compose_message, ReportSummary};
use crate::core::{FormAction, InspectionForm};
use crate::dispatch::{self, Delivery, DispatchError};
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum DispatchStatus {
    Idle,
    Done(String),
    Error(String),
}

#[component]
pub fn ActionsPanel(form: Signal<InspectionForm>, config: InspectionConfig) -> Element {
    let status = use_signal(|| DispatchStatus::Idle);

    let feedback = match &status() {
        DispatchStatus::Idle => None,
        DispatchStatus::Done(message) => Some((
            "actions__feedback actions__feedback--success".to_string(),
            format!("✅ {message}"),
        )),
        DispatchStatus::Error(err) => Some((
            "actions__feedback actions__feedback--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let send_handler = {
        let messaging = config.messaging.clone();
        let mut status_signal = status;
        move |_| {
            let snapshot = form();
            let summary = ReportSummary::from_form(&snapshot);
            let message = compose_message(&snapshot, &summary);
            let url = report_link(&messaging, &message);
            async move {
                let outcome = dispatch::open_report_link(&url).await;
                status_signal.set(settle(outcome));
            }
        }
    };

    let export_handler = {
        let export = config.export.clone();
        let mut status_signal = status;
        move |_| {
            let snapshot = form();
            let csv = build_csv(&snapshot, export.quoting);
            let filename = export_filename(&export.filename_prefix, &snapshot.date);
            status_signal.set(settle(dispatch::download_csv(&filename, &csv)));
        }
    };

    let reset_handler = {
        let mut form_signal = form;
        let mut status_signal = status;
        move |_| {
            form_signal.with_mut(|f| f.apply(FormAction::Reset));
            status_signal.set(DispatchStatus::Done(t!("status-reset")));
        }
    };

    rsx! {
        section { class: "card actions",
            h2 { {t!("actions-title")} }

            div { class: "actions__buttons",
                button {
                    r#type: "button",
                    class: "button button--send",
                    onclick: send_handler,
                    {t!("action-send")}
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: export_handler,
                    {t!("action-export")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: reset_handler,
                    {t!("action-reset")}
                }
            }

            p { class: "actions__hint", {t!("actions-hint")} }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

fn settle(outcome: Result<Delivery, DispatchError>) -> DispatchStatus {
    match outcome {
        Ok(delivery) => DispatchStatus::Done(describe(delivery)),
        Err(err) => {
            warn!(%err, "dispatch failed");
            DispatchStatus::Error(t!("status-error", error = err.to_string()))
        }
    }
}

fn describe(delivery: Delivery) -> String {
    match delivery {
        Delivery::Opened => t!("status-link-opened"),
        Delivery::OpenedAndCopied => t!("status-link-copied"),
        Delivery::DownloadStarted => t!("status-download-started"),
        Delivery::Saved(path) => t!("status-saved", path = path),
    }
}
