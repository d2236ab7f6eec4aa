use api::SafetyBackend;
use dioxus::prelude::*;
use store::Severity;

use crate::incident_form::IncidentForm;
use crate::views::ModalOverlay;
use crate::{use_backend, use_notifier};

/// Dialog for reporting a safety concern.
///
/// Render it only while open; `on_close` is called on cancel and after a
/// successful report, whose message goes to the notice broadcaster.
#[component]
pub fn ReportIncidentModal(on_close: EventHandler<()>) -> Element {
    let backend = use_backend();
    let mut notifier = use_notifier();
    let mut form = use_signal(IncidentForm::default);

    let mut handle_close = move || {
        if form.read().is_submitting() {
            return;
        }
        form.write().reset();
        on_close.call(());
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = match form.write().begin_submit() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::debug!("report not submitted: {e}");
                return;
            }
        };
        let backend = backend.clone();
        spawn(async move {
            let result = backend.report_incident(payload).await;
            let outcome = form.write().finish_submit(result);
            if let Some(message) = outcome {
                notifier.success(message);
                on_close.call(());
            }
        });
    };

    let submitting = form.read().is_submitting();
    let error = form.read().error().map(str::to_string);

    rsx! {
        ModalOverlay {
            on_close: move |_| handle_close(),
            div {
                class: "modal-body",
                role: "dialog",
                aria_labelledby: "report-title",
                h2 { id: "report-title", class: "modal-title", "Report a Safety Concern" }
                p {
                    class: "modal-lead",
                    "Please provide details about the incident or concern. Your report helps keep the community safe."
                }

                form {
                    onsubmit: handle_submit,

                    div {
                        class: "form-field",
                        label { r#for: "report-description", "Description of Incident" }
                        textarea {
                            id: "report-description",
                            class: "form-input",
                            rows: 3,
                            required: true,
                            disabled: submitting,
                            value: form.read().description.clone(),
                            oninput: move |evt: FormEvent| form.write().description = evt.value(),
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "report-location", "Location (e.g., address, landmark)" }
                        input {
                            id: "report-location",
                            class: "form-input",
                            r#type: "text",
                            required: true,
                            disabled: submitting,
                            value: form.read().location.clone(),
                            oninput: move |evt: FormEvent| form.write().location = evt.value(),
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "report-severity", "Severity" }
                        select {
                            id: "report-severity",
                            class: "form-input",
                            disabled: submitting,
                            value: form.read().severity.as_str(),
                            onchange: move |evt: FormEvent| {
                                if let Ok(severity) = evt.value().parse::<Severity>() {
                                    form.write().severity = severity;
                                }
                            },
                            for severity in Severity::ALL {
                                option { key: "{severity}", value: severity.as_str(), "{severity}" }
                            }
                        }
                    }

                    if let Some(error) = error {
                        div { class: "inline-error", role: "alert", "{error}" }
                    }

                    div {
                        class: "form-actions",
                        button {
                            r#type: "button",
                            class: "btn btn-outline",
                            disabled: submitting,
                            onclick: move |_| handle_close(),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: submitting,
                            if submitting { "Submitting..." } else { "Submit Report" }
                        }
                    }
                }
            }
        }
    }
}
