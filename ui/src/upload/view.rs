//! The upload form controller.
//!
//! Owns the draft, routes file picks through the shared modal, applies the
//! constraint table on every pick and again at submit, and hands a clean
//! draft to the API client. Field values survive a failed submit; only a
//! successful submission resets the draft.

use dioxus::prelude::*;

use crate::components::notice::{self, Notice, NoticeBanner, NoticeKind};
use crate::components::UploadModal;
use crate::core::{config, format};

use super::constraints::{self, FieldId};
use super::draft::UploadDraft;
use super::validation::{self, FieldError};

fn modal_config(field: FieldId) -> (&'static str, &'static str, &'static str) {
    match field {
        FieldId::Resume => (
            "Upload your resume",
            "PDF only, up to 5 MB.",
            ".pdf,application/pdf",
        ),
        FieldId::LinkedinProfile => (
            "Upload your LinkedIn profile export",
            "Plain-text (.txt) only, up to 2 MB.",
            ".txt,text/plain",
        ),
        FieldId::CompanyData => (
            "Upload company data",
            "PDF only, up to 10 MB.",
            ".pdf,application/pdf",
        ),
        _ => ("Upload a file", "", "*"),
    }
}

fn error_for(errors: &[FieldError], field: FieldId) -> Option<String> {
    errors
        .iter()
        .find(|err| err.field == field)
        .map(|err| err.message.clone())
}

#[component]
pub fn UploadForm() -> Element {
    let mut draft = use_signal(UploadDraft::default);
    let mut staged_url = use_signal(String::new);
    let mut field_errors = use_signal(Vec::<FieldError>::new);
    let mut submitting = use_signal(|| false);
    let mut active_modal = use_signal(|| Option::<FieldId>::None);
    let notice_slot = use_signal(|| Option::<Notice>::None);
    let nav = navigator();

    let mut add_staged_url = move || {
        let raw = staged_url.peek().clone();
        let outcome = draft.write().add_company_url(&raw);
        match outcome {
            Ok(()) => {
                staged_url.set(String::new());
                notice::announce(notice_slot, NoticeKind::Success, "URL added successfully!");
            }
            Err(err) => notice::announce(notice_slot, NoticeKind::Error, err.message()),
        }
    };

    let on_modal_select = move |file: api::FilePart| {
        let Some(field) = *active_modal.peek() else {
            return;
        };
        let Some(rule) = constraints::file_rule(field) else {
            return;
        };

        if let Some(err) = validation::check_file(field, Some(&file), &rule) {
            notice::announce(notice_slot, NoticeKind::Error, err.message);
            return;
        }

        let summary = format!(
            "{} uploaded successfully! ({})",
            file.file_name,
            format::format_bytes(file.size_bytes())
        );
        draft.with_mut(|d| match field {
            FieldId::Resume => d.resume = Some(file),
            FieldId::LinkedinProfile => d.linkedin_profile = Some(file),
            FieldId::CompanyData => d.company_data = Some(file),
            _ => {}
        });
        notice::announce(notice_slot, NoticeKind::Success, summary);
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if *submitting.peek() {
            return;
        }

        let snapshot = draft.peek().clone();
        match validation::prepare_submission(&snapshot) {
            Err(errors) => {
                let summary = errors
                    .iter()
                    .map(|err| err.message.as_str())
                    .collect::<Vec<_>>()
                    .join(" · ");
                field_errors.set(errors);
                notice::announce(notice_slot, NoticeKind::Error, summary);
            }
            Ok(parts) => {
                field_errors.set(Vec::new());
                submitting.set(true);
                notice::announce(notice_slot, NoticeKind::Info, "Uploading your data…");

                spawn(async move {
                    let client = config::api_client();
                    match client.analyze_compatibility(parts).await {
                        Ok(receipt) => {
                            notice::announce(
                                notice_slot,
                                NoticeKind::Success,
                                "Data uploaded and analyzed successfully!",
                            );
                            draft.set(UploadDraft::default());
                            let _ = nav.push(format!("/dashboard/{}", receipt.analysis_id));
                        }
                        Err(err) => {
                            // Draft is kept so the user can correct and resubmit.
                            notice::announce(notice_slot, NoticeKind::Error, err.to_string());
                        }
                    }
                    submitting.set(false);
                });
            }
        }
    };

    let current = draft();
    let urls = current.company_urls.clone();
    let url_count = urls.len();
    let errors = field_errors();
    let goals_len = current.career_goals.trim().chars().count();
    let jobs_len = current.job_descriptions.trim().chars().count();

    rsx! {
        section { class: "page upload-form",
            h1 { "Start Your Career Compatibility Evaluation" }

            NoticeBanner { notice: notice_slot }

            form { class: "upload-form__fields", onsubmit: on_submit,

                FileField {
                    field: FieldId::Resume,
                    label: "Resume File (PDF) *",
                    picked: current.resume.clone(),
                    error: error_for(&errors, FieldId::Resume),
                    active_modal,
                }

                div { class: "form-field",
                    label { class: "field-label", r#for: "career-goals", "Career Goals *" }
                    textarea {
                        id: "career-goals",
                        class: "field-input",
                        rows: 4,
                        placeholder: "Describe where you want your career to go (50-1000 characters)…",
                        value: "{current.career_goals}",
                        oninput: move |evt| draft.with_mut(|d| d.career_goals = evt.value()),
                    }
                    span { class: "field-hint", "{goals_len} characters" }
                    if let Some(message) = error_for(&errors, FieldId::CareerGoals) {
                        span { class: "field-error", "{message}" }
                    }
                }

                FileField {
                    field: FieldId::LinkedinProfile,
                    label: "LinkedIn Profile (TXT) *",
                    picked: current.linkedin_profile.clone(),
                    error: error_for(&errors, FieldId::LinkedinProfile),
                    active_modal,
                }

                FileField {
                    field: FieldId::CompanyData,
                    label: "Company Data (PDF) *",
                    picked: current.company_data.clone(),
                    error: error_for(&errors, FieldId::CompanyData),
                    active_modal,
                }

                div { class: "form-field",
                    label { class: "field-label", r#for: "job-descriptions", "Job Descriptions *" }
                    textarea {
                        id: "job-descriptions",
                        class: "field-input",
                        rows: 6,
                        placeholder: "Paste the job descriptions you want to be evaluated against (100-5000 characters)…",
                        value: "{current.job_descriptions}",
                        oninput: move |evt| draft.with_mut(|d| d.job_descriptions = evt.value()),
                    }
                    span { class: "field-hint", "{jobs_len} characters" }
                    if let Some(message) = error_for(&errors, FieldId::JobDescriptions) {
                        span { class: "field-error", "{message}" }
                    }
                }

                div { class: "form-field upload-form__urls",
                    label { class: "field-label", r#for: "company-url", "Company URLs * (1-10)" }
                    div { class: "upload-form__url-entry",
                        input {
                            id: "company-url",
                            class: "field-input",
                            r#type: "text",
                            placeholder: "https://company.example",
                            value: "{staged_url}",
                            oninput: move |evt| staged_url.set(evt.value()),
                            onkeydown: move |evt| {
                                if evt.key() == Key::Enter {
                                    evt.prevent_default();
                                    add_staged_url();
                                }
                            },
                        }
                        button {
                            r#type: "button",
                            class: "button button--accent",
                            onclick: move |_| add_staged_url(),
                            "Add URL"
                        }
                    }
                    span { class: "field-hint", "{url_count}/10 added" }
                    if let Some(message) = error_for(&errors, FieldId::CompanyUrls) {
                        span { class: "field-error", "{message}" }
                    }

                    if !urls.is_empty() {
                        ul { class: "upload-form__url-list",
                            for url in urls.into_iter() {
                                li { key: "{url}", class: "upload-form__url-item",
                                    span { class: "upload-form__url-text", "{url}" }
                                    button {
                                        r#type: "button",
                                        class: "upload-form__url-remove",
                                        aria_label: "Remove {url}",
                                        onclick: {
                                            let url = url.clone();
                                            move |_| {
                                                draft.write().remove_company_url(&url);
                                                notice::announce(notice_slot, NoticeKind::Info, "URL removed");
                                            }
                                        },
                                        "×"
                                    }
                                }
                            }
                        }
                    }
                }

                button {
                    r#type: "submit",
                    class: "button button--primary upload-form__submit",
                    disabled: submitting(),
                    if submitting() { "Analyzing…" } else { "Start Evaluation" }
                }
            }

            if let Some(field) = active_modal() {
                {
                    let (title, description, accept) = modal_config(field);
                    rsx! {
                        UploadModal {
                            title: "{title}",
                            description: "{description}",
                            accept: "{accept}",
                            on_select: on_modal_select,
                            on_close: move |_| active_modal.set(None),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FileField(
    field: FieldId,
    label: String,
    picked: Option<api::FilePart>,
    error: Option<String>,
    active_modal: Signal<Option<FieldId>>,
) -> Element {
    let summary = picked
        .as_ref()
        .map(|file| format!("{} ({})", file.file_name, format::format_bytes(file.size_bytes())));
    let mut modal = active_modal;

    rsx! {
        div { class: "form-field",
            span { class: "field-label", "{label}" }
            button {
                r#type: "button",
                class: "button upload-form__picker",
                onclick: move |_| modal.set(Some(field)),
                match &summary {
                    Some(text) => rsx! { span { class: "upload-form__picked", "{text}" } },
                    None => rsx! { span { "Choose file…" } },
                }
            }
            if let Some(message) = error {
                span { class: "field-error", "{message}" }
            }
        }
    }
}
