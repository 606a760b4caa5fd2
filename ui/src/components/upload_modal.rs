//! Generic single-file picker modal.
//!
//! Presents a drop target and a browse input; a later drop or selection
//! replaces the earlier pick. On confirm it hands the chosen file to the
//! caller and closes; cancel or backdrop dismissal closes without invoking
//! the callback. Validation is entirely the caller's concern.

use std::sync::Arc;

use api::FilePart;
use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;

fn infer_mime(file_name: &str) -> &'static str {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".txt") {
        "text/plain"
    } else {
        "application/octet-stream"
    }
}

fn capture_first_file(engine: Arc<dyn FileEngine>, mut selected: Signal<Option<FilePart>>) {
    spawn(async move {
        let Some(name) = engine.files().first().cloned() else {
            return;
        };
        if let Some(bytes) = engine.read_file(&name).await {
            selected.set(Some(FilePart {
                mime: infer_mime(&name).to_string(),
                file_name: name,
                bytes,
            }));
        }
    });
}

#[component]
pub fn UploadModal(
    title: String,
    description: String,
    accept: String,
    on_select: EventHandler<FilePart>,
    on_close: EventHandler<()>,
) -> Element {
    let mut drag_active = use_signal(|| false);
    let selected = use_signal(|| Option::<FilePart>::None);

    let area_class = if drag_active() {
        "upload-modal__area upload-modal__area--active"
    } else {
        "upload-modal__area"
    };
    let picked_label = selected()
        .map(|file| file.file_name)
        .unwrap_or_else(|| "Drag a file here to upload.".to_string());
    let can_confirm = selected().is_some();

    rsx! {
        div {
            class: "upload-modal__overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "upload-modal",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "upload-modal__header",
                    h3 { "{title}" }
                    button {
                        r#type: "button",
                        class: "upload-modal__close",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                p { class: "upload-modal__description", "{description}" }

                label {
                    class: "{area_class}",
                    ondragover: move |evt| {
                        evt.prevent_default();
                        drag_active.set(true);
                    },
                    ondragleave: move |_| drag_active.set(false),
                    ondrop: move |evt| {
                        evt.prevent_default();
                        drag_active.set(false);
                        if let Some(engine) = evt.files() {
                            capture_first_file(engine, selected);
                        }
                    },

                    span { class: "upload-modal__area-title", "{picked_label}" }
                    span { class: "upload-modal__area-hint",
                        "Alternatively, select a file by clicking here"
                    }
                    input {
                        r#type: "file",
                        accept: "{accept}",
                        class: "upload-modal__input",
                        onchange: move |evt| {
                            if let Some(engine) = evt.files() {
                                capture_first_file(engine, selected);
                            }
                        },
                    }
                }

                div { class: "upload-modal__footer",
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: !can_confirm,
                        onclick: move |_| {
                            if let Some(file) = selected() {
                                on_select.call(file);
                                on_close.call(());
                            }
                        },
                        "Upload"
                    }
                }
            }
        }
    }
}
