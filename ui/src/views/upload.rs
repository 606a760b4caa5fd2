use dioxus::prelude::*;

use crate::upload::UploadForm;

#[component]
pub fn UploadData() -> Element {
    rsx! {
        UploadForm {}
    }
}
