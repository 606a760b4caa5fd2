use dioxus::prelude::*;

use crate::dashboard::Dashboard;

#[component]
pub fn DashboardPage(analysis_id: String) -> Element {
    rsx! {
        Dashboard { analysis_id }
    }
}
