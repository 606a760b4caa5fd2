use dioxus::prelude::*;

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    println!("[i18n] Home render (lang_marker={lang})");
}

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    #[cfg(debug_assertions)]
    {
        log_home_render(&_lang_current);
    }

    let nav = navigator();

    rsx! {
        section { class: "page page-home",
            span { class: "page-home__badge", {crate::t!("home-badge")} }
            h1 { {crate::t!("home-title")} }
            p { class: "page-home__lede", {crate::t!("home-lede")} }

            ul { class: "page-home__features",
                li { {crate::t!("home-feature-skills")} }
                li { {crate::t!("home-feature-culture")} }
                li { {crate::t!("home-feature-report")} }
            }

            div { class: "page-home__stats",
                div { class: "page-home__stat",
                    strong { "500+" }
                    span { {crate::t!("home-stat-paths")} }
                }
                div { class: "page-home__stat",
                    strong { "4.9⭐" }
                    span { {crate::t!("home-stat-rating")} }
                }
            }

            button {
                r#type: "button",
                class: "button button--primary page-home__cta",
                onclick: move |_| {
                    let _ = nav.push("/upload-data".to_string());
                },
                {crate::t!("home-cta")}
            }
        }
    }
}
