use dioxus::prelude::*;
use tracing::debug;

use crate::components::{screen_link, Screen};

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(crate::i18n::current_language);

    debug!(lang = %_lang_current, "Home render");

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-tagline")} }

            div { class: "page-home__actions",
                {screen_link(Screen::StepCounter, &crate::t!("home-open-steps"), "button button--primary")}
                {screen_link(Screen::Analytics, &crate::t!("home-view-analytics"), "button button--accent")}
            }
        }
    }
}
