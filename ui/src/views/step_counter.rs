use dioxus::prelude::*;

use crate::activity::StepChart;
use crate::core::{DisplayMode, StepSample};

/// The week shown on the step counter until a real data source exists.
pub(crate) fn sample_week() -> Vec<StepSample> {
    [
        ("Mon", 7500),
        ("Tue", 9200),
        ("Wed", 6800),
        ("Thu", 10300),
        ("Fri", 8700),
        ("Sat", 11500),
        ("Sun", 5200),
    ]
    .into_iter()
    .map(|(day, steps)| StepSample::new(day, steps))
    .collect()
}

#[component]
pub fn StepCounter() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-steps",
            h1 { {crate::t!("page-steps-title")} }
            p { {crate::t!("page-steps-intro")} }
            StepChart {
                data: sample_week(),
                mode: DisplayMode::Discrete,
                title: crate::t!("page-steps-chart-title"),
            }
        }
    }
}
