use dioxus::prelude::*;
use tracing::warn;

use crate::activity::{ActivitySummaryCard, StepChart};
use crate::core::{
    build_series, settings::ChartSettings, ActivitySummary, DisplayMode, RandomSteps,
};

#[component]
pub fn Analytics() -> Element {
    // Subscribe to global language code (if provided) so this view re-renders
    // immediately when the locale changes elsewhere.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let settings = try_use_context::<ChartSettings>().unwrap_or_default();

    // One placeholder month per mount, shared by the line chart and the
    // summary card so both describe the same days.
    let monthly = use_hook(move || {
        build_series(
            None,
            DisplayMode::Continuous,
            settings.monthly_span,
            settings.goal,
            RandomSteps::thread_local(),
        )
        .inspect_err(|err| warn!(%err, "monthly placeholder rejected"))
        .ok()
    });

    let monthly_samples = monthly
        .as_ref()
        .map(|series| series.samples())
        .unwrap_or_default();
    let summary = monthly.as_ref().map(ActivitySummary::from_series);

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-analytics",
            h1 { {crate::t!("page-analytics-title")} }

            StepChart {
                mode: DisplayMode::Discrete,
                title: crate::t!("analytics-weekly-title"),
            }

            StepChart {
                data: monthly_samples,
                mode: DisplayMode::Continuous,
                title: crate::t!("analytics-monthly-title"),
                length: settings.monthly_span,
            }

            if let Some(summary) = summary {
                ActivitySummaryCard { summary, days: settings.monthly_span }
            } else {
                p { class: "activity-summary__placeholder", {crate::t!("summary-unavailable")} }
            }
        }
    }
}
