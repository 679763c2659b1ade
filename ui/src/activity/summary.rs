use dioxus::prelude::*;

use crate::core::{format, ActivitySummary};
use crate::t;

#[component]
pub fn ActivitySummaryCard(summary: ActivitySummary, days: usize) -> Element {
    let heading = t!("summary-title");

    rsx! {
        section { class: "activity-summary",
            h3 { class: "activity-summary__title", "{heading}" }
            {render_summary(summary, days)}
        }
    }
}

fn render_summary(summary: ActivitySummary, days: usize) -> Element {
    let steps = format::format_steps(summary.average_steps);
    let calories = format::format_steps(summary.average_calories);
    let active = format!("{}/{days}", summary.active_days);
    let goal_days = summary.goal_days;

    rsx! {
        div { class: "activity-summary__row",
            div { class: "activity-summary__item",
                strong { class: "activity-summary__value", "{steps}" }
                span { class: "activity-summary__label", {t!("summary-avg-steps")} }
            }
            div { class: "activity-summary__item",
                strong { class: "activity-summary__value", "{calories}" }
                span { class: "activity-summary__label", {t!("summary-avg-calories")} }
            }
            div { class: "activity-summary__item",
                strong { class: "activity-summary__value", "{active}" }
                span { class: "activity-summary__label", {t!("summary-active-days")} }
            }
            div { class: "activity-summary__item",
                strong { class: "activity-summary__value", "{goal_days}" }
                span { class: "activity-summary__label", {t!("summary-goal-days")} }
            }
        }
    }
}
