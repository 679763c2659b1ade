use dioxus::prelude::*;
use tracing::warn;
use uuid::Uuid;

use crate::core::{
    build_config, build_series,
    format::format_steps,
    series::WEEK_LENGTH,
    settings::ChartSettings,
    ChartConfig, ChartOptions, ChartResult, DisplayMode, Goal, RandomSteps, Series, StepSample,
    StepSource, Tier,
};
use crate::t;

use super::scene::{BarMark, LineMarks, Marker, Marks, Scene, Viewport};
use super::tier_label;

/// Goal-aware step chart. Bars for a week, a filled line for longer spans.
///
/// Without `data` the chart draws a placeholder series, generated once per
/// change of its inputs.
#[component]
pub fn StepChart(
    #[props(default)] data: Option<Vec<StepSample>>,
    #[props(default = DisplayMode::Discrete)] mode: DisplayMode,
    #[props(default)] title: Option<String>,
    #[props(default)] period: Option<String>,
    #[props(default)] goal: Option<u32>,
    #[props(default)] show_labels: Option<bool>,
    #[props(default)] length: Option<usize>,
) -> Element {
    let settings = try_use_context::<ChartSettings>().unwrap_or_default();
    let goal_steps = goal.unwrap_or(settings.goal.steps());
    let options = ChartOptions {
        show_axis_labels: show_labels.unwrap_or(settings.show_labels),
    };

    let monthly_span = settings.monthly_span;

    let series = use_memo(use_reactive(
        (&data, &mode, &goal_steps, &length, &monthly_span),
        move |(data, mode, goal_steps, length, monthly_span)| {
            chart_series(
                data.as_deref(),
                mode,
                goal_steps,
                length,
                monthly_span,
                RandomSteps::thread_local(),
            )
            .inspect_err(|err| warn!(%err, "step chart input rejected"))
        },
    ));

    let fill_id = use_hook(|| format!("step-fill-{}", Uuid::new_v4().simple()));
    let active = use_signal(|| Option::<usize>::None);

    let title = title.unwrap_or_else(|| t!("chart-default-title"));
    let period = period.unwrap_or_else(|| match mode {
        DisplayMode::Discrete => t!("chart-period-weekly"),
        DisplayMode::Continuous => t!("chart-period-monthly"),
    });
    let goal_label = t!("chart-goal-label");
    let goal_value = format_steps(goal_steps);
    let steps_unit = t!("unit-steps");

    let body = match &*series.read() {
        Ok(series) => {
            let config = build_config(series, options);
            render_chart(&config, &fill_id, active)
        }
        Err(err) => {
            let message = t!("chart-error", reason = err.to_string());
            rsx! {
                p { class: "step-chart__error", "{message}" }
            }
        }
    };

    rsx! {
        section { class: "step-chart",
            div { class: "step-chart__header",
                h2 { class: "step-chart__title", "{title}" }
                span { class: "step-chart__period", "{period}" }
            }
            p { class: "step-chart__goal",
                "{goal_label} "
                strong { "{goal_value} {steps_unit}" }
            }
            {body}
            ul { class: "step-chart__legend",
                for tier in Tier::ALL {
                    li { class: "step-chart__legend-item {tier.css_class()}",
                        span {
                            class: "step-chart__legend-swatch",
                            style: "background:{tier.color().hex()}",
                        }
                        "{tier_label(tier)}"
                    }
                }
            }
        }
    }
}

/// Series for one chart instance. An explicit `length` wins; otherwise the
/// supplied samples or the mode's default span decide.
fn chart_series<S: StepSource>(
    data: Option<&[StepSample]>,
    mode: DisplayMode,
    goal_steps: u32,
    length: Option<usize>,
    monthly_span: usize,
    source: S,
) -> ChartResult<Series> {
    let goal = Goal::new(goal_steps)?;
    let length = length.unwrap_or_else(|| default_length(mode, data, monthly_span));
    build_series(data, mode, length, goal, source)
}

fn default_length(mode: DisplayMode, data: Option<&[StepSample]>, monthly_span: usize) -> usize {
    match data {
        Some(samples) if !samples.is_empty() => samples.len(),
        _ => match mode {
            DisplayMode::Discrete => WEEK_LENGTH,
            DisplayMode::Continuous => monthly_span,
        },
    }
}

fn render_chart(config: &ChartConfig, fill_id: &str, active: Signal<Option<usize>>) -> Element {
    let scene = Scene::layout(config, Viewport::default());
    let view_box = scene.view_box();
    let left = scene.viewport.plot_left();
    let right = scene.viewport.plot_right();
    let tick_x = left - 6.0;
    let rule_dash = match &scene.marks {
        Marks::Line(line) if line.dashed_rules => "4 4",
        _ => "none",
    };

    let marks = match &scene.marks {
        Marks::Bars(bars) => rsx! {
            {bars.iter().map(|bar| render_bar(bar, active))}
        },
        Marks::Line(line) => render_line(line, fill_id, active),
    };

    let tooltip = active().and_then(|index| config.tooltip(index).cloned());
    let clipped_note = config.has_clipped_points().then(|| t!("chart-clipped-note"));

    rsx! {
        svg {
            class: "step-chart__canvas",
            view_box: "{view_box}",
            width: "100%",
            role: "img",
            g { class: "step-chart__rules",
                for rule in scene.gridlines.iter() {
                    line {
                        x1: "{left}",
                        x2: "{right}",
                        y1: "{rule.y}",
                        y2: "{rule.y}",
                        stroke: "#DEDEDE",
                        stroke_dasharray: "{rule_dash}",
                    }
                    text {
                        class: "step-chart__axis-label",
                        x: "{tick_x}",
                        y: "{rule.y}",
                        dy: "4",
                        text_anchor: "end",
                        "{rule.label}"
                    }
                }
            }
            {marks}
            g { class: "step-chart__x-labels",
                for label in scene.x_labels.iter() {
                    text {
                        class: "step-chart__axis-label",
                        x: "{label.x}",
                        y: "{label.y}",
                        text_anchor: "middle",
                        "{label.text}"
                    }
                }
            }
        }
        if let Some(tip) = tooltip {
            div { class: "step-chart__tooltip", role: "status",
                strong { class: "step-chart__tooltip-primary", "{tip.primary}" }
                span { class: "step-chart__tooltip-secondary", "{tip.secondary}" }
                if let Some(caption) = tip.caption {
                    span { class: "step-chart__tooltip-caption", "{caption}" }
                }
            }
        }
        if let Some(note) = clipped_note {
            p { class: "step-chart__note", "{note}" }
        }
    }
}

fn render_bar(bar: &BarMark, mut active: Signal<Option<usize>>) -> Element {
    let index = bar.index;
    let label_y = bar.y - 4.0;
    let center = bar.x + bar.width / 2.0;
    let class = if bar.clipped {
        "step-chart__bar step-chart__bar--clipped"
    } else {
        "step-chart__bar"
    };

    rsx! {
        g {
            class: "{class}",
            onmouseenter: move |_| active.set(Some(index)),
            onmouseleave: move |_| active.set(None),
            onclick: move |_| {
                let next = if active() == Some(index) { None } else { Some(index) };
                active.set(next);
            },
            rect {
                x: "{bar.x}",
                y: "{bar.y}",
                width: "{bar.width}",
                height: "{bar.height}",
                rx: "{bar.corner_radius}",
                fill: "{bar.fill}",
            }
            text {
                class: "step-chart__bar-label",
                x: "{center}",
                y: "{label_y}",
                text_anchor: "middle",
                "{bar.top_label}"
            }
        }
    }
}

fn render_line(line: &LineMarks, fill_id: &str, active: Signal<Option<usize>>) -> Element {
    let fill_ref = format!("url(#{fill_id})");

    rsx! {
        defs {
            linearGradient { id: "{fill_id}", x1: "0", y1: "0", x2: "0", y2: "1",
                stop { offset: "0%", stop_color: "{line.stroke}", stop_opacity: "0.3" }
                stop { offset: "100%", stop_color: "{line.stroke}", stop_opacity: "0.01" }
            }
        }
        if let Some(area) = line.area.as_ref() {
            path { class: "step-chart__area", d: "{area}", fill: "{fill_ref}", stroke: "none" }
        }
        path {
            class: "step-chart__line",
            d: "{line.path}",
            fill: "none",
            stroke: "{line.stroke}",
            stroke_width: "3",
        }
        {line.markers.iter().map(|marker| render_marker(marker, active))}
    }
}

fn render_marker(marker: &Marker, mut active: Signal<Option<usize>>) -> Element {
    let index = marker.index;
    let label_y = marker.cy - 8.0;

    rsx! {
        g { class: "step-chart__marker",
            onmouseenter: move |_| active.set(Some(index)),
            onmouseleave: move |_| active.set(None),
            circle { cx: "{marker.cx}", cy: "{marker.cy}", r: "3.5", fill: "{marker.fill}" }
            if let Some(label) = marker.top_label.as_ref() {
                text {
                    class: "step-chart__point-label",
                    x: "{marker.cx}",
                    y: "{label_y}",
                    text_anchor: "middle",
                    "{label}"
                }
            }
        }
    }
}
