//! Translates an engine-agnostic [`ChartConfig`] into SVG-ready geometry.
//!
//! This is the only place that knows about pixels. The chart component
//! renders a [`Scene`] verbatim; swapping the drawing backend means
//! replacing this module and the component, never the core.

use crate::core::chart::{ChartConfig, ChartLayout};
use crate::core::format::format_axis_tick;

/// Drawing surface in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pad_left: f32,
    pub pad_right: f32,
    pub pad_top: f32,
    pub pad_bottom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 250.0,
            pad_left: 64.0,
            pad_right: 12.0,
            pad_top: 20.0,
            pad_bottom: 28.0,
        }
    }
}

impl Viewport {
    pub fn plot_left(&self) -> f32 {
        self.pad_left
    }

    pub fn plot_right(&self) -> f32 {
        self.width - self.pad_right
    }

    pub fn plot_top(&self) -> f32 {
        self.pad_top
    }

    pub fn plot_bottom(&self) -> f32 {
        self.height - self.pad_bottom
    }

    pub fn plot_width(&self) -> f32 {
        (self.plot_right() - self.plot_left()).max(0.0)
    }

    pub fn plot_height(&self) -> f32 {
        (self.plot_bottom() - self.plot_top()).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gridline {
    pub y: f32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarMark {
    pub index: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub fill: &'static str,
    pub top_label: String,
    pub clipped: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub index: usize,
    pub cx: f32,
    pub cy: f32,
    pub fill: &'static str,
    /// Value shown above highlighted points.
    pub top_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineMarks {
    pub stroke: &'static str,
    pub path: String,
    /// Closed outline of the area under the line.
    pub area: Option<String>,
    pub markers: Vec<Marker>,
    pub dashed_rules: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Marks {
    Bars(Vec<BarMark>),
    Line(LineMarks),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    pub gridlines: Vec<Gridline>,
    pub x_labels: Vec<AxisLabel>,
    pub marks: Marks,
}

impl Scene {
    pub fn layout(config: &ChartConfig, viewport: Viewport) -> Self {
        let scale = ValueScale {
            axis_max: config.axis_max.max(1) as f32,
            top: viewport.plot_top(),
            height: viewport.plot_height(),
        };

        let gridlines = (0..=config.sections)
            .map(|section| {
                let value = config.section_value(section);
                Gridline {
                    y: scale.y(value),
                    label: format!("{}{}", format_axis_tick(value), config.y_axis_suffix),
                }
            })
            .collect();

        let centers = match config.layout {
            ChartLayout::Bar(bar) => {
                let bar_width = viewport.plot_width() * bar.bar_width_ratio;
                let spacing = viewport.plot_width() * bar.spacing_ratio;
                bar_centers(&viewport, config.points.len(), bar_width, spacing)
            }
            ChartLayout::Line(_) => line_xs(&viewport, config.points.len()),
        };

        let label_y = viewport.plot_bottom() + viewport.pad_bottom * 0.7;
        let x_labels = config
            .x_axis_labels
            .iter()
            .zip(centers.iter())
            .map(|(text, x)| AxisLabel {
                x: *x,
                y: label_y,
                text: text.clone(),
            })
            .collect();

        let marks = match config.layout {
            ChartLayout::Bar(bar) => {
                let width = viewport.plot_width() * bar.bar_width_ratio;
                let radius = if bar.rounded_top { width / 4.0 } else { 0.0 };
                let bars = config
                    .points
                    .iter()
                    .enumerate()
                    .zip(centers.iter())
                    .map(|((index, point), center)| {
                        let y = scale.y(point.display_value);
                        BarMark {
                            index,
                            x: center - width / 2.0,
                            y,
                            width,
                            height: viewport.plot_bottom() - y,
                            corner_radius: radius,
                            fill: point.color.hex(),
                            top_label: format_axis_tick(point.value),
                            clipped: point.clipped,
                        }
                    })
                    .collect();
                Marks::Bars(bars)
            }
            ChartLayout::Line(line) => {
                let markers: Vec<Marker> = config
                    .points
                    .iter()
                    .enumerate()
                    .zip(centers.iter())
                    .map(|((index, point), cx)| Marker {
                        index,
                        cx: *cx,
                        cy: scale.y(point.display_value),
                        fill: point.color.hex(),
                        top_label: point.highlighted.then(|| format_axis_tick(point.value)),
                    })
                    .collect();

                let path = polyline(&markers);
                let area = match (line.area_fill, markers.first(), markers.last()) {
                    (true, Some(first), Some(last)) => Some(format!(
                        "{path} L{:.1},{:.1} L{:.1},{:.1} Z",
                        last.cx,
                        viewport.plot_bottom(),
                        first.cx,
                        viewport.plot_bottom()
                    )),
                    _ => None,
                };

                Marks::Line(LineMarks {
                    stroke: line.stroke.hex(),
                    path,
                    area,
                    markers: if line.show_markers { markers } else { Vec::new() },
                    dashed_rules: line.dashed_rules,
                })
            }
        };

        Self {
            viewport,
            gridlines,
            x_labels,
            marks,
        }
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.viewport.width, self.viewport.height)
    }
}

struct ValueScale {
    axis_max: f32,
    top: f32,
    height: f32,
}

impl ValueScale {
    fn y(&self, value: u32) -> f32 {
        let ratio = (value as f32 / self.axis_max).clamp(0.0, 1.0);
        self.top + self.height * (1.0 - ratio)
    }
}

fn bar_centers(viewport: &Viewport, count: usize, bar_width: f32, spacing: f32) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }
    let total = count as f32 * bar_width + (count - 1) as f32 * spacing;
    let start = viewport.plot_left() + (viewport.plot_width() - total) / 2.0;
    (0..count)
        .map(|i| start + i as f32 * (bar_width + spacing) + bar_width / 2.0)
        .collect()
}

fn line_xs(viewport: &Viewport, count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![viewport.plot_left() + viewport.plot_width() / 2.0],
        _ => {
            let step = viewport.plot_width() / (count - 1) as f32;
            (0..count)
                .map(|i| viewport.plot_left() + i as f32 * step)
                .collect()
        }
    }
}

fn polyline(markers: &[Marker]) -> String {
    markers
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{cmd}{:.1},{:.1}", m.cx, m.cy)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
