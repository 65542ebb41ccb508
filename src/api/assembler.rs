use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::primitives::{format_percentage, format_value};
use crate::core::{
    DataSeries, Domain, Point, Viewport, build_arc_segments, build_smoothed_path,
    gridline_values, layout_bars, map_x, map_y,
};
use crate::error::ChartResult;
use crate::render::{
    ArcPrimitive, Gridline, LabelPrimitive, LegendEntry, PathPrimitive, Primitive, RectPrimitive,
    Scene, TextAlign,
};

use super::inputs::{
    ClubActivity, PollSplit, PostImpressions, TimeWindow, club_activity_series, poll_series,
    post_impressions_series,
};
use super::style::ChartStyleConfig;

/// Gap between a bar top and its value label.
const BAR_VALUE_LABEL_GAP_PX: f64 = 4.0;

/// Tolerance when checking that arc percentages add up to 100.
const PERCENT_TOTAL_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    Arc,
}

/// Turns a data series and a viewport into a complete [`Scene`].
///
/// Assembly never fails: empty series produce gridlines only, and viewports
/// without a usable plot area produce an empty scene.
///
/// Category and value labels are emitted once per data point, except that a
/// point with an empty label gets no label primitive; blank text is not
/// drawable. The arc legend falls back to the bare percentage for such points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartAssembler {
    style: ChartStyleConfig,
}

impl ChartAssembler {
    pub fn new(style: ChartStyleConfig) -> ChartResult<Self> {
        style.validate()?;
        Ok(Self { style })
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyleConfig {
        &self.style
    }

    #[must_use]
    pub fn assemble(&self, kind: ChartKind, series: &DataSeries, viewport: Viewport) -> Scene {
        if !viewport.is_drawable() {
            debug!(
                ?kind,
                width = viewport.width,
                height = viewport.height,
                "viewport has no plot area, returning empty scene"
            );
            return Scene::empty(viewport);
        }

        let scene = match kind {
            ChartKind::Line => self.assemble_line(series, viewport),
            ChartKind::Bar => self.assemble_bar(series, viewport),
            ChartKind::Arc => self.assemble_arc(series, viewport),
        };
        debug!(
            ?kind,
            points = series.len(),
            primitives = scene.primitives.len(),
            gridlines = scene.gridlines.len(),
            "assembled scene"
        );
        scene
    }

    #[must_use]
    pub fn assemble_club_activity(&self, rows: &[ClubActivity], viewport: Viewport) -> Scene {
        self.assemble(ChartKind::Line, &club_activity_series(rows), viewport)
    }

    #[must_use]
    pub fn assemble_post_impressions(
        &self,
        rows: &[PostImpressions],
        window: TimeWindow,
        viewport: Viewport,
    ) -> Scene {
        self.assemble(
            ChartKind::Bar,
            &post_impressions_series(rows, window),
            viewport,
        )
    }

    #[must_use]
    pub fn assemble_poll(&self, split: PollSplit, viewport: Viewport) -> Scene {
        self.assemble(ChartKind::Arc, &poll_series(split), viewport)
    }

    fn assemble_line(&self, series: &DataSeries, viewport: Viewport) -> Scene {
        let channels: Vec<Vec<f64>> = (0..series.channel_count())
            .map(|channel| series.channel_values(channel))
            .collect();
        let channel_refs: Vec<&[f64]> = channels.iter().map(Vec::as_slice).collect();
        let domain = Domain::from_channels(&channel_refs);

        let mut scene = Scene::empty(viewport);
        self.push_gridlines(&mut scene, domain);
        if series.is_empty() {
            return scene;
        }

        let len = series.len();
        for (index, (name, values)) in series.channels().iter().zip(&channels).enumerate() {
            let points: Vec<Point> = values
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    Point::new(
                        map_x(i, len, viewport),
                        map_y(finite_or_min(*value, domain), domain, viewport),
                    )
                })
                .collect();
            let color = self.style.line_color(name, index);
            scene.primitives.push(Primitive::Path(PathPrimitive {
                channel: name.clone(),
                geometry: build_smoothed_path(&points),
                stroke_width: self.style.line_stroke_width,
                color,
            }));
            scene.legend.push(LegendEntry {
                swatch_color: color,
                text: name.clone(),
            });
        }

        let label_y = viewport.plot_area().bottom() + self.style.category_label_offset_px;
        for (i, label) in series.labels().enumerate() {
            self.push_label(&mut scene, label, Point::new(map_x(i, len, viewport), label_y));
        }

        scene
    }

    fn assemble_bar(&self, series: &DataSeries, viewport: Viewport) -> Scene {
        let values = series.channel_values(0);
        let domain = Domain::from_values(&values);

        let mut scene = Scene::empty(viewport);
        self.push_gridlines(&mut scene, domain);
        if values.is_empty() {
            return scene;
        }
        if series.channel_count() > 1 {
            debug!(
                channels = series.channel_count(),
                "bar chart draws the first channel only"
            );
        }

        let sanitized: Vec<f64> = values
            .iter()
            .map(|value| finite_or_min(*value, domain))
            .collect();
        let bars = layout_bars(&sanitized, self.style.bar_width, domain, viewport);
        for bar in &bars {
            scene.primitives.push(Primitive::Rect(RectPrimitive {
                geometry: *bar,
                corner_radius: self.style.bar_corner_radius,
                color: self.style.bar_color,
            }));
        }

        let label_y = viewport.plot_area().bottom() + self.style.category_label_offset_px;
        for ((bar, label), value) in bars.iter().zip(series.labels()).zip(&sanitized) {
            self.push_label(&mut scene, label, Point::new(bar.center_x(), label_y));
            if self.style.show_bar_values {
                self.push_label(
                    &mut scene,
                    &format_value(*value),
                    Point::new(bar.center_x(), bar.y - BAR_VALUE_LABEL_GAP_PX),
                );
            }
        }

        scene
    }

    fn assemble_arc(&self, series: &DataSeries, viewport: Viewport) -> Scene {
        let percentages = series.channel_values(0);
        let plot = viewport.plot_area();
        let stroke_width = self.style.arc_stroke_width;
        let radius = plot.width.min(plot.height) * 0.5 - stroke_width * 0.5;

        if percentages.is_empty() || !radius.is_finite() || radius <= 0.0 {
            return Scene::empty(viewport);
        }

        let total: f64 = percentages.iter().filter(|p| p.is_finite()).sum();
        if (total - 100.0).abs() > PERCENT_TOTAL_TOLERANCE {
            warn!(total, "arc percentages do not sum to 100, drawing them as given");
        }

        let mut scene = Scene::empty(viewport);
        let segments = build_arc_segments(&percentages, plot.center(), radius, stroke_width);
        for (index, (segment, point)) in segments.iter().zip(series.points()).enumerate() {
            let color = self.style.arc_color(index);
            scene.primitives.push(Primitive::Arc(ArcPrimitive {
                geometry: *segment,
                color,
            }));
            let percentage = point.value(0).unwrap_or(0.0);
            let text = if point.label.is_empty() {
                format_percentage(percentage)
            } else {
                format!("{} {}", point.label, format_percentage(percentage))
            };
            scene.legend.push(LegendEntry {
                swatch_color: color,
                text,
            });
        }

        scene
    }

    fn push_gridlines(&self, scene: &mut Scene, domain: Domain) {
        let viewport = scene.viewport;
        let label_x = viewport.plot_area().left - self.style.gridline_label_offset_px;
        for value in gridline_values(domain, self.style.tick_step, self.style.tick_divisions) {
            let y = map_y(value, domain, viewport);
            scene.gridlines.push(Gridline { value, y });
            scene.primitives.push(Primitive::Label(LabelPrimitive {
                text: format_value(value),
                anchor: Point::new(label_x, y),
                align: TextAlign::Right,
                font_size_px: self.style.label_font_size_px,
                color: self.style.label_color,
            }));
        }
    }

    fn push_label(&self, scene: &mut Scene, text: &str, anchor: Point) {
        if text.is_empty() {
            return;
        }
        scene.primitives.push(Primitive::Label(LabelPrimitive {
            text: text.to_owned(),
            anchor,
            align: TextAlign::Center,
            font_size_px: self.style.label_font_size_px,
            color: self.style.label_color,
        }));
    }
}

/// Non-finite values are drawn at the domain floor.
fn finite_or_min(value: f64, domain: Domain) -> f64 {
    if value.is_finite() { value } else { domain.min }
}
