use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_TICK_DIVISIONS;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual options shared by every chart kind.
///
/// This type is serializable so host applications can ship chart themes as
/// JSON. Missing fields fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyleConfig {
    /// Fixed distance between gridline values. `None` divides the domain into
    /// `tick_divisions` equal parts.
    pub tick_step: Option<f64>,
    pub tick_divisions: usize,
    /// Line colors, cycled by channel index.
    pub line_colors: Vec<Color>,
    /// Per-channel overrides of `line_colors`, keyed by channel name.
    pub channel_colors: IndexMap<String, Color>,
    pub line_stroke_width: f64,
    pub bar_width: f64,
    pub bar_color: Color,
    pub bar_corner_radius: f64,
    pub show_bar_values: bool,
    /// Arc colors, cycled by segment index.
    pub arc_colors: Vec<Color>,
    pub arc_stroke_width: f64,
    pub label_color: Color,
    pub label_font_size_px: f64,
    /// Distance from the plot bottom to category label anchors.
    pub category_label_offset_px: f64,
    /// Distance from the plot left edge to gridline label anchors.
    pub gridline_label_offset_px: f64,
}

impl Default for ChartStyleConfig {
    fn default() -> Self {
        Self {
            tick_step: None,
            tick_divisions: DEFAULT_TICK_DIVISIONS,
            line_colors: vec![
                Color::from_rgb8(0xC4, 0xB5, 0xFD),
                Color::from_rgb8(0x7C, 0x3A, 0xED),
            ],
            channel_colors: IndexMap::new(),
            line_stroke_width: 3.0,
            bar_width: 32.0,
            bar_color: Color::from_rgb8(0x7C, 0x3A, 0xED),
            bar_corner_radius: 6.0,
            show_bar_values: false,
            arc_colors: vec![
                Color::from_rgb8(0xEF, 0x44, 0x44),
                Color::from_rgb8(0x22, 0xC5, 0x5E),
            ],
            arc_stroke_width: 18.0,
            label_color: Color::from_rgb8(0x6B, 0x72, 0x80),
            label_font_size_px: 12.0,
            category_label_offset_px: 16.0,
            gridline_label_offset_px: 8.0,
        }
    }
}

impl ChartStyleConfig {
    #[must_use]
    pub fn with_tick_step(mut self, tick_step: f64) -> Self {
        self.tick_step = Some(tick_step);
        self
    }

    #[must_use]
    pub fn with_tick_divisions(mut self, divisions: usize) -> Self {
        self.tick_divisions = divisions;
        self
    }

    #[must_use]
    pub fn with_line_colors(mut self, colors: Vec<Color>) -> Self {
        self.line_colors = colors;
        self
    }

    #[must_use]
    pub fn with_channel_color(mut self, channel: impl Into<String>, color: Color) -> Self {
        self.channel_colors.insert(channel.into(), color);
        self
    }

    #[must_use]
    pub fn with_line_stroke_width(mut self, width: f64) -> Self {
        self.line_stroke_width = width;
        self
    }

    #[must_use]
    pub fn with_bar_width(mut self, width: f64) -> Self {
        self.bar_width = width;
        self
    }

    #[must_use]
    pub fn with_bar_corner_radius(mut self, radius: f64) -> Self {
        self.bar_corner_radius = radius;
        self
    }

    #[must_use]
    pub fn with_bar_values(mut self, show: bool) -> Self {
        self.show_bar_values = show;
        self
    }

    #[must_use]
    pub fn with_arc_colors(mut self, colors: Vec<Color>) -> Self {
        self.arc_colors = colors;
        self
    }

    #[must_use]
    pub fn with_arc_stroke_width(mut self, width: f64) -> Self {
        self.arc_stroke_width = width;
        self
    }

    /// Color for a line channel: explicit override first, then the cycled
    /// palette.
    #[must_use]
    pub fn line_color(&self, channel: &str, index: usize) -> Color {
        if let Some(color) = self.channel_colors.get(channel) {
            return *color;
        }
        cycle(&self.line_colors, index).unwrap_or(self.bar_color)
    }

    #[must_use]
    pub fn arc_color(&self, index: usize) -> Color {
        cycle(&self.arc_colors, index).unwrap_or(self.bar_color)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if matches!(self.tick_step, Some(step) if !step.is_finite() || step <= 0.0) {
            return Err(ChartError::InvalidStyle(
                "tick step must be finite and > 0".to_owned(),
            ));
        }
        if self.tick_divisions == 0 {
            return Err(ChartError::InvalidStyle(
                "tick divisions must be >= 1".to_owned(),
            ));
        }
        if self.line_colors.is_empty() {
            return Err(ChartError::InvalidStyle(
                "line palette must not be empty".to_owned(),
            ));
        }
        if self.arc_colors.is_empty() {
            return Err(ChartError::InvalidStyle(
                "arc palette must not be empty".to_owned(),
            ));
        }

        for (name, value) in [
            ("line stroke width", self.line_stroke_width),
            ("bar width", self.bar_width),
            ("arc stroke width", self.arc_stroke_width),
            ("label font size", self.label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidStyle(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("bar corner radius", self.bar_corner_radius),
            ("category label offset", self.category_label_offset_px),
            ("gridline label offset", self.gridline_label_offset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidStyle(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        for color in self
            .line_colors
            .iter()
            .chain(self.channel_colors.values())
            .chain(self.arc_colors.iter())
            .chain([&self.bar_color, &self.label_color])
        {
            color
                .validate()
                .map_err(|err| ChartError::InvalidStyle(err.to_string()))?;
        }

        Ok(())
    }

    /// Parses and validates a style from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let style: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidStyle(format!("failed to parse style json: {e}")))?;
        style.validate()?;
        Ok(style)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize style: {e}")))
    }
}

fn cycle(colors: &[Color], index: usize) -> Option<Color> {
    if colors.is_empty() {
        return None;
    }
    Some(colors[index % colors.len()])
}
