use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// Pixel-space coordinate with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) * 0.5,
            y: (self.y + other.y) * 0.5,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Pixel canvas handed to the engine by the calling screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding_x: f64,
    pub padding_y: f64,
}

/// Usable plotting rectangle of a viewport, after padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64, padding_x: f64, padding_y: f64) -> Self {
        Self {
            width,
            height,
            padding_x,
            padding_y,
        }
    }

    /// Viewport without padding.
    #[must_use]
    pub const fn unpadded(width: f64, height: f64) -> Self {
        Self::new(width, height, 0.0, 0.0)
    }

    #[must_use]
    pub fn plot_area(self) -> PlotArea {
        PlotArea {
            left: self.padding_x,
            top: self.padding_y,
            width: self.width - 2.0 * self.padding_x,
            height: self.height - 2.0 * self.padding_y,
        }
    }

    /// Returns `true` when every field is finite and the plot area is not
    /// negative in either direction.
    #[must_use]
    pub fn is_drawable(self) -> bool {
        let fields_finite = self.width.is_finite()
            && self.height.is_finite()
            && self.padding_x.is_finite()
            && self.padding_y.is_finite();
        if !fields_finite {
            return false;
        }
        let area = self.plot_area();
        area.width >= 0.0 && area.height >= 0.0
    }
}

/// One category on a chart: a label plus one value per channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub values: SmallVec<[f64; 2]>,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, values: &[f64]) -> Self {
        Self {
            label: label.into(),
            values: SmallVec::from_slice(values),
        }
    }

    #[must_use]
    pub fn single(label: impl Into<String>, value: f64) -> Self {
        Self::new(label, &[value])
    }

    /// Builds a point from backend decimal values.
    pub fn from_decimals(label: impl Into<String>, values: &[Decimal]) -> ChartResult<Self> {
        let mut converted = SmallVec::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            converted.push(decimal_to_f64(*value, &format!("value[{index}]"))?);
        }
        Ok(Self {
            label: label.into(),
            values: converted,
        })
    }

    #[must_use]
    pub fn value(&self, channel: usize) -> Option<f64> {
        self.values.get(channel).copied()
    }
}

/// Ordered sequence of data points sharing the same channel layout.
///
/// Point order is the x-axis order. Deserialization applies the same shape
/// check as [`DataSeries::push`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DataSeriesRepr")]
pub struct DataSeries {
    channels: SmallVec<[String; 2]>,
    points: Vec<DataPoint>,
}

/// Unchecked wire form of a [`DataSeries`].
#[derive(Deserialize)]
struct DataSeriesRepr {
    channels: SmallVec<[String; 2]>,
    #[serde(default)]
    points: Vec<DataPoint>,
}

impl TryFrom<DataSeriesRepr> for DataSeries {
    type Error = ChartError;

    fn try_from(repr: DataSeriesRepr) -> ChartResult<Self> {
        Self::from_points(repr.channels, repr.points)
    }
}

impl DataSeries {
    #[must_use]
    pub fn new<S: Into<String>>(channels: impl IntoIterator<Item = S>) -> Self {
        Self {
            channels: channels.into_iter().map(Into::into).collect(),
            points: Vec::new(),
        }
    }

    /// Builds a series and checks every point against the channel layout.
    pub fn from_points<S: Into<String>>(
        channels: impl IntoIterator<Item = S>,
        points: impl IntoIterator<Item = DataPoint>,
    ) -> ChartResult<Self> {
        let mut series = Self::new(channels);
        for point in points {
            series.push(point)?;
        }
        Ok(series)
    }

    /// Builds a series from points whose shape the caller already guarantees.
    pub(crate) fn from_trusted<S: Into<String>>(
        channels: impl IntoIterator<Item = S>,
        points: impl IntoIterator<Item = DataPoint>,
    ) -> Self {
        let series = Self {
            channels: channels.into_iter().map(Into::into).collect(),
            points: points.into_iter().collect(),
        };
        debug_assert!(
            series
                .points
                .iter()
                .all(|point| point.values.len() == series.channels.len())
        );
        series
    }

    pub fn push(&mut self, point: DataPoint) -> ChartResult<()> {
        if point.values.len() != self.channels.len() {
            return Err(ChartError::InvalidData(format!(
                "point `{}` has {} values but the series has {} channels",
                point.label,
                point.values.len(),
                self.channels.len()
            )));
        }
        self.points.push(point);
        Ok(())
    }

    pub fn with_point(mut self, point: DataPoint) -> ChartResult<Self> {
        self.push(point)?;
        Ok(self)
    }

    #[must_use]
    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Values of one channel in point order. Empty for an unknown channel.
    #[must_use]
    pub fn channel_values(&self, channel: usize) -> Vec<f64> {
        if channel >= self.channels.len() {
            return Vec::new();
        }
        self.points
            .iter()
            .filter_map(|point| point.value(channel))
            .collect()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|point| point.label.as_str())
    }
}
