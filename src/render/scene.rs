use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, Color, LabelPrimitive, PathPrimitive, Primitive, RectPrimitive,
};

/// Legend row: a color swatch plus its caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub swatch_color: Color,
    pub text: String,
}

/// Horizontal gridline at a data value and its pixel row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gridline {
    pub value: f64,
    pub y: f64,
}

/// Backend-agnostic description of one chart.
///
/// Derived solely from its inputs; two scenes built from the same series,
/// viewport, kind and style compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub viewport: Viewport,
    pub primitives: Vec<Primitive>,
    #[serde(default)]
    pub legend: Vec<LegendEntry>,
    #[serde(default)]
    pub gridlines: Vec<Gridline>,
}

impl Scene {
    #[must_use]
    pub fn empty(viewport: Viewport) -> Self {
        Self {
            viewport,
            primitives: Vec::new(),
            legend: Vec::new(),
            gridlines: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty() && self.legend.is_empty() && self.gridlines.is_empty()
    }

    /// Number of primitives that encode data (paths, arcs, rects).
    #[must_use]
    pub fn data_primitive_count(&self) -> usize {
        self.primitives.iter().filter(|p| p.is_data()).count()
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Path(path) => Some(path),
            _ => None,
        })
    }

    pub fn arcs(&self) -> impl Iterator<Item = &ArcPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Arc(arc) => Some(arc),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &LabelPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Label(label) => Some(label),
            _ => None,
        })
    }

    /// Checks that every primitive is drawable by a real surface.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_drawable() {
            if self.primitives.is_empty() && self.gridlines.is_empty() {
                return Ok(());
            }
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for primitive in &self.primitives {
            primitive.validate()?;
        }
        for gridline in &self.gridlines {
            if !gridline.value.is_finite() || !gridline.y.is_finite() {
                return Err(ChartError::InvalidData(
                    "gridline value and position must be finite".to_owned(),
                ));
            }
        }
        for entry in &self.legend {
            entry.swatch_color.validate()?;
        }

        Ok(())
    }
}
