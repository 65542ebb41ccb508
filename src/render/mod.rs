mod null_renderer;
mod primitives;
mod scene;

pub use null_renderer::NullRenderer;
pub use primitives::{
    ArcPrimitive, Color, LabelPrimitive, PathPrimitive, Primitive, RectPrimitive, TextAlign,
};
pub use scene::{Gridline, LegendEntry, Scene};

use crate::error::ChartResult;

/// Contract implemented by any drawing surface.
///
/// Surfaces receive a fully materialized `Scene`, so painting code stays
/// isolated from data mapping and layout.
pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()>;
}
