//! chart-scene: declarative chart geometry engine.
//!
//! Converts small data series plus a target viewport into a [`render::Scene`]
//! of vector primitives (smoothed line paths, donut arcs, bar rectangles,
//! labels, gridlines and a legend). Painting the scene is left to whatever
//! drawing surface the host uses.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartAssembler, ChartKind, ChartStyleConfig};
pub use error::{ChartError, ChartResult};
