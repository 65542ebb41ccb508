pub mod arc;
pub mod bar;
pub mod domain;
pub mod mapper;
pub mod primitives;
pub mod smoothing;
pub mod ticks;
pub mod types;

pub use arc::{ArcSegmentGeometry, build_arc_segments, percentage_to_sweep, polar_to_cartesian};
pub use bar::{BarGeometry, bar_spacing, layout_bars};
pub use domain::Domain;
pub use mapper::{invert_y, map_x, map_y};
pub use smoothing::{PathGeometry, PathSegment, build_smoothed_path};
pub use ticks::{DEFAULT_TICK_DIVISIONS, MAX_GRIDLINES, gridline_values};
pub use types::{DataPoint, DataSeries, PlotArea, Point, Viewport};
