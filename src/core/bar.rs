use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::domain::Domain;
use crate::core::mapper::map_y;
use crate::core::types::Viewport;

/// Rectangle of one bar in pixel space, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.x + self.width * 0.5
    }
}

/// Gap between bars, and before the first and after the last bar.
///
/// Negative when `count` bars of `bar_width` do not fit the plot width.
#[must_use]
pub fn bar_spacing(count: usize, bar_width: f64, viewport: Viewport) -> f64 {
    let plot_width = viewport.plot_area().width;
    let occupied = count as f64 * bar_width;
    (plot_width - occupied) / (count as f64 + 1.0)
}

/// Lays out one bar per value with even spacing across the plot width.
///
/// Bars grow from the plot baseline up to `map_y(value)`. When the bars do
/// not fit, the spacing turns negative and neighbouring bars overlap. A
/// width so large that the spacing is not representable yields no bars.
#[must_use]
pub fn layout_bars(
    values: &[f64],
    bar_width: f64,
    domain: Domain,
    viewport: Viewport,
) -> Vec<BarGeometry> {
    if values.is_empty() {
        return Vec::new();
    }

    let spacing = bar_spacing(values.len(), bar_width, viewport);
    if !spacing.is_finite() || !bar_width.is_finite() {
        trace!(
            count = values.len(),
            bar_width, "bar width too large to lay out, skipping bars"
        );
        return Vec::new();
    }
    if spacing < 0.0 {
        trace!(
            count = values.len(),
            bar_width, spacing, "bars overlap in viewport"
        );
    }

    let baseline = viewport.height - viewport.padding_y;
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let x = viewport.padding_x + spacing + index as f64 * (bar_width + spacing);
            let top = map_y(*value, domain, viewport);
            BarGeometry {
                x,
                y: top.min(baseline),
                width: bar_width,
                height: (baseline - top).max(0.0),
            }
        })
        .collect()
}
