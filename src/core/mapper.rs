use crate::core::domain::Domain;
use crate::core::types::Viewport;

/// Span used for domains with `max <= min` so mapping never divides by zero.
const DEGENERATE_SPAN: f64 = 1.0;

fn effective_span(domain: Domain) -> f64 {
    let span = domain.span();
    if span.is_finite() && span > 0.0 {
        span
    } else {
        DEGENERATE_SPAN
    }
}

/// Maps a data value onto the vertical pixel axis.
///
/// `domain.min` lands on the bottom of the plot area and `domain.max` on the
/// top, so larger values produce smaller `y`.
#[must_use]
pub fn map_y(value: f64, domain: Domain, viewport: Viewport) -> f64 {
    let plot_height = viewport.height - 2.0 * viewport.padding_y;
    let normalized = (value - domain.min) / effective_span(domain);
    viewport.height - viewport.padding_y - normalized * plot_height
}

/// Inverse of [`map_y`]. Returns `None` for a degenerate domain or an empty
/// plot height.
#[must_use]
pub fn invert_y(pixel: f64, domain: Domain, viewport: Viewport) -> Option<f64> {
    let plot_height = viewport.height - 2.0 * viewport.padding_y;
    if !domain.is_proper() || !plot_height.is_finite() || plot_height <= 0.0 {
        return None;
    }
    let normalized = (viewport.height - viewport.padding_y - pixel) / plot_height;
    Some(domain.min + normalized * domain.span())
}

/// Spreads `len` indices evenly across `[padding_x, width - padding_x]`.
///
/// A single point sits on the horizontal centre of the viewport.
#[must_use]
pub fn map_x(index: usize, len: usize, viewport: Viewport) -> f64 {
    if len <= 1 {
        return viewport.width * 0.5;
    }
    let plot_width = viewport.width - 2.0 * viewport.padding_x;
    viewport.padding_x + plot_width * (index as f64) / ((len - 1) as f64)
}
