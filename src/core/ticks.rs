use crate::core::domain::Domain;

/// Upper bound on gridlines emitted for one axis.
pub const MAX_GRIDLINES: usize = 64;

/// Default number of equal divisions between `domain.min` and `domain.max`.
pub const DEFAULT_TICK_DIVISIONS: usize = 6;

/// Gridline values for a vertical value axis, from `domain.min` upward.
///
/// With a positive finite `tick_step` the ticks are `min + k * step` up to
/// `max`. Otherwise the domain is cut into `divisions` equal parts, which
/// always ends exactly on `max`.
#[must_use]
pub fn gridline_values(domain: Domain, tick_step: Option<f64>, divisions: usize) -> Vec<f64> {
    if !domain.is_proper() {
        return vec![domain.min];
    }

    match tick_step {
        Some(step) if step.is_finite() && step > 0.0 => {
            let count = ((domain.span() / step) + 1e-9).floor();
            let count = if count.is_finite() {
                (count as usize).min(MAX_GRIDLINES - 1)
            } else {
                MAX_GRIDLINES - 1
            };
            (0..=count)
                .map(|k| domain.min + k as f64 * step)
                .collect()
        }
        _ => {
            let divisions = divisions.clamp(1, MAX_GRIDLINES - 1);
            (0..=divisions)
                .map(|k| {
                    if k == divisions {
                        return domain.max;
                    }
                    let offset = domain.span() * k as f64 / divisions as f64;
                    if offset.is_finite() {
                        domain.min + offset
                    } else {
                        domain.min + domain.span() * (k as f64 / divisions as f64)
                    }
                })
                .collect()
        }
    }
}
