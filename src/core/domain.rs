use serde::{Deserialize, Serialize};
use tracing::trace;

/// Maximum used when a series has no positive finite value.
pub const FALLBACK_DOMAIN_MAX: f64 = 1.0;

/// Value range a chart must represent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Builds a domain, swapping the bounds if they are given in reverse.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Zero-based domain covering every finite value of every channel.
    ///
    /// Bar, line and impression charts never show negative values, so `min`
    /// is pinned to zero. When no positive finite value exists (empty input,
    /// all zeros, all negative) `max` falls back to [`FALLBACK_DOMAIN_MAX`].
    #[must_use]
    pub fn from_channels(channels: &[&[f64]]) -> Self {
        let max = channels
            .iter()
            .flat_map(|values| values.iter().copied())
            .filter(|value| value.is_finite())
            .fold(f64::NEG_INFINITY, f64::max);

        if max > 0.0 {
            return Self { min: 0.0, max };
        }

        trace!(observed_max = max, "degenerate domain, using fallback max");
        Self {
            min: 0.0,
            max: FALLBACK_DOMAIN_MAX,
        }
    }

    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        Self::from_channels(&[values])
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` when `max > min` and both bounds are finite.
    #[must_use]
    pub fn is_proper(self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.max > self.min
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: FALLBACK_DOMAIN_MAX,
        }
    }
}
