//! Opt-in tracing bootstrap for hosts embedding `chart-scene`.
//!
//! The engine only emits `tracing` events; it never installs a subscriber on
//! its own. Hosts that already configure `tracing` can ignore this module.

/// Filter used when `RUST_LOG` is unset: engine diagnostics at `debug`,
/// everything else at `info`.
pub const DEFAULT_FILTER: &str = "info,chart_scene=debug";

/// Installs a compact `fmt` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or the host already installed
/// a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
