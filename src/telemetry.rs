//! Opt-in `tracing` setup for the probe binary and small hosts.
//!
//! Every computation emits a `trace!` event and clamped options emit a
//! `warn!`, both under the `nice_scale` target. Renderers with their own
//! subscriber never need this module.

/// Filter used when `RUST_LOG` is unset: surface clamping warnings only.
pub const DEFAULT_FILTER: &str = "nice_scale=warn";

/// Installs a compact subscriber filtered by `RUST_LOG` or [`DEFAULT_FILTER`].
///
/// Returns `false` without the `telemetry` feature or when the host already
/// installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
