//! Telemetry helpers for programs building charts with `litechart`.
//!
//! Tracing setup stays explicit and opt-in. Callers can either call
//! `init_default_tracing` or install their own `tracing` subscriber.

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Filters come from `RUST_LOG`, falling back to `info`. Events go to stderr
/// because notebook output is written to stdout.
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host program.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
