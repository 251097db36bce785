//! Logging and tracing utilities

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber with default configuration
///
/// Honors `RUST_LOG`; falls back to `info`.
pub fn init_tracing() {
    init_tracing_with("info");
}

/// Initialize tracing with `default_directive` used when `RUST_LOG` is unset,
/// e.g. `"warn,edgar_client=info"`
pub fn init_tracing_with(default_directive: &str) {
    tracing_subscriber::registry()
        .with(env_filter(default_directive))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_default_directive_used_without_env() {
        // SAFETY: no other test in this crate reads RUST_LOG
        unsafe { std::env::remove_var("RUST_LOG") };
        let filter = env_filter("warn,edgar_client=debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
