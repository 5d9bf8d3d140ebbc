//! Tracing subscriber setup for the binaries.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "info";

/// Filter used when `RUST_LOG` is unset: `level` if non-empty, else [`DEFAULT_FILTER`].
pub fn env_filter(level: &str) -> EnvFilter {
    let filter_str = if level.trim().is_empty() { DEFAULT_FILTER } else { level };
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_str))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber: human-readable console output with
/// uptime timestamps. Safe to call more than once; later calls are no-ops.
pub fn init_logging(level: &str) {
    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(console_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_falls_back() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = env_filter("orbit_sim=notalevel");
        let shown = format!("{filter}");
        assert!(shown.contains(DEFAULT_FILTER));
        assert!(!shown.contains("orbit_sim"));
    }

    #[test]
    fn subsystem_filter() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = format!("{}", env_filter("warn,orbit_sim::sim=debug"));
        assert!(filter.contains("orbit_sim::sim=debug"));
        assert!(filter.contains("warn"));
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging("warn");
        init_logging("debug");
    }
}
