//! Tracing subscriber setup.

use crate::LoggingConfig;
use crewplan_core::{CrewplanError, CrewplanResult};
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set. Fails if a
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> CrewplanResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| CrewplanError::configuration(format!("invalid log filter: {}", e)))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| CrewplanError::configuration(format!("failed to init logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_once() {
        let config = LoggingConfig::default();
        // First call installs, a second call must fail rather than panic.
        let first = init_logging(&config);
        let second = init_logging(&config);
        assert!(first.is_ok() || second.is_err());
    }
}
