use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{PlannerError, Result};

/// Initialize tracing for the binaries.
///
/// `RUST_LOG` takes precedence over `log_level`. Set `LOG_FORMAT=json` for
/// structured output; the default is human-readable console logging. Logs go
/// to stderr so plan output on stdout stays clean.
pub fn init_tracing(log_level: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let json = std::env::var("LOG_FORMAT")
        .map(|f| f.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let result = if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| PlannerError::InvalidConfig(format!("failed to initialize logging: {}", e)))
}
