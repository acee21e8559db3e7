//! Structured logging setup.

use storyloom_error::{ServerError, ServerErrorKind};
use tracing_subscriber::{
    EnvFilter,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "info,storyloom=debug,storyloom_narrative=debug,storyloom_models=debug,tower_http=debug"
    } else {
        "info"
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the default filter.
pub fn init_tracing(verbose: bool, json_logs: bool) -> Result<(), ServerError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(verbose)))
        .map_err(|e| ServerError::new(ServerErrorKind::Telemetry(e.to_string())))?;

    let fmt_layer = if json_logs {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ServerError::new(ServerErrorKind::Telemetry(e.to_string())))
}
