use crate::config::TelemetryConfig;
use tracing_subscriber::filter::{Directive, ParseError};
use tracing_subscriber::EnvFilter;

/// Per-target overrides applied when the operator gives a bare level
/// ("info", "debug") instead of a full directive string. HTTP internals
/// stay at warn so candidate transition logs are not drowned out.
const QUIET_TARGETS: &[&str] = &["hyper=warn", "tower=warn", "mio=warn"];

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}'")]
    Filter { value: String, source: ParseError },
    #[error("tracing subscriber already installed")]
    Init(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Build the log filter from a directive spec. Noisy HTTP-stack targets
/// are capped at warn unless the spec already names targets itself.
pub fn build_filter(spec: &str) -> Result<EnvFilter, TelemetryError> {
    let mut filter = EnvFilter::try_new(spec).map_err(|source| TelemetryError::Filter {
        value: spec.to_string(),
        source,
    })?;

    if !spec.contains('=') {
        for target in QUIET_TARGETS {
            let directive: Directive =
                target.parse().map_err(|source| TelemetryError::Filter {
                    value: (*target).to_string(),
                    source,
                })?;
            filter = filter.add_directive(directive);
        }
    }

    Ok(filter)
}

/// Install the process-wide subscriber. `RUST_LOG` wins when set;
/// otherwise the configured level applies.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let spec = std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone());
    let filter = build_filter(&spec)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Init)
}
