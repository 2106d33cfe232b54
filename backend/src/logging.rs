//! Logging setup powered by `tracing-subscriber`.
//!
//! The filter is built from the configured base level plus quieter defaults
//! for the HTTP stack; `RUST_LOG` is not consulted so the config file stays
//! the single source.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "json" | "jsonl" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Base directive followed by overrides for noisy dependencies.
pub fn build_env_filter(level: &str) -> Result<EnvFilter, AppError> {
    let mut directives = vec![level.to_string()];
    for (target, lvl) in [("hyper", "warn"), ("tower", "warn"), ("axum::rejection", "debug")] {
        directives.push(format!("{target}={lvl}"));
    }
    let filter = directives.join(",");
    EnvFilter::try_new(&filter).map_err(|e| AppError::Config(format!("invalid log filter '{filter}': {e}")))
}

pub fn init_logging(settings: &LoggingSettings) -> Result<(), AppError> {
    let filter = build_env_filter(&settings.level)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match LogFormat::parse(&settings.format) {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .try_init(),
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact().with_target(true))
            .try_init(),
    };
    result.map_err(|e| AppError::Config(format!("logging already initialised: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parsing_defaults_to_compact() {
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Compact);
    }

    #[test]
    fn filter_accepts_levels_and_rejects_garbage() {
        assert!(build_env_filter("debug").is_ok());
        assert!(build_env_filter("nexushub_backend=trace").is_ok());
        assert!(build_env_filter("nexushub_backend=loud").is_err());
    }
}
