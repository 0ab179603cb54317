//! Tracing initialization for the CLI.
//!
//! # Environment Variables
//!
//! - `LOG_FORMAT`: `text` (default) or `json`, used when `--log-format` is absent
//! - `RUST_LOG`: log level filter (default: `warn`)
//!
//! Logs are written to stderr so stdout only carries rendered results.

use clap::ValueEnum;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text logging.
    #[default]
    Text,
    /// JSON structured logging.
    Json,
}

impl LogFormat {
    /// Parse a log format name. Accepts "json", "text", or "pretty" (alias
    /// for text); anything else falls back to text.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }

    /// Resolve the format from an explicit flag, then `LOG_FORMAT`.
    pub fn resolve(flag: Option<LogFormat>) -> Self {
        flag.unwrap_or_else(|| {
            std::env::var("LOG_FORMAT")
                .map(|value| LogFormat::parse(&value))
                .unwrap_or_default()
        })
    }
}

/// Install the global tracing subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    let _ = match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_names() {
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Text);
        assert_eq!(LogFormat::parse("bogus"), LogFormat::Text);
    }

    // Only this test touches LOG_FORMAT, so mutating it here is safe.
    #[test]
    fn resolve_prefers_flag_then_environment() {
        std::env::set_var("LOG_FORMAT", "json");
        assert_eq!(LogFormat::resolve(None), LogFormat::Json);
        assert_eq!(LogFormat::resolve(Some(LogFormat::Text)), LogFormat::Text);

        std::env::set_var("LOG_FORMAT", "text");
        assert_eq!(LogFormat::resolve(Some(LogFormat::Json)), LogFormat::Json);
        assert_eq!(LogFormat::resolve(None), LogFormat::Text);

        std::env::remove_var("LOG_FORMAT");
        assert_eq!(LogFormat::resolve(None), LogFormat::Text);
    }
}
