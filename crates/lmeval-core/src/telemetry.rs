//! Global tracing setup for programs that build or consume requests.
//!
//! `RUST_LOG` selects what is logged; `LMEVAL_LOG_FORMAT=json` switches the
//! output to newline-delimited JSON. Only the first initialisation in a
//! process installs a subscriber.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "LMEVAL_LOG_FORMAT";

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// `json` (any case, surrounding whitespace ignored) selects JSON; anything else is text.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }

    /// Format requested through `LMEVAL_LOG_FORMAT`.
    pub fn from_env() -> Self {
        Self::parse(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }
}

/// Install the global subscriber.
///
/// `level` applies when `RUST_LOG` is unset or unparsable. Returns `false`
/// when a subscriber was already installed and this call changed nothing.
pub fn init_tracing(format: LogFormat, level: Level) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    let layer = fmt::layer().with_target(false);
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match format {
        LogFormat::Json => registry.with(layer.json()).try_init(),
        LogFormat::Text => registry.with(layer).try_init(),
    };
    installed.is_ok()
}

/// Install the global subscriber using the format from `LMEVAL_LOG_FORMAT`.
pub fn init_tracing_from_env(level: Level) -> bool {
    init_tracing(LogFormat::from_env(), level)
}
