use error_stack::{Report, Result};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Logging, LoggingStyle};

#[derive(Debug, Error)]
#[error("Failed to initialize tracing")]
pub struct TracingInitError;

pub fn init(config: &Logging) -> Result<(), TracingInitError> {
    let builder = tracing_subscriber::fmt().with_env_filter(make_env_filter(&config.targets));

    // `ErrorLayer` lets HTTP errors capture the span they were raised in
    let result = match config.style {
        LoggingStyle::Compact => builder.compact().finish().with(ErrorLayer::default()).try_init(),
        LoggingStyle::Full => builder.finish().with(ErrorLayer::default()).try_init(),
        LoggingStyle::Pretty => builder.pretty().finish().with(ErrorLayer::default()).try_init(),
        LoggingStyle::Json => builder.json().finish().with(ErrorLayer::default()).try_init(),
    };

    result.map_err(|e| {
        Report::new(TracingInitError)
            .attach_printable(e.to_string())
            .attach_printable("already initialized tracing")
    })
}

fn make_env_filter(targets: &str) -> EnvFilter {
    let default_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse_lossy(targets)
}
