use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggingStyle {
    /// Compacts logs but it is readable enough
    #[default]
    Compact,
    /// Default formatter from [`tracing_subscriber`]
    Full,
    Pretty,
    /// Serializes every event into a JSON object
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Logging {
    /// **Environment variable**: `CREDSHAPE_LOGGING_STYLE`
    #[serde(default)]
    pub style: LoggingStyle,

    /// **Environment variable**: `CREDSHAPE_LOGGING_TARGETS` or `RUST_LOG`
    ///
    /// Filters logging events with the use of directives, see:
    /// https://docs.rs/tracing-subscriber/0.3.18/tracing_subscriber/filter/struct.EnvFilter.html
    #[serde(default)]
    pub targets: String,
}
