use thiserror::Error;

mod logging;
mod server;

pub use logging::{Logging, LoggingStyle};
pub use server::Server;

#[derive(Debug, Error)]
#[error("Failed to load configuration")]
pub struct ParseError;
