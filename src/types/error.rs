use serde::{Deserialize, Serialize};
use std::fmt::Display;
use validator::ValidateError;

/// Error body sent back to the client.
#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Error {
    Internal,
    /// The body is not a JSON object at all.
    MalformedBody { message: String },
    InvalidFormBody { errors: ValidateError },
    Unauthorized,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Internal => f.write_str("Failed to perform request"),
            Error::MalformedBody { .. } => f.write_str("User performed request with unreadable body"),
            Error::InvalidFormBody { .. } => f.write_str("User performed request with invalid body"),
            Error::Unauthorized => f.write_str("Credentials were rejected"),
        }
    }
}
