use actix_web::{body::BoxBody, http::StatusCode, HttpResponse};
use error_stack::Report;
use thiserror::Error as ThisError;
use validator::ValidateError;

use super::Error;
use crate::{auth::AuthenticatorError, types::Error as ErrorType};

impl actix_web::ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.error_type {
            ErrorType::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorType::MalformedBody { .. } | ErrorType::InvalidFormBody { .. } => {
                StatusCode::BAD_REQUEST
            }
            ErrorType::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code()).json(&self.error_type)
    }
}

impl From<ValidateError> for Error {
    fn from(value: ValidateError) -> Self {
        #[derive(Debug, ThisError)]
        #[error("Validation error occurred")]
        struct InvalidForm;

        let report = value
            .violations()
            .iter()
            .fold(Report::new(InvalidForm), |report, violation| {
                report.attach_printable(violation.to_string())
            });

        Error::from_report(ErrorType::InvalidFormBody { errors: value }, report)
    }
}

impl From<Report<AuthenticatorError>> for Error {
    fn from(value: Report<AuthenticatorError>) -> Self {
        match value.current_context() {
            AuthenticatorError::Rejected => Error::from_report(ErrorType::Unauthorized, value),
            AuthenticatorError::Failed => Error::from_report(ErrorType::Internal, value),
        }
    }
}

impl From<actix_web::error::JsonPayloadError> for Error {
    fn from(value: actix_web::error::JsonPayloadError) -> Self {
        #[derive(Debug, ThisError)]
        #[error("Could not read JSON body")]
        struct MalformedBody;

        let message = match &value {
            actix_web::error::JsonPayloadError::Deserialize(e) if e.is_data() => {
                "expected a JSON object".to_string()
            }
            other => other.to_string(),
        };

        let report = Report::new(MalformedBody).attach_printable(value.to_string());
        Error::from_report(ErrorType::MalformedBody { message }, report)
    }
}
