use error_stack::Report;
use thiserror::Error;
use validator::ValidateError;

#[derive(Debug, Error)]
#[error("Invalid given data occurred")]
pub struct Wrapper;

pub trait IntoValidatorReport<T> {
    fn into_validator_report(self) -> error_stack::Result<T, Wrapper>;
}

impl<T> IntoValidatorReport<T> for Result<T, ValidateError> {
    fn into_validator_report(self) -> error_stack::Result<T, Wrapper> {
        self.map_err(|error| {
            error
                .violations()
                .iter()
                .fold(Report::new(Wrapper), |report, violation| {
                    report.attach_printable(format!("{violation} ({})", violation.kind))
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ViolationKind;

    #[test]
    fn attaches_every_violation() {
        let mut fields = ValidateError::field_builder();
        let mut msg = ValidateError::msg_builder();
        msg.insert(ViolationKind::MissingField, "password should not be empty");
        msg.insert(ViolationKind::TooShort, "password is too short");
        fields.insert("password", msg.build());

        let report = Err::<(), _>(fields.build())
            .into_validator_report()
            .unwrap_err();

        let rendered = format!("{report:?}");
        assert!(rendered.contains("password: password should not be empty (missing_field)"));
        assert!(rendered.contains("password: password is too short (too_short)"));
    }
}
