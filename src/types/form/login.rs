use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{FieldRules, Rule, Validate, ValidateError};

use super::{check_payload, CheckedFields, Form, Payload};
use crate::util::Sensitive;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Request {
    pub email: String,
    pub password: Sensitive<String>,
}

impl Form for Request {
    const RULES: &'static [FieldRules] = &[
        FieldRules {
            field: "email",
            rules: &[Rule::Email],
        },
        FieldRules {
            field: "password",
            rules: &[Rule::Required],
        },
    ];

    fn from_checked(fields: &CheckedFields<'_>) -> Self {
        Self {
            email: fields.text("email"),
            password: Sensitive::new(fields.text("password")),
        }
    }

    fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.insert("email".into(), Value::String(self.email.clone()));
        payload.insert("password".into(), Value::String(self.password.as_str().into()));
        payload
    }
}

impl Validate for Request {
    fn validate(&self) -> Result<(), ValidateError> {
        check_payload(Self::RULES, &self.to_payload())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ViolationKind;

    #[test]
    fn test_password_is_only_required() {
        let form = Request {
            email: "memo@example.com".into(),
            password: "x".into(),
        };
        assert!(form.validate().is_ok());

        let form = Request {
            email: "memo@example.com".into(),
            password: "".into(),
        };
        let error = form.validate().unwrap_err();
        assert_eq!(error.len(), 1);
        assert!(error.contains("password", ViolationKind::MissingField));
    }

    #[test]
    fn test_debug_hides_password() {
        let form = Request {
            email: "memo@example.com".into(),
            password: "hunter22".into(),
        };
        let output = format!("{form:?}");
        assert!(output.contains("memo@example.com"));
        assert!(!output.contains("hunter22"));
    }
}
