use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{FieldRules, Rule, Validate, ValidateError};

use super::{check_payload, CheckedFields, Form, Payload};
use crate::util::Sensitive;

pub const PASSWORD_MIN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub email: String,
    pub password: Sensitive<String>,
    pub first_name: String,
    pub last_name: String,
}

impl Form for Request {
    const RULES: &'static [FieldRules] = &[
        FieldRules {
            field: "email",
            rules: &[Rule::Email],
        },
        FieldRules {
            field: "password",
            rules: &[Rule::Required, Rule::MinLength(PASSWORD_MIN)],
        },
        FieldRules {
            field: "firstName",
            rules: &[Rule::Required],
        },
        FieldRules {
            field: "lastName",
            rules: &[Rule::Required],
        },
    ];

    fn from_checked(fields: &CheckedFields<'_>) -> Self {
        Self {
            email: fields.text("email"),
            password: Sensitive::new(fields.text("password")),
            first_name: fields.text("firstName"),
            last_name: fields.text("lastName"),
        }
    }

    fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.insert("email".into(), Value::String(self.email.clone()));
        payload.insert("password".into(), Value::String(self.password.as_str().into()));
        payload.insert("firstName".into(), Value::String(self.first_name.clone()));
        payload.insert("lastName".into(), Value::String(self.last_name.clone()));
        payload
    }
}

impl Validate for Request {
    fn validate(&self) -> Result<(), ValidateError> {
        check_payload(Self::RULES, &self.to_payload())
    }
}
