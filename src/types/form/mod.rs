//! Credential forms accepted by the authentication endpoints.
//!
//! Every form is described by a static rule table ([`Form::RULES`]) which is
//! checked against the raw JSON object before the typed form is built, so a
//! client gets every problem with its payload in a single response.
use serde_json::{Map, Value};
use std::str::FromStr;
use validator::{FieldRules, FieldValue, ValidateError};

pub mod login;
pub mod register;

/// Raw, untyped request body.
pub type Payload = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    Registration,
}

impl FormKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FormKind::Login => "login",
            FormKind::Registration => "registration",
        }
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown form kind {0:?} (expected `login` or `registration`)")]
pub struct UnknownFormKind(String);

impl FromStr for FormKind {
    type Err = UnknownFormKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(FormKind::Login),
            "registration" | "register" => Ok(FormKind::Registration),
            _ => Err(UnknownFormKind(s.to_string())),
        }
    }
}

/// A payload that satisfied every rule of its form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedForm {
    Login(login::Request),
    Registration(register::Request),
}

impl ValidatedForm {
    #[must_use]
    pub const fn kind(&self) -> FormKind {
        match self {
            ValidatedForm::Login(..) => FormKind::Login,
            ValidatedForm::Registration(..) => FormKind::Registration,
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            ValidatedForm::Login(form) => &form.email,
            ValidatedForm::Registration(form) => &form.email,
        }
    }

    #[must_use]
    pub fn to_payload(&self) -> Payload {
        match self {
            ValidatedForm::Login(form) => form.to_payload(),
            ValidatedForm::Registration(form) => form.to_payload(),
        }
    }
}

pub trait Form: Sized {
    const RULES: &'static [FieldRules];

    /// Builds the typed form out of a payload that already passed [`Form::RULES`].
    fn from_checked(fields: &CheckedFields<'_>) -> Self;

    fn to_payload(&self) -> Payload;
}

/// Read access to a payload whose fields passed their rules.
pub struct CheckedFields<'a>(&'a Payload);

impl CheckedFields<'_> {
    /// Every field named in a rule table is known to be a string
    /// at this point, anything else reads as empty.
    #[must_use]
    pub fn text(&self, field: &str) -> String {
        self.0
            .get(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }
}

/// Checks `payload` against the rules of `kind` and returns the typed form.
///
/// Keys not named by the form are ignored and do not appear in the result.
pub fn validate(kind: FormKind, payload: &Payload) -> Result<ValidatedForm, ValidateError> {
    match kind {
        FormKind::Login => parse::<login::Request>(payload).map(ValidatedForm::Login),
        FormKind::Registration => {
            parse::<register::Request>(payload).map(ValidatedForm::Registration)
        }
    }
}

pub fn parse<F: Form>(payload: &Payload) -> Result<F, ValidateError> {
    check_payload(F::RULES, payload)?;
    Ok(F::from_checked(&CheckedFields(payload)))
}

pub fn check_payload(rules: &[FieldRules], payload: &Payload) -> Result<(), ValidateError> {
    validator::rules::check(rules, |field| match payload.get(field) {
        None | Some(Value::Null) => FieldValue::Absent,
        Some(Value::String(value)) => FieldValue::Text(value),
        Some(..) => FieldValue::Other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use validator::{Validate, ViolationKind};

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test payloads are objects"),
        }
    }

    static_assertions::assert_impl_all!(ValidatedForm: Send, Sync);
    static_assertions::assert_impl_all!(ValidateError: Send, Sync);

    #[test]
    fn login_accepts_valid_payload() {
        let form = validate(
            FormKind::Login,
            &payload(json!({ "email": "a@b.com", "password": "x" })),
        )
        .unwrap();

        let ValidatedForm::Login(form) = form else {
            panic!("expected login form");
        };
        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.password.as_str(), "x");
    }

    #[test]
    fn login_rejects_bad_email() {
        let error = validate(
            FormKind::Login,
            &payload(json!({ "email": "not-an-email", "password": "x" })),
        )
        .unwrap_err();

        assert_eq!(error.len(), 1);
        assert!(error.contains("email", ViolationKind::InvalidFormat));
    }

    #[test]
    fn missing_email_is_reported() {
        for kind in [FormKind::Login, FormKind::Registration] {
            let error = validate(kind, &payload(json!({ "password": "123456" }))).unwrap_err();
            assert!(
                error.contains("email", ViolationKind::MissingField),
                "{kind}: {error:?}"
            );
        }

        let error = validate(
            FormKind::Login,
            &payload(json!({ "email": null, "password": "x" })),
        )
        .unwrap_err();
        assert!(error.contains("email", ViolationKind::MissingField));
    }

    #[test]
    fn registration_rejects_short_password() {
        let error = validate(
            FormKind::Registration,
            &payload(json!({
                "email": "a@b.com",
                "password": "12345",
                "firstName": "A",
                "lastName": "B",
            })),
        )
        .unwrap_err();

        assert_eq!(error.len(), 1);
        assert!(error.contains("password", ViolationKind::TooShort));
    }

    #[test]
    fn registration_accepts_valid_payload() {
        let form = validate(
            FormKind::Registration,
            &payload(json!({
                "email": "a@b.com",
                "password": "123456",
                "firstName": "A",
                "lastName": "B",
            })),
        )
        .unwrap();

        let ValidatedForm::Registration(form) = form else {
            panic!("expected registration form");
        };
        assert_eq!(form.first_name, "A");
        assert_eq!(form.last_name, "B");
    }

    #[test]
    fn registration_collects_every_violation() {
        let error = validate(
            FormKind::Registration,
            &payload(json!({ "email": "nope", "password": "", "lastName": 42 })),
        )
        .unwrap_err();

        let found = error
            .violations()
            .iter()
            .map(|v| (v.field.as_ref(), v.kind))
            .collect::<Vec<_>>();

        assert_eq!(
            found,
            [
                ("email", ViolationKind::InvalidFormat),
                ("password", ViolationKind::MissingField),
                ("password", ViolationKind::TooShort),
                ("firstName", ViolationKind::MissingField),
                ("lastName", ViolationKind::InvalidFormat),
            ]
        );
    }

    #[test]
    fn unknown_keys_are_dropped() {
        let form = validate(
            FormKind::Login,
            &payload(json!({ "email": "a@b.com", "password": "x", "admin": true })),
        )
        .unwrap();

        let keys = form.to_payload().keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&"email".to_string()));
        assert!(keys.contains(&"password".to_string()));
    }

    #[test]
    fn revalidation_is_idempotent() {
        let raw = payload(json!({
            "email": "a@b.com",
            "password": "123456",
            "firstName": "A",
            "lastName": "B",
        }));

        let first = validate(FormKind::Registration, &raw).unwrap();
        let second = validate(FormKind::Registration, &first.to_payload()).unwrap();
        assert_eq!(first, second);

        let ValidatedForm::Registration(form) = second else {
            panic!("expected registration form");
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn form_kind_from_str() {
        assert_eq!("login".parse::<FormKind>().unwrap(), FormKind::Login);
        assert_eq!("register".parse::<FormKind>().unwrap(), FormKind::Registration);
        assert_eq!(
            "registration".parse::<FormKind>().unwrap(),
            FormKind::Registration
        );
        assert!("logout".parse::<FormKind>().is_err());
    }
}
