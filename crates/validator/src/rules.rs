//! Declarative rule tables.
//!
//! A form is described as an ordered table of fields, each carrying an
//! ordered list of [`Rule`]s. [`check`] walks the whole table and reports
//! every failure at once instead of stopping at the first one.
use crate::extras::{validate_email, validate_length, validate_required};
use crate::{MessageBuilder, Messages, ValidateError, ViolationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
  /// Must carry at least one character.
  Required,
  /// Must be a syntactically valid e-mail address.
  Email,
  /// Must be at least this many characters long.
  MinLength(usize),
}

impl Rule {
  fn apply(self, field: &str, value: &str, msg: &mut MessageBuilder) {
    match self {
      Rule::Required => {
        if !validate_required(value) {
          msg.insert(ViolationKind::MissingField, format!("{field} should not be empty"));
        }
      },
      Rule::Email => {
        if !validate_email(value) {
          msg.insert(ViolationKind::InvalidFormat, format!("{field} must be an email"));
        }
      },
      Rule::MinLength(min) => {
        if !validate_length(value, Some(min), None, None) {
          msg.insert(
            ViolationKind::TooShort,
            format!("{field} must be longer than or equal to {min} characters"),
          );
        }
      },
    }
  }
}

/// The rules attached to one field of a form.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
  pub field: &'static str,
  pub rules: &'static [Rule],
}

/// What a payload holds under a field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
  /// The key is missing or its value is `null`.
  Absent,
  Text(&'a str),
  /// Anything that is not a string (numbers, objects, ...).
  Other,
}

/// Runs every rule of every field in `table` against the values returned
/// by `lookup`, collecting all violations in table order.
///
/// An absent field yields a single [`ViolationKind::MissingField`] and a
/// non-string value a single [`ViolationKind::InvalidFormat`]; in both cases
/// the field's own rules are skipped since there is nothing to inspect.
pub fn check<'a, F>(table: &[FieldRules], mut lookup: F) -> Result<(), ValidateError>
where
  F: FnMut(&str) -> FieldValue<'a>,
{
  let mut fields = ValidateError::field_builder();
  for FieldRules { field, rules } in table {
    fields.insert(*field, check_field(field, rules, lookup(field)));
  }
  fields.build().into_result()
}

fn check_field(field: &str, rules: &[Rule], value: FieldValue<'_>) -> Messages {
  let mut msg = ValidateError::msg_builder();
  match value {
    FieldValue::Absent => {
      msg.insert(ViolationKind::MissingField, format!("{field} is required"));
    },
    FieldValue::Other => {
      msg.insert(ViolationKind::InvalidFormat, format!("{field} must be a string"));
    },
    FieldValue::Text(value) => {
      for rule in rules {
        rule.apply(field, value, &mut msg);
      }
    },
  }
  msg.build()
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  static TABLE: &[FieldRules] = &[
    FieldRules { field: "email", rules: &[Rule::Email] },
    FieldRules { field: "password", rules: &[Rule::Required, Rule::MinLength(6)] },
  ];

  fn run(values: &[(&'static str, FieldValue<'static>)]) -> Result<(), ValidateError> {
    let values = values.iter().copied().collect::<HashMap<_, _>>();
    check(TABLE, |field| values.get(field).copied().unwrap_or(FieldValue::Absent))
  }

  #[test]
  fn test_passes() {
    let result = run(&[
      ("email", FieldValue::Text("a@b.com")),
      ("password", FieldValue::Text("123456")),
    ]);
    assert!(result.is_ok());
  }

  #[test]
  fn test_absent_fields() {
    let error = run(&[]).unwrap_err();
    assert_eq!(error.len(), 2);
    assert!(error.contains("email", ViolationKind::MissingField));
    assert!(error.contains("password", ViolationKind::MissingField));
    assert_eq!(error.violations()[0].message, "email is required");
  }

  #[test]
  fn test_non_string_field() {
    let error = run(&[
      ("email", FieldValue::Other),
      ("password", FieldValue::Text("123456")),
    ])
    .unwrap_err();
    assert_eq!(error.len(), 1);
    assert!(error.contains("email", ViolationKind::InvalidFormat));
  }

  #[test]
  fn test_collects_every_rule() {
    let error = run(&[
      ("email", FieldValue::Text("nope")),
      ("password", FieldValue::Text("")),
    ])
    .unwrap_err();

    let kinds = error.violations().iter().map(|v| (v.field.as_ref(), v.kind)).collect::<Vec<_>>();
    assert_eq!(
      kinds,
      [
        ("email", ViolationKind::InvalidFormat),
        ("password", ViolationKind::MissingField),
        ("password", ViolationKind::TooShort),
      ]
    );
  }

  #[test]
  fn test_presentation_selector_does_not_lengthen_password() {
    let error = run(&[
      ("email", FieldValue::Text("a@b.com")),
      ("password", FieldValue::Text("12345\u{FE0F}")),
    ])
    .unwrap_err();
    assert_eq!(error.len(), 1);
    assert!(error.contains("password", ViolationKind::TooShort));
  }
}
