use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Which kind of rule a field failed to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
  /// The field is absent, `null` or an empty string.
  MissingField,
  /// The field is present but its shape is wrong (not a string,
  /// not an e-mail address and so on).
  InvalidFormat,
  /// The field is shorter than the minimum allowed length.
  TooShort,
}

impl ViolationKind {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      ViolationKind::MissingField => "missing_field",
      ViolationKind::InvalidFormat => "invalid_format",
      ViolationKind::TooShort => "too_short",
    }
  }
}

impl std::fmt::Display for ViolationKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A single rule failure, not yet attached to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
  pub kind: ViolationKind,
  pub message: Cow<'static, str>,
}

/// A rule failure attached to the field that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldViolation {
  pub field: Cow<'static, str>,
  #[serde(rename = "rule")]
  pub kind: ViolationKind,
  pub message: Cow<'static, str>,
}

impl std::fmt::Display for FieldViolation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}: {}", self.field, self.message)
  }
}

pub struct MessageBuilder(Vec<Violation>);

impl MessageBuilder {
  #[must_use]
  pub const fn new() -> Self {
    Self(Vec::new())
  }

  pub fn insert(&mut self, kind: ViolationKind, message: impl Into<Cow<'static, str>>) {
    self.0.push(Violation { kind, message: message.into() });
  }

  #[must_use]
  pub fn build(self) -> Messages {
    Messages(self.0)
  }
}

/// Violations collected for one field, in the order they were found.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Messages(Vec<Violation>);

impl Messages {
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

pub struct FieldBuilder(Vec<FieldViolation>);

#[allow(clippy::new_without_default)]
impl FieldBuilder {
  #[must_use]
  pub fn new() -> Self {
    Self(Vec::new())
  }

  pub fn insert(&mut self, key: impl Into<Cow<'static, str>>, value: Messages) {
    if value.is_empty() {
      return;
    }

    let field = key.into();
    for Violation { kind, message } in value.0 {
      self.0.push(FieldViolation { field: field.clone(), kind, message });
    }
  }

  #[must_use]
  pub fn build(self) -> ValidateError {
    ValidateError(self.0)
  }
}

// ---------------------------------------------------- //

/// Every violation found while validating a value, in the order
/// the fields and their rules were checked.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<FieldViolation>")]
pub struct ValidateError(Vec<FieldViolation>);

impl std::fmt::Display for ValidateError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("Invalid form data occurred")
  }
}

impl std::error::Error for ValidateError {}

impl std::fmt::Debug for ValidateError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_list()
      .entries(self.0.iter().map(|v| (&v.field, v.kind, &v.message)))
      .finish()
  }
}

impl ValidateError {
  #[must_use]
  pub fn field_builder() -> FieldBuilder {
    FieldBuilder::new()
  }

  #[must_use]
  pub fn msg_builder() -> MessageBuilder {
    MessageBuilder::new()
  }
}

impl ValidateError {
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[must_use]
  pub fn violations(&self) -> &[FieldViolation] {
    &self.0
  }

  /// Violations reported for the given field only.
  pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldViolation> + 'a {
    self.0.iter().filter(move |v| v.field == field)
  }

  #[must_use]
  pub fn contains(&self, field: &str, kind: ViolationKind) -> bool {
    self.for_field(field).any(|v| v.kind == kind)
  }

  pub fn into_result(self) -> Result<(), Self> {
    if self.is_empty() {
      Ok(())
    } else {
      Err(self)
    }
  }
}

#[derive(Debug)]
pub struct EmptyValidateError;

impl std::fmt::Display for EmptyValidateError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("error fields must not be empty")
  }
}

impl TryFrom<Vec<FieldViolation>> for ValidateError {
  type Error = EmptyValidateError;

  fn try_from(value: Vec<FieldViolation>) -> Result<Self, Self::Error> {
    if value.is_empty() {
      Err(EmptyValidateError)
    } else {
      Ok(Self(value))
    }
  }
}

impl Serialize for ValidateError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    self.0.serialize(serializer)
  }
}
