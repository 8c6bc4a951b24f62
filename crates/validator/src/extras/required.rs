/// A string satisfies "required" when it carries at least one character.
/// Whitespace counts as content.
#[must_use]
pub fn validate_required(value: &str) -> bool {
  !value.is_empty()
}
