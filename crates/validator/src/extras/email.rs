use once_cell::sync::Lazy;
use regex::Regex;

pub const EMAIL_MAX: usize = 254;
pub const EMAIL_LOCAL_MAX: usize = 64;

#[allow(clippy::expect_used)]
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
  Regex::new(concat!(
    r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}-]+",
    r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+",
    r"(?:[A-Za-z]{2,63}|xn--[A-Za-z0-9-]{1,59})$",
  ))
  .expect("compile email regex")
});

/// Checks whether the given string is a syntactically valid e-mail address.
///
/// The local part may hold non-ASCII letters. The host must be a domain
/// name whose top-level label is made of letters or is punycode (`xn--`),
/// so bare host names (`user@localhost`) and IP address literals are rejected.
/// Dots in the local part may not lead, trail or repeat. Both length limits
/// are measured in bytes.
#[must_use]
pub fn validate_email(email: &str) -> bool {
  if email.len() > EMAIL_MAX || !EMAIL_REGEX.is_match(email) {
    return false;
  }

  let Some((local, _)) = email.rsplit_once('@') else {
    return false;
  };

  local.len() <= EMAIL_LOCAL_MAX && local.split('.').all(|part| !part.is_empty())
}

#[cfg(test)]
mod tests {
  use super::validate_email;

  #[test]
  fn test_valid_emails() {
    assert!(validate_email("a@b.com"));
    assert!(validate_email("gush@gmail.com"));
    assert!(validate_email("first.last+tag@mail.example.co"));
    assert!(validate_email("o'brien@host-name.org"));
    assert!(validate_email("josé@example.com"));
    assert!(validate_email("用户@example.com"));
    assert!(validate_email("user@example.xn--p1ai"));
  }

  #[test]
  fn test_invalid_emails() {
    assert!(!validate_email(""));
    assert!(!validate_email("not-an-email"));
    assert!(!validate_email("nada_neutho"));
    assert!(!validate_email("a@b"));
    assert!(!validate_email("a@b.c"));
    assert!(!validate_email("@b.com"));
    assert!(!validate_email("a b@b.com"));
    assert!(!validate_email("a@-b.com"));
    assert!(!validate_email("a@b-.com"));
    assert!(!validate_email("a@127.0.0.1"));
    assert!(!validate_email(".a@b.com"));
    assert!(!validate_email("a.@b.com"));
    assert!(!validate_email("a..b@b.com"));
    assert!(!validate_email("a@b.com "));
    assert!(!validate_email("a@b.xn--"));
    assert!(!validate_email("a@b.xn-p1ai"));
  }

  #[test]
  fn test_length_limits() {
    let local = "a".repeat(65);
    assert!(!validate_email(&format!("{local}@b.com")));

    let local = "a".repeat(64);
    assert!(validate_email(&format!("{local}@b.com")));

    let domain = format!("{}.com", vec!["a".repeat(60); 5].join("."));
    assert!(!validate_email(&format!("user@{domain}")));
  }
}
