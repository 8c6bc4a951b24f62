use crate::HasLength;
use std::borrow::Cow;

/// Text presentation and emoji presentation selectors. They only change
/// how the previous character is drawn, so they are not counted.
const PRESENTATION_SELECTORS: [char; 2] = ['\u{FE0E}', '\u{FE0F}'];

fn text_length(value: &str) -> usize {
  value.chars().filter(|c| !PRESENTATION_SELECTORS.contains(c)).count()
}

impl<'a> HasLength for Cow<'a, str> {
  fn length(&self) -> usize {
    text_length(self)
  }
}

impl<'a> HasLength for &'a String {
  fn length(&self) -> usize {
    text_length(self)
  }
}

impl HasLength for String {
  fn length(&self) -> usize {
    text_length(self)
  }
}

impl<'a> HasLength for &'a str {
  fn length(&self) -> usize {
    text_length(self)
  }
}

impl HasLength for str {
  fn length(&self) -> usize {
    text_length(self)
  }
}
