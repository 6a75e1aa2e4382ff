//! Sort modifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

bitflags::bitflags! {
  /// The flags attached to a sort declaration. A sort's flags are fixed
  /// when it is declared.
  #[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
  #[serde(transparent)]
  pub struct SortData: u8 {
    /// The `pure` sort modifier, used to indicate that
    /// term constructors can not target this sort.
    const PURE = 1;

    /// The `strict` sort modifier, used to indicate that
    /// bound variables of this sort are not allowed.
    const STRICT = 2;

    /// The `provable` sort modifier, used to indicate that this sort
    /// can appear as the sort of hypotheses and conclusions of
    /// `axiom` and `theorem` declarations.
    const PROVABLE = 4;

    /// The `nonempty` sort modifier. A definition may not introduce
    /// dummy variables of a sort carrying this flag.
    const NONEMPTY = 8;
  }
}

impl Default for SortData {
  fn default() -> Self { Self::NONE }
}

impl SortData {
  /// The null modifier set. Modifiers are represented as bitfields, so this is the same as `0`.
  pub const NONE: SortData = Self::empty();

  /// Is the `strict` flag set?
  #[must_use]
  pub fn strict(self) -> bool { self.contains(Self::STRICT) }

  /// Is the `pure` flag set?
  #[must_use]
  pub fn pure(self) -> bool { self.contains(Self::PURE) }

  /// Is the `provable` flag set?
  #[must_use]
  pub fn provable(self) -> bool { self.contains(Self::PROVABLE) }

  /// Is the `nonempty` flag set?
  #[must_use]
  pub fn nonempty(self) -> bool { self.contains(Self::NONEMPTY) }

  /// Parses a string into a singleton [`SortData`], or [`None`] if the string is not
  /// a sort modifier.
  #[must_use]
  pub fn from_keyword(s: &str) -> Option<SortData> {
    match s {
      "pure" => Some(Self::PURE),
      "strict" => Some(Self::STRICT),
      "provable" => Some(Self::PROVABLE),
      "nonempty" => Some(Self::NONEMPTY),
      _ => None
    }
  }
}

impl fmt::Display for SortData {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.pure() {write!(f, "pure ")?}
    if self.strict() {write!(f, "strict ")?}
    if self.provable() {write!(f, "provable ")?}
    if self.nonempty() {write!(f, "nonempty ")?}
    Ok(())
  }
}

impl fmt::Debug for SortData {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_empty() { return write!(f, "SortData(NONE)") }
    bitflags::parser::to_writer(self, &mut *f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn flags_are_independent() {
    let sd = SortData::STRICT | SortData::PROVABLE;
    assert!(sd.strict() && sd.provable());
    assert!(!sd.pure() && !sd.nonempty());
    assert!(SortData::default().is_empty());
  }

  #[test]
  fn names() {
    let sd = ["pure", "nonempty"].iter()
      .filter_map(|s| SortData::from_keyword(s))
      .fold(SortData::NONE, |a, b| a | b);
    assert_eq!(sd, SortData::PURE | SortData::NONEMPTY);
    assert_eq!(SortData::from_keyword("free"), None);
    // keywords are lowercase; flag names are the bitflags constants
    assert_eq!(SortData::from_keyword("PURE"), None);
    assert_eq!(SortData::from_name("PURE"), Some(SortData::PURE));
    assert_eq!(sd.to_string(), "pure nonempty ");
  }

  #[test]
  fn serde_flags() {
    let sd: SortData = serde_json::from_str("\"STRICT | PROVABLE\"").expect("parse");
    assert_eq!(sd, SortData::STRICT | SortData::PROVABLE);
    let sd: SortData = serde_json::from_str("\"\"").expect("parse");
    assert_eq!(sd, SortData::NONE);
  }
}
