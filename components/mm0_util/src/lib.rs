//! Utilities shared by the MM0 specification checker: the identifier type
//! and the sort modifier flags.

// rust lints we want
#![warn(
  bare_trait_objects,
  elided_lifetimes_in_paths,
  missing_copy_implementations,
  missing_debug_implementations,
  future_incompatible,
  rust_2018_idioms,
  trivial_numeric_casts,
  variant_size_differences,
  unreachable_pub,
  unused,
  missing_docs
)]
#![deny(unsafe_op_in_unsafe_fn)]
// all the clippy
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
// all the clippy::restriction lints we want
#![warn(
  clippy::else_if_without_else,
  clippy::float_arithmetic,
  clippy::get_unwrap,
  clippy::integer_division,
  clippy::rc_buffer,
  clippy::rest_pat_in_fully_bound_structs,
  clippy::string_add,
  clippy::unwrap_used
)]
// all the clippy lints we don't want
#![allow(
  clippy::missing_const_for_fn,
  clippy::missing_errors_doc,
  clippy::module_name_repetitions,
  clippy::multiple_crate_versions,
  clippy::use_self
)]

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

mod modifiers;

pub use modifiers::SortData;

/// Newtype for an `Arc<str>`, so that we can implement `From<&str>`.
///
/// This is the type of all names handled by the checker: sort names,
/// declaration names and local variable names.
#[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArcString(pub Arc<str>);

impl Borrow<str> for ArcString {
  fn borrow(&self) -> &str { &self.0 }
}
impl Deref for ArcString {
  type Target = str;
  fn deref(&self) -> &str { &self.0 }
}
impl AsRef<str> for ArcString {
  fn as_ref(&self) -> &str { &self.0 }
}
impl ArcString {
  /// Constructs a new [`ArcString`].
  #[must_use]
  pub fn new(s: &str) -> Self { Self(s.into()) }

  /// Get the underlying `&str`.
  #[must_use]
  pub fn as_str(&self) -> &str { &self.0 }
}
impl fmt::Display for ArcString {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}
impl fmt::Debug for ArcString {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:?}", &*self.0) }
}
impl From<&str> for ArcString {
  fn from(s: &str) -> Self { Self::new(s) }
}
impl From<String> for ArcString {
  fn from(s: String) -> Self { Self(s.into()) }
}
impl From<&String> for ArcString {
  fn from(s: &String) -> Self { Self::new(s) }
}
impl PartialEq<str> for ArcString {
  fn eq(&self, other: &str) -> bool { *self.0 == *other }
}
impl PartialEq<&str> for ArcString {
  fn eq(&self, other: &&str) -> bool { *self.0 == **other }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  #[test]
  fn borrow_as_str() {
    let mut map = HashMap::new();
    map.insert(ArcString::from("wff"), 1);
    assert_eq!(map.get("wff"), Some(&1));
    assert_eq!(map.get("nat"), None);
  }

  #[test]
  fn serde_transparent() {
    let s: ArcString = serde_json::from_str("\"imp\"").expect("parse");
    assert_eq!(s, "imp");
    assert_eq!(serde_json::to_string(&s).expect("print"), "\"imp\"");
  }
}
