//! The errors reported by the specification checker.
//!
//! Every check short-circuits on its first error. None of these errors are
//! fatal to the process: they describe a single rejected item, and the
//! environment the item was checked against is left untouched.

use std::fmt;
use thiserror::Error;
use crate::Ident;

/// The two global namespaces of an [`Environment`](crate::Environment).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
  /// Sort names.
  Sort,
  /// Term, definition and axiom names.
  Decl,
}

impl fmt::Display for Namespace {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Namespace::Sort => write!(f, "sort"),
      Namespace::Decl => write!(f, "declaration"),
    }
  }
}

/// A validation failure for a single sort or declaration.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SpecError {
  /// The name is already present in its namespace.
  #[error("{0} '{1}' already declared")]
  DuplicateName(Namespace, Ident),
  /// A sort name does not resolve.
  #[error("sort '{0}' not found")]
  SortNotFound(Ident),
  /// A variable name does not resolve in the local context.
  #[error("variable '{0}' not found")]
  VarNotFound(Ident),
  /// An application head is not a declared term or definition.
  #[error("term '{0}' not found")]
  TermNotFound(Ident),
  /// A bound variable was declared at a `strict` sort.
  #[error("variable '{var}' is bound, but sort '{sort}' is strict")]
  StrictSortBound {
    /// The bound variable.
    var: Ident,
    /// Its sort.
    sort: Ident,
  },
  /// A dependency list names a regular variable.
  #[error("variable '{0}' is a regular variable and cannot be depended on")]
  DependsOnRegularVar(Ident),
  /// A term or definition returns a `pure` sort.
  #[error("sort '{0}' is pure and cannot be the target of a term constructor")]
  PureSortAsTermReturn(Ident),
  /// A dummy variable of a definition has a `nonempty` sort.
  #[error("dummy variable '{var}' has nonempty sort '{sort}'")]
  DummySortNonempty {
    /// The dummy variable.
    var: Ident,
    /// Its sort.
    sort: Ident,
  },
  /// An expression has a different sort than was expected.
  #[error("type error: expected sort '{expected}', got '{found}'")]
  SortMismatch {
    /// The sort required by the context.
    expected: Ident,
    /// The sort inferred for the expression.
    found: Ident,
  },
  /// An application has the wrong number of arguments.
  #[error("term '{term}' expects {expected} arguments, got {found}")]
  ArityMismatch {
    /// The head of the application.
    term: Ident,
    /// The number of binders in the signature of `term`.
    expected: usize,
    /// The number of arguments supplied.
    found: usize,
  },
  /// A hypothesis or conclusion does not have a `provable` sort.
  #[error("expression has sort '{0}', which is not provable")]
  NotProvable(Ident),
}

/// Result type for the checker.
pub type Result<T> = std::result::Result<T, SpecError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages() {
    assert_eq!(SpecError::DuplicateName(Namespace::Sort, "wff".into()).to_string(),
      "sort 'wff' already declared");
    assert_eq!(SpecError::ArityMismatch { term: "imp".into(), expected: 2, found: 1 }.to_string(),
      "term 'imp' expects 2 arguments, got 1");
    assert_eq!(SpecError::StrictSortBound { var: "x".into(), sort: "var".into() }.to_string(),
      "variable 'x' is bound, but sort 'var' is strict");
  }
}
