//! The specification checker proper.
//!
//! Checking a declaration happens in three layers:
//!
//! - [`binders`]: the parameter list is turned into a [`LocalCtx`], checking
//!   sort flags and dependency scoping.
//! - [`decl`]: the signature (and definition body, if any) is checked in that
//!   context, enforcing purity and provability.
//! - [`infer`]: expressions are given sorts bidirectionally.
//!
//! All of these are pure functions of the [`Environment`](crate::Environment)
//! they are given.

pub mod binders;
pub mod decl;
pub mod infer;

use crate::{DepType, Ident};

pub use binders::{check_binders, check_type};
pub use decl::{check_axiom, check_def, check_spec};
pub use infer::{check_sexpr, infer_sexpr, match_types, provable_sexpr};

/// A local variable in a [`LocalCtx`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Local {
  /// True if this is a bound variable, which may be named in dependency lists.
  pub bound: bool,
  /// The type of the variable. Bound variables have no dependencies.
  pub ty: DepType,
}

/// The typing context of a declaration, mapping variable names to their
/// kind and type.
#[derive(Clone, Debug, Default)]
pub struct LocalCtx(im::HashMap<Ident, Local>);

impl LocalCtx {
  /// An empty context.
  #[must_use]
  pub fn new() -> Self { Self::default() }

  /// Look up a variable.
  #[must_use]
  pub fn get(&self, x: &str) -> Option<&Local> { self.0.get(x) }

  /// The number of variables in scope.
  #[must_use]
  pub fn len(&self) -> usize { self.0.len() }

  /// Returns true if no variables are in scope.
  #[must_use]
  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  /// Add a bound variable of sort `s`. A variable of the same name is shadowed.
  pub fn push_bound(&mut self, x: Ident, s: Ident) {
    self.0.insert(x, Local { bound: true, ty: DepType::new(s) });
  }

  /// Add a regular variable. A variable of the same name is shadowed.
  pub fn push_reg(&mut self, x: Ident, ty: DepType) {
    self.0.insert(x, Local { bound: false, ty });
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn shadowing() {
    let mut ctx = LocalCtx::new();
    ctx.push_bound("x".into(), "var".into());
    ctx.push_reg("x".into(), DepType::new("wff"));
    assert_eq!(ctx.len(), 1);
    let x = ctx.get("x").expect("in scope");
    assert!(!x.bound);
    assert_eq!(x.ty.sort, "wff");
  }
}
