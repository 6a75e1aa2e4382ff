//! The data model of the checker, and the environment of accepted items.
//!
//! An [`Environment`] is a persistent value: every insertion returns a new
//! environment and leaves the old one valid, so a caller can keep the last
//! known good environment and discard a failed item without any cleanup.

use std::fmt;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use crate::{Ident, SortData};
use crate::error::{Namespace, Result, SpecError};

/// The type of a regular variable: a sort, together with the list of
/// bound variables that may appear free in values of this type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepType {
  /// The base sort.
  pub sort: Ident,
  /// The bound variables this type depends on.
  #[serde(default)]
  pub deps: Vec<Ident>,
}

impl DepType {
  /// A type with no dependencies.
  #[must_use]
  pub fn new(sort: impl Into<Ident>) -> Self { Self { sort: sort.into(), deps: vec![] } }

  /// A type depending on the given bound variables.
  #[must_use]
  pub fn with_deps(sort: impl Into<Ident>, deps: impl IntoIterator<Item=impl Into<Ident>>) -> Self {
    Self { sort: sort.into(), deps: deps.into_iter().map(Into::into).collect() }
  }
}

impl fmt::Display for DepType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.sort)?;
    for v in &self.deps { write!(f, " {v}")? }
    Ok(())
  }
}

/// A parameter of a declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PBinder {
  /// A bound variable `{x : s}`, which may be named in later dependency lists.
  Bound(Ident, Ident),
  /// A regular variable `(x : s deps)`.
  Reg(Ident, DepType),
}

impl PBinder {
  /// The name of the variable introduced by this binder.
  #[must_use]
  pub fn var(&self) -> &Ident {
    match self { PBinder::Bound(x, _) | PBinder::Reg(x, _) => x }
  }

  /// The declared type of this binder. A bound variable has the
  /// dependency-free type of its sort.
  #[must_use]
  pub fn ty(&self) -> DepType {
    match self {
      PBinder::Bound(_, s) => DepType::new(s.clone()),
      PBinder::Reg(_, ty) => ty.clone(),
    }
  }

  /// The base sort of this binder.
  #[must_use]
  pub fn sort(&self) -> &Ident {
    match self {
      PBinder::Bound(_, s) | PBinder::Reg(_, DepType { sort: s, .. }) => s,
    }
  }
}

impl fmt::Display for PBinder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PBinder::Bound(x, s) => write!(f, "{{{x}: {s}}}"),
      PBinder::Reg(x, ty) => write!(f, "({x}: {ty})"),
    }
  }
}

/// An expression of the term calculus.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SExpr {
  /// A reference to a variable in the local context.
  Var(Ident),
  /// An application of a term or definition to arguments.
  App(Ident, Vec<SExpr>),
}

impl SExpr {
  /// Construct a variable reference.
  #[must_use]
  pub fn var(x: impl Into<Ident>) -> Self { SExpr::Var(x.into()) }

  /// Construct an application.
  #[must_use]
  pub fn app(t: impl Into<Ident>, args: Vec<SExpr>) -> Self { SExpr::App(t.into(), args) }
}

impl fmt::Display for SExpr {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SExpr::Var(x) => write!(f, "{x}"),
      SExpr::App(t, es) if es.is_empty() => write!(f, "{t}"),
      SExpr::App(t, es) => write!(f, "({t} {})", es.iter().format(" ")),
    }
  }
}

/// The value of a definition: dummy variables (name and sort) and the body.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefBody {
  /// Dummy variables, which are bound inside `body` only.
  #[serde(default)]
  pub dummies: Vec<(Ident, Ident)>,
  /// The definition body.
  pub body: SExpr,
}

/// A declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decl {
  /// A term constructor.
  Term {
    /// The parameters.
    args: Vec<PBinder>,
    /// The return type.
    ret: DepType,
  },
  /// A definition, optionally with a body.
  Def {
    /// The parameters.
    args: Vec<PBinder>,
    /// The return type.
    ret: DepType,
    /// The body, if it is given in the specification.
    #[serde(default)]
    val: Option<DefBody>,
  },
  /// An axiom schema.
  Axiom {
    /// The parameters.
    args: Vec<PBinder>,
    /// The hypotheses.
    hyps: Vec<SExpr>,
    /// The conclusion.
    ret: SExpr,
  },
}

impl Decl {
  /// The parameters of the declaration.
  #[must_use]
  pub fn args(&self) -> &[PBinder] {
    match self {
      Decl::Term { args, .. } | Decl::Def { args, .. } | Decl::Axiom { args, .. } => args,
    }
  }

  /// The signature `(args, ret)` of a term or definition, or `None` for an axiom.
  #[must_use]
  pub fn signature(&self) -> Option<(&[PBinder], &DepType)> {
    match self {
      Decl::Term { args, ret } | Decl::Def { args, ret, .. } => Some((&**args, ret)),
      Decl::Axiom { .. } => None,
    }
  }

  /// The keyword for this kind of declaration.
  #[must_use]
  pub fn kind(&self) -> &'static str {
    match self {
      Decl::Term { .. } => "term",
      Decl::Def { .. } => "def",
      Decl::Axiom { .. } => "axiom",
    }
  }
}

/// An `input` or `output` command. These are not checked; they are
/// recorded in the log for later processing (see [`crate::inout`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Inout {
  /// `input string: e1 e2 ...;`
  Input(Vec<SExpr>),
  /// `output string: e1 e2 ...;`
  Output(Vec<SExpr>),
}

/// A top level item of a specification.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spec {
  /// A sort declaration.
  Sort {
    /// The sort name.
    name: Ident,
    /// The sort modifiers.
    #[serde(default)]
    data: SortData,
  },
  /// A term, definition or axiom.
  Decl {
    /// The declaration name.
    name: Ident,
    /// The declaration.
    decl: Decl,
  },
  /// A theorem statement. Its signature is checked like an axiom, but it is
  /// only recorded in the log, not in the declaration namespace.
  Thm {
    /// The theorem name.
    name: Ident,
    /// The parameters.
    args: Vec<PBinder>,
    /// The hypotheses.
    hyps: Vec<SExpr>,
    /// The conclusion.
    ret: SExpr,
  },
  /// An input/output command.
  Inout(Inout),
}

impl Spec {
  /// The name introduced by this item, if any.
  #[must_use]
  pub fn name(&self) -> Option<&Ident> {
    match self {
      Spec::Sort { name, .. } | Spec::Decl { name, .. } | Spec::Thm { name, .. } => Some(name),
      Spec::Inout(_) => None,
    }
  }

  /// The keyword for this kind of item.
  #[must_use]
  pub fn kind(&self) -> &'static str {
    match self {
      Spec::Sort { .. } => "sort",
      Spec::Decl { decl, .. } => decl.kind(),
      Spec::Thm { .. } => "theorem",
      Spec::Inout(Inout::Input(_)) => "input",
      Spec::Inout(Inout::Output(_)) => "output",
    }
  }
}

/// The accumulated record of accepted sorts and declarations.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Environment {
  sorts: im::HashMap<Ident, SortData>,
  decls: im::HashMap<Ident, Decl>,
  spec: im::Vector<Spec>,
}

impl Environment {
  /// Creates an empty environment.
  #[must_use]
  pub fn new() -> Self { Self::default() }

  /// The map from sort names to sort data.
  #[must_use]
  pub fn sorts(&self) -> &im::HashMap<Ident, SortData> { &self.sorts }

  /// The map from declaration names to declarations.
  #[must_use]
  pub fn decls(&self) -> &im::HashMap<Ident, Decl> { &self.decls }

  /// Every accepted item, in the order it was accepted.
  #[must_use]
  pub fn spec(&self) -> &im::Vector<Spec> { &self.spec }

  /// Look up a sort.
  pub fn sort(&self, s: &str) -> Result<SortData> {
    self.sorts.get(s).copied().ok_or_else(|| SpecError::SortNotFound(s.into()))
  }

  /// Look up a declaration.
  #[must_use]
  pub fn decl(&self, d: &str) -> Option<&Decl> { self.decls.get(d) }

  /// Look up the signature of a term or definition. Axioms have no
  /// signature, so naming one is also [`SpecError::TermNotFound`].
  pub fn term(&self, t: &str) -> Result<(&[PBinder], &DepType)> {
    self.decls.get(t).and_then(Decl::signature)
      .ok_or_else(|| SpecError::TermNotFound(t.into()))
  }

  /// Add a sort, failing if the name is already a sort.
  pub fn insert_sort(&self, name: Ident, data: SortData) -> Result<Self> {
    if self.sorts.contains_key(&name) {
      return Err(SpecError::DuplicateName(Namespace::Sort, name))
    }
    let mut env = self.clone();
    env.sorts.insert(name.clone(), data);
    env.spec.push_back(Spec::Sort { name, data });
    Ok(env)
  }

  /// Add a declaration, failing if the name is already a declaration.
  pub fn insert_decl(&self, name: Ident, decl: Decl) -> Result<Self> {
    if self.decls.contains_key(&name) {
      return Err(SpecError::DuplicateName(Namespace::Decl, name))
    }
    let mut env = self.clone();
    env.decls.insert(name.clone(), decl.clone());
    env.spec.push_back(Spec::Decl { name, decl });
    Ok(env)
  }

  /// Add an item of any kind. Sorts and declarations go through
  /// [`insert_sort`](Self::insert_sort) and [`insert_decl`](Self::insert_decl);
  /// everything else is appended to the log as is.
  pub fn insert_spec(&self, item: Spec) -> Result<Self> {
    match item {
      Spec::Sort { name, data } => self.insert_sort(name, data),
      Spec::Decl { name, decl } => self.insert_decl(name, decl),
      item @ (Spec::Thm { .. } | Spec::Inout(_)) => {
        let mut env = self.clone();
        env.spec.push_back(item);
        Ok(env)
      }
    }
  }
}
