//! Support for the `input` and `output` commands.
//!
//! These commands are passed through the checker unchanged. After a unit
//! has been checked, [`run_output`] replays the `output string` commands of
//! the environment, evaluating each expression to a byte string using the
//! string vocabulary of the specification:
//!
//! ```text
//! strict provable sort hex;  term x0: hex; ... term xf: hex;
//! strict provable sort char; term ch: hex > hex > char;
//! strict provable sort string;
//! term s0: string; term s1: char > string; term sadd: string > string > string;
//! ```
//!
//! Definitions are unfolded during evaluation.

use std::collections::HashMap;
use std::io;
use itertools::Itertools;
use log::debug;
use thiserror::Error;
use crate::{Decl, DefBody, Environment, Ident, Inout, LocalCtx, PBinder, SExpr, Spec};
use crate::check::infer_sexpr;
use crate::error::SpecError;

/// The error type returned by [`run_output`] and [`eval_string`].
#[derive(Error, Debug)]
pub enum OutputError {
  /// The underlying writer threw an IO error.
  #[error(transparent)]
  Io(#[from] io::Error),
  /// A sort or term of the string vocabulary is missing, or an output
  /// expression does not type check.
  #[error(transparent)]
  Spec(#[from] SpecError),
  /// A term of the string vocabulary was declared as a `def`.
  #[error("def '{0}' should be a term")]
  NotATerm(Ident),
  /// A term of the string vocabulary has the wrong signature.
  #[error("term '{name}' has incorrect type, expected: {expected}")]
  BadSignature {
    /// The term.
    name: Ident,
    /// The expected signature, as `s1 > s2 > ... > ret`.
    expected: String,
  },
  /// An output expression does not have sort `string`.
  #[error("type error: expected string, got {0}")]
  NotString(Ident),
  /// A term that is neither part of the string vocabulary nor a definition
  /// with a body was reached during evaluation.
  #[error("cannot evaluate term '{0}' in a string")]
  Opaque(Ident),
  /// A dummy variable was reached during evaluation.
  #[error("dummy variable '{0}' not permitted in a string")]
  Dummy(Ident),
  /// A variable with no value was reached during evaluation.
  #[error("variable '{0}' has no value")]
  Unbound(Ident),
}

type Result<T> = std::result::Result<T, OutputError>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum StringOp {
  S0,
  S1,
  SAdd,
  Ch,
  Hex(u8),
}

/// The value of a string-vocabulary expression.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Value {
  /// A value of sort `hex`.
  Hex(u8),
  /// A value of sort `char` or `string`.
  Str(Vec<u8>),
}

impl Value {
  fn hex(self, t: &Ident) -> Result<u8> {
    match self { Value::Hex(h) => Ok(h), Value::Str(_) => Err(OutputError::Opaque(t.clone())) }
  }
  fn str(self, t: &Ident) -> Result<Vec<u8>> {
    match self { Value::Str(s) => Ok(s), Value::Hex(_) => Err(OutputError::Opaque(t.clone())) }
  }
}

/// The string vocabulary of an environment, located and validated.
#[derive(Debug)]
pub struct StringHandler {
  string: Ident,
  terms: HashMap<Ident, StringOp>,
}

fn check_term(env: &Environment, name: &str, args: &[&str], ret: &str) -> Result<()> {
  let (bis, r) = match env.decl(name) {
    Some(Decl::Term { args: bis, ret: r }) => (bis, r),
    Some(Decl::Def { .. }) => return Err(OutputError::NotATerm(name.into())),
    Some(Decl::Axiom { .. }) | None => return Err(SpecError::TermNotFound(name.into()).into()),
  };
  let ok = r.sort == ret && r.deps.is_empty() &&
    bis.len() == args.len() &&
    bis.iter().zip(args).all(|(bi, &arg)|
      matches!(bi, PBinder::Reg(_, ty) if ty.sort == arg && ty.deps.is_empty()));
  if ok { Ok(()) } else {
    Err(OutputError::BadSignature {
      name: name.into(),
      expected: args.iter().chain(Some(&ret)).join(" > "),
    })
  }
}

impl StringHandler {
  /// Find the string vocabulary in `env`.
  pub fn new(env: &Environment) -> Result<Self> {
    let (string, hex, chr) = ("string", "hex", "char");
    for s in [string, hex, chr] { env.sort(s)?; }
    let mut terms: HashMap<Ident, StringOp> = HashMap::new();
    let mut add = |name: &str, args: &[&str], ret: &str, op: StringOp| -> Result<()> {
      check_term(env, name, args, ret)?;
      terms.insert(name.into(), op);
      Ok(())
    };
    add("s0", &[], string, StringOp::S0)?;
    add("s1", &[chr], string, StringOp::S1)?;
    add("sadd", &[string, string], string, StringOp::SAdd)?;
    add("ch", &[hex, hex], chr, StringOp::Ch)?;
    for i in 0..16_u8 {
      add(&format!("x{i:x}"), &[], hex, StringOp::Hex(i))?;
    }
    Ok(Self { string: string.into(), terms })
  }

  fn eval(&self, env: &Environment, vars: &HashMap<Ident, Value>, e: &SExpr) -> Result<Value> {
    match e {
      SExpr::Var(x) => vars.get(x).cloned().ok_or_else(|| OutputError::Unbound(x.clone())),
      SExpr::App(t, es) => match self.terms.get(t) {
        Some(StringOp::S0) => Ok(Value::Str(vec![])),
        Some(StringOp::S1) => self.eval(env, vars, arg(t, es, 0)?),
        Some(StringOp::SAdd) => {
          let mut s = self.eval(env, vars, arg(t, es, 0)?)?.str(t)?;
          s.extend(self.eval(env, vars, arg(t, es, 1)?)?.str(t)?);
          Ok(Value::Str(s))
        }
        Some(StringOp::Ch) => {
          let hi = self.eval(env, vars, arg(t, es, 0)?)?.hex(t)?;
          let lo = self.eval(env, vars, arg(t, es, 1)?)?.hex(t)?;
          Ok(Value::Str(vec![hi << 4 | lo]))
        }
        Some(&StringOp::Hex(h)) => Ok(Value::Hex(h)),
        None => match env.decl(t) {
          Some(Decl::Def { args, val: Some(DefBody { dummies, body }), .. }) => {
            let mut sub = HashMap::with_capacity(args.len());
            for (bi, e) in args.iter().zip(es) {
              sub.insert(bi.var().clone(), self.eval(env, vars, e)?);
            }
            for (x, _) in dummies { sub.remove(x); }
            if let Some((x, _)) = dummies.iter().find(|(x, _)| occurs(x, body)) {
              return Err(OutputError::Dummy(x.clone()))
            }
            self.eval(env, &sub, body)
          }
          _ => Err(OutputError::Opaque(t.clone())),
        }
      }
    }
  }

  /// Evaluate a list of expressions of sort `string` and concatenate the results.
  pub fn eval_string(&self, env: &Environment, exprs: &[SExpr]) -> Result<Vec<u8>> {
    let ctx = LocalCtx::new();
    let mut out = vec![];
    for e in exprs {
      let s = infer_sexpr(env, &ctx, e)?;
      if s != self.string { return Err(OutputError::NotString(s)) }
      out.extend(self.eval(env, &HashMap::new(), e)?.str(&self.string)?);
    }
    Ok(out)
  }
}

fn arg<'a>(t: &Ident, es: &'a [SExpr], i: usize) -> Result<&'a SExpr> {
  es.get(i).ok_or_else(|| OutputError::Opaque(t.clone()))
}

/// Returns true if the variable `x` appears in `e`.
fn occurs(x: &Ident, e: &SExpr) -> bool {
  match e {
    SExpr::Var(y) => x == y,
    SExpr::App(_, es) => es.iter().any(|e| occurs(x, e)),
  }
}

/// Evaluate a list of string expressions in `env` to bytes.
pub fn eval_string(env: &Environment, exprs: &[SExpr]) -> Result<Vec<u8>> {
  StringHandler::new(env)?.eval_string(env, exprs)
}

/// Run all the `output` commands in the environment, in order,
/// writing output to the provided writer. `input` commands are skipped.
pub fn run_output(env: &Environment, mut w: impl io::Write) -> Result<()> {
  let mut handler = None;
  for s in env.spec() {
    if let Spec::Inout(Inout::Output(exprs)) = s {
      let h = match handler.take() {
        Some(h) => h,
        None => StringHandler::new(env)?,
      };
      let bytes = h.eval_string(env, exprs)?;
      handler = Some(h);
      debug!("output: {} bytes", bytes.len());
      w.write_all(&bytes)?;
    }
  }
  Ok(())
}
