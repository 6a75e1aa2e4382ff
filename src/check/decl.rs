//! Checking term, definition, axiom and theorem declarations.

use log::trace;
use crate::{DefBody, DepType, Decl, Environment, PBinder, SExpr, Spec};
use crate::error::{Result, SpecError};
use super::{check_binders, check_sexpr, check_type, provable_sexpr};

/// Check a `term` (when `val` is `None`) or `def` declaration.
///
/// The return sort must not be `pure`. If there is a body, its dummy
/// variables are added to the context as bound variables, and the body must
/// have the return sort.
pub fn check_def(env: &Environment,
  args: &[PBinder], ret: &DepType, val: Option<&DefBody>
) -> Result<()> {
  let mut ctx = check_binders(env, args)?;
  check_type(&ctx, ret)?;
  if env.sort(&ret.sort)?.pure() {
    return Err(SpecError::PureSortAsTermReturn(ret.sort.clone()))
  }
  if let Some(DefBody { dummies, body }) = val {
    for (x, s) in dummies {
      if env.sort(s)?.nonempty() {
        return Err(SpecError::DummySortNonempty { var: x.clone(), sort: s.clone() })
      }
      ctx.push_bound(x.clone(), s.clone());
    }
    check_sexpr(env, &ctx, body, ret)?;
  }
  Ok(())
}

/// Check the statement of an `axiom` or `theorem`: every hypothesis and the
/// conclusion must have a `provable` sort.
pub fn check_axiom(env: &Environment, args: &[PBinder], hyps: &[SExpr], ret: &SExpr) -> Result<()> {
  let ctx = check_binders(env, args)?;
  for h in hyps { provable_sexpr(env, &ctx, h)? }
  provable_sexpr(env, &ctx, ret)
}

/// Check an item against `env`, the environment of all items before it.
///
/// Sorts need no checking beyond the name check done on insertion, and
/// `input`/`output` commands are not checked here.
pub fn check_spec(env: &Environment, item: &Spec) -> Result<()> {
  match item {
    Spec::Sort { .. } | Spec::Inout(_) => {}
    Spec::Decl { name, decl } => {
      trace!("checking {} {name}", decl.kind());
      match decl {
        Decl::Term { args, ret } => check_def(env, args, ret, None)?,
        Decl::Def { args, ret, val } => check_def(env, args, ret, val.as_ref())?,
        Decl::Axiom { args, hyps, ret } => check_axiom(env, args, hyps, ret)?,
      }
    }
    Spec::Thm { name, args, hyps, ret } => {
      trace!("checking theorem {name}");
      check_axiom(env, args, hyps, ret)?
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Ident, SortData};

  fn env() -> Environment {
    let env = Environment::new();
    let env = env.insert_sort("wff".into(), SortData::PROVABLE).expect("fresh");
    let env = env.insert_sort("set".into(), SortData::NONE).expect("fresh");
    let env = env.insert_sort("nat".into(), SortData::PURE).expect("fresh");
    let env = env.insert_sort("obj".into(), SortData::NONEMPTY).expect("fresh");
    let env = env.insert_decl("imp".into(), Decl::Term {
      args: vec![reg("a", "wff"), reg("b", "wff")],
      ret: DepType::new("wff"),
    }).expect("fresh");
    env.insert_decl("al".into(), Decl::Term {
      args: vec![bound("x", "set"), PBinder::Reg("ph".into(), DepType::with_deps("wff", ["x"]))],
      ret: DepType::new("wff"),
    }).expect("fresh")
  }

  fn bound(x: &str, s: &str) -> PBinder { PBinder::Bound(x.into(), s.into()) }
  fn reg(x: &str, s: &str) -> PBinder { PBinder::Reg(x.into(), DepType::new(s)) }
  fn dummy(x: &str, s: &str) -> (Ident, Ident) { (x.into(), s.into()) }

  #[test]
  fn pure_return() {
    assert_eq!(check_def(&env(), &[], &DepType::new("nat"), None).unwrap_err(),
      SpecError::PureSortAsTermReturn("nat".into()));
    assert_eq!(check_def(&env(), &[reg("a", "wff")], &DepType::new("nat"), None).unwrap_err(),
      SpecError::PureSortAsTermReturn("nat".into()));
  }

  #[test]
  fn return_type_dependencies() {
    assert!(check_def(&env(), &[bound("x", "set")], &DepType::with_deps("wff", ["x"]), None).is_ok());
    assert_eq!(
      check_def(&env(), &[reg("a", "wff")], &DepType::with_deps("wff", ["a"]), None).unwrap_err(),
      SpecError::DependsOnRegularVar("a".into()));
  }

  #[test]
  fn def_with_dummies() {
    // def ex {x : set} (ph : wff x) : wff = (imp (al y ph) ph), with dummy y
    let args = [bound("x", "set"), PBinder::Reg("ph".into(), DepType::with_deps("wff", ["x"]))];
    let body = SExpr::app("imp", vec![
      SExpr::app("al", vec![SExpr::var("y"), SExpr::var("ph")]),
      SExpr::var("ph")]);
    let val = DefBody { dummies: vec![dummy("y", "set")], body: body.clone() };
    assert_eq!(check_def(&env(), &args, &DepType::new("wff"), Some(&val)), Ok(()));

    let val = DefBody { dummies: vec![dummy("y", "obj")], body: body.clone() };
    assert_eq!(check_def(&env(), &args, &DepType::new("wff"), Some(&val)).unwrap_err(),
      SpecError::DummySortNonempty { var: "y".into(), sort: "obj".into() });

    let val = DefBody { dummies: vec![dummy("y", "cls")], body: body.clone() };
    assert_eq!(check_def(&env(), &args, &DepType::new("wff"), Some(&val)).unwrap_err(),
      SpecError::SortNotFound("cls".into()));

    let val = DefBody { dummies: vec![], body };
    assert_eq!(check_def(&env(), &args, &DepType::new("wff"), Some(&val)).unwrap_err(),
      SpecError::VarNotFound("y".into()));
  }

  #[test]
  fn body_sort_mismatch() {
    let val = DefBody { dummies: vec![], body: SExpr::var("x") };
    assert_eq!(check_def(&env(), &[bound("x", "set")], &DepType::new("wff"), Some(&val)).unwrap_err(),
      SpecError::SortMismatch { expected: "wff".into(), found: "set".into() });
  }

  #[test]
  fn axioms() {
    let mp = Spec::Decl { name: "ax-mp".into(), decl: Decl::Axiom {
      args: vec![reg("a", "wff"), reg("b", "wff")],
      hyps: vec![SExpr::var("a"), SExpr::app("imp", vec![SExpr::var("a"), SExpr::var("b")])],
      ret: SExpr::var("b"),
    }};
    assert_eq!(check_spec(&env(), &mp), Ok(()));

    let bad = Spec::Thm {
      name: "bad".into(),
      args: vec![bound("x", "set"), reg("a", "wff")],
      hyps: vec![SExpr::var("a"), SExpr::var("x")],
      ret: SExpr::var("a"),
    };
    assert_eq!(check_spec(&env(), &bad).unwrap_err(), SpecError::NotProvable("set".into()));
  }

  #[test]
  fn sorts_and_inout_pass() {
    let s = Spec::Sort { name: "wff".into(), data: SortData::NONE };
    assert_eq!(check_spec(&env(), &s), Ok(()));
    let io = Spec::Inout(crate::Inout::Output(vec![SExpr::var("whatever")]));
    assert_eq!(check_spec(&env(), &io), Ok(()));
  }
}
