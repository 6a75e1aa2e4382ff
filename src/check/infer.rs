//! Bidirectional sort inference for expressions.
//!
//! Inference only tracks base sorts. The dependency annotations of a
//! [`DepType`] are checked once, when the binder introducing them is
//! declared, and are not compared again at use sites.

use crate::{DepType, Environment, Ident, PBinder, SExpr};
use crate::error::{Result, SpecError};
use super::LocalCtx;

/// Infer the sort of `e`.
///
/// A variable has the base sort of its type in `ctx`. An application has the
/// return sort of its head, after its arguments are checked against the
/// head's binders.
pub fn infer_sexpr(env: &Environment, ctx: &LocalCtx, e: &SExpr) -> Result<Ident> {
  match e {
    SExpr::Var(x) => match ctx.get(x) {
      Some(l) => Ok(l.ty.sort.clone()),
      None => Err(SpecError::VarNotFound(x.clone())),
    },
    SExpr::App(t, es) => {
      let (args, ret) = env.term(t)?;
      match_types(env, ctx, t, es, args)?;
      Ok(ret.sort.clone())
    }
  }
}

/// Check that `e` has the base sort of `ty`.
pub fn check_sexpr(env: &Environment, ctx: &LocalCtx, e: &SExpr, ty: &DepType) -> Result<()> {
  let s = infer_sexpr(env, ctx, e)?;
  if s == ty.sort { Ok(()) } else {
    Err(SpecError::SortMismatch { expected: ty.sort.clone(), found: s })
  }
}

/// Check the arguments `es` of an application of `t` against the binders of `t`,
/// left to right.
pub fn match_types(env: &Environment,
  ctx: &LocalCtx, t: &Ident, es: &[SExpr], bis: &[PBinder]
) -> Result<()> {
  if es.len() != bis.len() {
    return Err(SpecError::ArityMismatch { term: t.clone(), expected: bis.len(), found: es.len() })
  }
  for (e, bi) in es.iter().zip(bis) {
    check_sexpr(env, ctx, e, &bi.ty())?
  }
  Ok(())
}

/// Check that `e` has a `provable` sort.
pub fn provable_sexpr(env: &Environment, ctx: &LocalCtx, e: &SExpr) -> Result<()> {
  let s = infer_sexpr(env, ctx, e)?;
  if env.sort(&s)?.provable() { Ok(()) } else { Err(SpecError::NotProvable(s)) }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Decl, SortData};

  fn env() -> Environment {
    let env = Environment::new();
    let env = env.insert_sort("wff".into(), SortData::PROVABLE).expect("fresh");
    let env = env.insert_sort("nat".into(), SortData::NONE).expect("fresh");
    let imp = Decl::Term {
      args: vec![PBinder::Reg("a".into(), DepType::new("wff")), PBinder::Reg("b".into(), DepType::new("wff"))],
      ret: DepType::new("wff"),
    };
    let env = env.insert_decl("imp".into(), imp).expect("fresh");
    let zero = Decl::Term { args: vec![], ret: DepType::new("nat") };
    let env = env.insert_decl("zero".into(), zero).expect("fresh");
    let ax = Decl::Axiom { args: vec![], hyps: vec![], ret: SExpr::app("zero", vec![]) };
    env.insert_decl("ax".into(), ax).expect("fresh")
  }

  fn ctx() -> LocalCtx {
    let mut ctx = LocalCtx::new();
    ctx.push_reg("p".into(), DepType::new("wff"));
    ctx.push_reg("q".into(), DepType::new("wff"));
    ctx.push_bound("n".into(), "nat".into());
    ctx
  }

  fn pq() -> SExpr { SExpr::app("imp", vec![SExpr::var("p"), SExpr::var("q")]) }

  #[test]
  fn infer_app() {
    assert_eq!(infer_sexpr(&env(), &ctx(), &pq()), Ok("wff".into()));
    assert_eq!(provable_sexpr(&env(), &ctx(), &pq()), Ok(()));
    assert_eq!(infer_sexpr(&env(), &ctx(), &SExpr::var("n")), Ok("nat".into()));
  }

  #[test]
  fn errors() {
    assert_eq!(infer_sexpr(&env(), &ctx(), &SExpr::var("r")).unwrap_err(),
      SpecError::VarNotFound("r".into()));
    assert_eq!(infer_sexpr(&env(), &ctx(), &SExpr::app("neg", vec![])).unwrap_err(),
      SpecError::TermNotFound("neg".into()));
    assert_eq!(infer_sexpr(&env(), &ctx(), &SExpr::app("ax", vec![])).unwrap_err(),
      SpecError::TermNotFound("ax".into()));
    assert_eq!(infer_sexpr(&env(), &ctx(), &SExpr::app("imp", vec![SExpr::var("p")])).unwrap_err(),
      SpecError::ArityMismatch { term: "imp".into(), expected: 2, found: 1 });
    let e = SExpr::app("imp", vec![SExpr::var("p"), SExpr::var("q"), SExpr::var("q")]);
    assert_eq!(infer_sexpr(&env(), &ctx(), &e).unwrap_err(),
      SpecError::ArityMismatch { term: "imp".into(), expected: 2, found: 3 });
    let e = SExpr::app("imp", vec![SExpr::var("p"), SExpr::var("n")]);
    assert_eq!(infer_sexpr(&env(), &ctx(), &e).unwrap_err(),
      SpecError::SortMismatch { expected: "wff".into(), found: "nat".into() });
    assert_eq!(provable_sexpr(&env(), &ctx(), &SExpr::app("zero", vec![])).unwrap_err(),
      SpecError::NotProvable("nat".into()));
  }

  #[test]
  fn first_error_wins() {
    let e = SExpr::app("imp", vec![SExpr::var("x"), SExpr::var("n")]);
    assert_eq!(infer_sexpr(&env(), &ctx(), &e).unwrap_err(), SpecError::VarNotFound("x".into()));
  }

  #[test]
  fn shallow_dependencies() {
    // only the base sort is compared
    let ty = DepType::with_deps("wff", ["n"]);
    assert_eq!(check_sexpr(&env(), &ctx(), &SExpr::var("p"), &ty), Ok(()));
  }
}
