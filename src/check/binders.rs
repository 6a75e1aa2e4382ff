//! Building the local context of a declaration from its binders.

use log::trace;
use crate::{DepType, Environment, PBinder};
use crate::error::{Result, SpecError};
use super::LocalCtx;

/// Check that every dependency of `ty` is a bound variable of `ctx`.
///
/// Only variables already in `ctx` are visible, so a binder can never
/// depend on itself or on a later binder.
pub fn check_type(ctx: &LocalCtx, ty: &DepType) -> Result<()> {
  for v in &ty.deps {
    match ctx.get(v) {
      None => return Err(SpecError::VarNotFound(v.clone())),
      Some(l) if !l.bound => return Err(SpecError::DependsOnRegularVar(v.clone())),
      Some(_) => {}
    }
  }
  Ok(())
}

/// Process a binder list from left to right, producing the local context
/// of the declaration.
///
/// * A bound binder `{x : s}` requires `s` to be a declared, non-`strict` sort.
/// * A regular binder `(x : s deps)` requires `s` to be declared, and every
///   variable in `deps` to be an earlier bound binder.
pub fn check_binders(env: &Environment, bis: &[PBinder]) -> Result<LocalCtx> {
  let mut ctx = LocalCtx::new();
  for bi in bis {
    match bi {
      PBinder::Bound(x, s) => {
        if env.sort(s)?.strict() {
          return Err(SpecError::StrictSortBound { var: x.clone(), sort: s.clone() })
        }
        ctx.push_bound(x.clone(), s.clone());
      }
      PBinder::Reg(x, ty) => {
        env.sort(&ty.sort)?;
        check_type(&ctx, ty)?;
        ctx.push_reg(x.clone(), ty.clone());
      }
    }
    trace!("binder {bi}");
  }
  Ok(ctx)
}
