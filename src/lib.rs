//! MM0 specification checker.
//!
//! This crate validates the declarations of an MM0 specification (sorts,
//! terms, definitions, axioms and theorem statements) in order, against an
//! accumulating [`Environment`], before any of them can be referenced.
//!
//! ```text
//! USAGE:
//! mm0-spec <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     check    Check a specification file
//!     dump     Print the accepted items of a specification file as JSON
//!     help     Prints this message or the help of the given subcommand(s)
//! ```
//!
//! The input is a stream of [`Spec`] items as produced by a parser. A typical
//! use looks like this:
//!
//! ```
//! use mm0_spec::{compiler::{check_all, Policy}, DepType, Decl, SortData, Spec};
//!
//! let items = vec![
//!   Spec::Sort { name: "wff".into(), data: SortData::PROVABLE },
//!   Spec::Decl { name: "tru".into(), decl: Decl::Term { args: vec![], ret: DepType::new("wff") } },
//! ];
//! let res = check_all(items, Policy::Abort);
//! assert!(res.is_ok());
//! assert!(res.env.term("tru").is_ok());
//! ```

// rust lints we want
#![warn(bare_trait_objects, elided_lifetimes_in_paths,
  missing_copy_implementations, missing_debug_implementations, future_incompatible,
  rust_2018_idioms, trivial_numeric_casts, variant_size_differences, unreachable_pub,
  unused, missing_docs)]
// all the clippy
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
// all the clippy::restriction lints we want
#![warn(clippy::float_arithmetic,
  clippy::get_unwrap, clippy::integer_division,
  clippy::rc_buffer, clippy::rest_pat_in_fully_bound_structs,
  clippy::string_add, clippy::unwrap_used)]
// all the clippy lints we don't want
#![allow(clippy::comparison_chain,
  clippy::default_trait_access, clippy::enum_glob_use,
  clippy::missing_const_for_fn,
  clippy::missing_errors_doc, clippy::missing_panics_doc, clippy::module_name_repetitions,
  clippy::multiple_crate_versions, clippy::option_if_let_else, clippy::redundant_pub_crate,
  clippy::semicolon_if_nothing_returned, clippy::shadow_unrelated,
  clippy::use_self)]

pub mod environment;
pub mod error;
pub mod check;
pub mod compiler;
pub mod inout;

pub use mm0_util::{ArcString, SortData};
pub use environment::*;
pub use check::{Local, LocalCtx};
pub use error::{Namespace, SpecError};

/// The type of names: sorts, declarations, and local variables.
pub type Ident = ArcString;
