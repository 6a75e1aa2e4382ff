//! The driver: feeds a stream of items through the checker in order.
//!
//! Each item is first inserted (which checks that its name is fresh) and
//! then checked against the environment of all earlier items, so a
//! declaration can refer to earlier declarations but never to itself or to
//! later ones. The environment only advances when both steps succeed.
//!
//! Diagnostics are reported as Rust-style errors using the
//! [`annotate_snippets`] crate.

use std::{fs, io};
use std::path::Path;
use annotate_snippets::{Level, Renderer};
use log::{debug, error, info, warn};
use thiserror::Error;
use crate::{Environment, Ident, Spec};
use crate::check::check_spec;
use crate::error::{Result, SpecError};

/// What to do when an item fails to check.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Policy {
  /// Stop at the first failing item.
  #[default]
  Abort,
  /// Report the failing item, drop it, and continue with the next item.
  KeepGoing,
}

/// A [`SpecError`] together with the item that caused it.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{kind}{}: {error}", .name.as_ref().map_or(String::new(), |x| format!(" {x}")))]
pub struct DeclError {
  /// The position of the item in the input stream.
  pub index: usize,
  /// The keyword of the item (`sort`, `term`, ...).
  pub kind: &'static str,
  /// The name of the item, if it has one.
  pub name: Option<Ident>,
  /// The error.
  #[source]
  pub error: SpecError,
}

impl DeclError {
  /// Render this error as a diagnostic. `origin` names the source of the
  /// item stream, usually a file name.
  #[must_use]
  pub fn render(&self, origin: &str, color: bool) -> String {
    let msg = self.error.to_string();
    let note = match &self.name {
      Some(x) => format!("{origin}: item {}: {} {x}", self.index, self.kind),
      None => format!("{origin}: item {}: {}", self.index, self.kind),
    };
    let snippet = Level::Error.title(&msg).footer(Level::Note.title(&note));
    let renderer = if color { Renderer::styled() } else { Renderer::plain() };
    renderer.render(snippet).to_string()
  }
}

/// The result of checking a stream of items.
#[derive(Debug, Default)]
pub struct CheckResult {
  /// The environment of all accepted items.
  pub env: Environment,
  /// The rejected items. With [`Policy::Abort`] there is at most one.
  pub errors: Vec<DeclError>,
}

impl CheckResult {
  /// Returns true if every item was accepted.
  #[must_use]
  pub fn is_ok(&self) -> bool { self.errors.is_empty() }
}

/// Check `item` against `env` and return the environment extended with it.
/// On failure `env` is still the last good environment.
pub fn elab_spec(env: &Environment, item: Spec) -> Result<Environment> {
  let next = env.insert_spec(item.clone())?;
  check_spec(env, &item)?;
  match &item {
    Spec::Sort { name, data } => debug!("sort {name}: {data}"),
    item => debug!("{} {}", item.kind(), item.name().map_or("", |x| x.as_str())),
  }
  Ok(next)
}

/// Check a stream of items in order.
pub fn check_all(items: impl IntoIterator<Item=Spec>, policy: Policy) -> CheckResult {
  let mut res = CheckResult::default();
  for (index, item) in items.into_iter().enumerate() {
    let (kind, name) = (item.kind(), item.name().cloned());
    match elab_spec(&res.env, item) {
      Ok(env) => res.env = env,
      Err(error) => {
        let e = DeclError { index, kind, name, error };
        match policy {
          Policy::Abort => {
            error!("{e}");
            res.errors.push(e);
            break
          }
          Policy::KeepGoing => {
            warn!("skipping {e}");
            res.errors.push(e);
          }
        }
      }
    }
  }
  info!("accepted {} items, rejected {}", res.env.spec().len(), res.errors.len());
  res
}

/// Read a JSON array of items from a file.
pub fn read_spec(path: &Path) -> io::Result<Vec<Spec>> {
  debug!("reading {}", path.display());
  let file = io::BufReader::new(fs::File::open(path)?);
  Ok(serde_json::from_reader(file)?)
}

/// Read and check the file at `path`.
pub fn elab_for_result(path: &Path, policy: Policy) -> io::Result<CheckResult> {
  Ok(check_all(read_spec(path)?, policy))
}

#[cfg(feature = "cli")]
pub use cli::{Args, DumpArgs};

#[cfg(feature = "cli")]
mod cli {
  use std::io::{self, Write};
  use std::path::PathBuf;
  use crate::inout::{run_output, OutputError};
  use super::{elab_for_result, CheckResult, Policy};

  fn report(input: &std::path::Path, res: &CheckResult) {
    let origin = input.display().to_string();
    for e in &res.errors {
      eprintln!("{}", e.render(&origin, true));
    }
  }

  fn output_err(e: OutputError) -> io::Error {
    match e {
      OutputError::Io(e) => e,
      e => io::Error::other(e),
    }
  }

  /// Check a specification file
  #[derive(clap::Args, Debug, Default)]
  pub struct Args {
    /// What to do when a declaration fails to check
    #[clap(long, value_enum, default_value_t = Policy::Abort)]
    pub policy: Policy,
    /// Print 'output' commands to a file (use '-' to print to stdout)
    #[clap(short, long, value_name = "FILE")]
    pub output: Option<String>,
    /// Sets the input file (a JSON array of items)
    pub input: PathBuf,
  }

  impl Args {
    /// Main entry point for `mm0-spec check` subcommand.
    ///
    /// # Arguments
    ///
    /// `mm0-spec check <in.json> [-o out.txt]`, where:
    ///
    /// - `in.json` is the list of items to check.
    /// - `out.txt` receives the result of the `output string` commands.
    pub fn main(self) -> io::Result<()> {
      let res = elab_for_result(&self.input, self.policy)?;
      report(&self.input, &res);
      if !res.is_ok() { std::process::exit(1) }
      println!("{}: {} items ok", self.input.display(), res.env.spec().len());
      match self.output.as_deref() {
        None => {}
        Some("-") => run_output(&res.env, io::stdout().lock()).map_err(output_err)?,
        Some(out) => {
          let mut w = io::BufWriter::new(std::fs::File::create(out)?);
          run_output(&res.env, &mut w).map_err(output_err)?;
          w.flush()?
        }
      }
      Ok(())
    }
  }

  /// Print the accepted items of a specification file as JSON
  #[derive(clap::Args, Debug, Default)]
  pub struct DumpArgs {
    /// Sets the input file (a JSON array of items)
    pub input: PathBuf,
  }

  impl DumpArgs {
    /// Main entry point for `mm0-spec dump` subcommand. Rejected items are
    /// reported and left out of the dump.
    pub fn main(self) -> io::Result<()> {
      let res = elab_for_result(&self.input, Policy::KeepGoing)?;
      report(&self.input, &res);
      let mut out = io::stdout().lock();
      serde_json::to_writer_pretty(&mut out, res.env.spec())?;
      writeln!(out)
    }
  }
}
