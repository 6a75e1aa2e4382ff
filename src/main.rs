use std::path::PathBuf;
use clap::{Parser, Subcommand};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

#[derive(Parser, Debug)]
#[clap(name = "mm0-spec", version, about = "MM0 specification checker")]
#[clap(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
  /// Enable debug logging
  #[clap(short, long, global = true)]
  debug: bool,
  /// Write the log to FILE instead of the terminal
  #[clap(long, value_name = "FILE", global = true)]
  log: Option<PathBuf>,
  #[clap(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  Check(mm0_spec::compiler::Args),
  Dump(mm0_spec::compiler::DumpArgs),
}

fn log_level(debug: bool) -> LevelFilter {
  if debug { LevelFilter::Trace } else { LevelFilter::Warn }
}

fn main() -> std::io::Result<()> {
  let cli = Cli::parse();
  let level = log_level(cli.debug);
  match &cli.log {
    Some(path) => { let _ = WriteLogger::init(level, Config::default(), std::fs::File::create(path)?); }
    None => { let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto); }
  }
  match cli.command {
    Command::Check(args) => args.main(),
    Command::Dump(args) => args.main(),
  }
}
