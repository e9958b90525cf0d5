use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use polycalc::{InterpreterError, Session, TermOrder};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Term order used when expressions are turned into polynomials
  #[arg(long, global = true, default_value = "lex")]
  order: TermOrder,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Evaluate a single statement
  Eval {
    /// The statement to evaluate, e.g. "reduce(p(x^2 + y), x + 1)"
    expression: String,
  },
  /// Start an interactive session (default)
  Repl,
}

fn main() -> anyhow::Result<()> {
  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or("info"),
  )
  .init();

  let cli = Cli::parse();

  match cli.command.unwrap_or(Commands::Repl) {
    Commands::Eval { expression } => {
      let mut session = Session::with_order(cli.order);
      match session.exec(&expression) {
        Ok(Some(result)) => println!("{result}"),
        Ok(None) => {}
        Err(e) => eprintln!("Error: {}", e),
      }
      Ok(())
    }
    Commands::Repl => run_repl(cli.order),
  }
}

fn run_repl(order: TermOrder) -> anyhow::Result<()> {
  println!("polycalc {}", env!("CARGO_PKG_VERSION"));
  println!("Type 'quit()' to quit.");
  println!();

  let mut session = Session::with_order(order);
  let stdin = io::stdin();
  let mut lines = stdin.lock().lines();
  loop {
    print!("> ");
    io::stdout().flush()?;
    let line = match lines.next() {
      Some(line) => line?,
      None => break,
    };
    if line.trim().is_empty() {
      continue;
    }
    match session.exec(&line) {
      Ok(Some(result)) => println!("{result}"),
      Ok(None) => {}
      Err(InterpreterError::Quit) => break,
      Err(e) => println!("error: {}", e),
    }
  }
  println!("Bye.");
  Ok(())
}
