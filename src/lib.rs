use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

pub mod environment;
pub mod evaluator;
pub mod functions;
pub mod polynomial;
pub mod syntax;

pub use environment::Environment;
pub use polynomial::{PolyError, Polynomial, TermOrder};
pub use syntax::Expr;

#[derive(Parser)]
#[grammar = "polycalc.pest"]
pub struct PolyParser;

#[derive(Error, Debug)]
pub enum InterpreterError {
  #[error("syntax error: {0}")]
  ParseError(#[from] Box<pest::error::Error<Rule>>),
  #[error("Empty input")]
  EmptyInput,
  #[error("Evaluation error: {0}")]
  EvaluationError(String),
  #[error(transparent)]
  Polynomial(#[from] PolyError),
  #[error("invalid parameter {index}: {source}")]
  InvalidParameter { index: usize, source: PolyError },
  #[error("invalid vars list")]
  InvalidVarsList,
  #[error("invalid exp list")]
  InvalidExpList,
  #[error("invalid polynomial list")]
  InvalidPolyList,
  #[error("undefined {0:?}")]
  Undefined(String),
  #[error("invalid number of args. expected {expected}, got {got}.")]
  ArgumentCount { expected: usize, got: usize },
  #[error("division by zero")]
  DivisionByZero,
  #[error("Bye.")]
  Quit,
}

impl PolyParser {
  pub fn parse_program(
    input: &str,
  ) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>>
  {
    Self::parse(Rule::Program, input).map_err(Box::new)
  }
}

pub fn parse(
  input: &str,
) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>> {
  PolyParser::parse_program(input)
}

/// Parse one statement into an expression tree without evaluating it.
pub fn parse_expr(input: &str) -> Result<Expr, InterpreterError> {
  let mut pairs = parse(input)?;
  let program = pairs.next().ok_or(InterpreterError::EmptyInput)?;
  for node in program.into_inner() {
    match node.as_rule() {
      Rule::Assignment | Rule::Expression => {
        return syntax::pair_to_expr(node);
      }
      _ => {} // EOI
    }
  }
  Err(InterpreterError::EmptyInput)
}

/// An interactive session. All state lives in the owned [`Environment`].
#[derive(Debug, Default)]
pub struct Session {
  env: Environment,
}

impl Session {
  pub fn new() -> Self {
    Self::default()
  }

  /// A session whose implicit polynomial conversions use `order`.
  pub fn with_order(order: TermOrder) -> Self {
    Session {
      env: Environment::with_order(order),
    }
  }

  pub fn environment(&self) -> &Environment {
    &self.env
  }

  /// Parse and evaluate one statement. `Null` results yield `None`.
  pub fn exec(&mut self, input: &str) -> Result<Option<Expr>, InterpreterError> {
    let expr = parse_expr(input)?;
    match evaluator::evaluate_expr(&mut self.env, &expr)? {
      Expr::Null => Ok(None),
      value => Ok(Some(value)),
    }
  }
}

/// Evaluate one statement in a fresh session and render the result.
pub fn interpret(input: &str) -> Result<String, InterpreterError> {
  let mut session = Session::new();
  Ok(
    session
      .exec(input)?
      .map(|value| value.to_string())
      .unwrap_or_else(|| "Null".to_string()),
  )
}
