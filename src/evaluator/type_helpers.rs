//! Typed extraction of registry arguments.

use num_rational::BigRational;

use crate::environment::Environment;
use crate::polynomial::{Polynomial, Term};
use crate::syntax::Expr;
use crate::InterpreterError;

/// Build argument `index` (0-based) as a polynomial in the session order.
pub fn polynomial_arg(
  env: &Environment,
  args: &[Expr],
  index: usize,
) -> Result<Polynomial, InterpreterError> {
  Polynomial::build_with_order(&args[index], env.order()).map_err(|source| {
    InterpreterError::InvalidParameter {
      index: index + 1,
      source,
    }
  })
}

/// A list of identifiers, e.g. `[x, y]`.
pub fn vars_arg(expr: &Expr) -> Result<Vec<String>, InterpreterError> {
  match expr {
    Expr::List(items) => items
      .iter()
      .map(|item| {
        item
          .as_identifier()
          .map(str::to_string)
          .ok_or(InterpreterError::InvalidVarsList)
      })
      .collect(),
    _ => Err(InterpreterError::InvalidVarsList),
  }
}

/// A list of numbers, e.g. `[2, 1]`.
pub fn exponents_arg(expr: &Expr) -> Result<Vec<BigRational>, InterpreterError> {
  match expr {
    Expr::List(items) => items
      .iter()
      .map(|item| item.as_number().cloned().ok_or(InterpreterError::InvalidExpList))
      .collect(),
    _ => Err(InterpreterError::InvalidExpList),
  }
}

/// A single power product, read over the variables of `p`.
pub fn term_arg(p: &Polynomial, expr: &Expr) -> Result<Term, InterpreterError> {
  Ok(p.term_from_expr(expr)?)
}

/// A list of expressions, each built as a polynomial.
pub fn polynomial_list_arg(
  env: &Environment,
  args: &[Expr],
  index: usize,
) -> Result<Vec<Polynomial>, InterpreterError> {
  match &args[index] {
    Expr::List(items) => items
      .iter()
      .map(|item| {
        Polynomial::build_with_order(item, env.order()).map_err(|source| {
          InterpreterError::InvalidParameter {
            index: index + 1,
            source,
          }
        })
      })
      .collect(),
    _ => Err(InterpreterError::InvalidPolyList),
  }
}
