//! AST-native polynomial functions.
//!
//! Registry handlers for p, multicoeff, support, the order switches, the
//! leading-term queries, the range queries and the reductions.

use crate::environment::Environment;
use crate::evaluator::type_helpers::{
  exponents_arg, polynomial_arg, polynomial_list_arg, term_arg, vars_arg,
};
use crate::polynomial::TermOrder;
use crate::syntax::Expr;
use crate::InterpreterError;

// ─── construction ───────────────────────────────────────────────────

/// p(expr) - Reify an expression as a canonical polynomial
pub fn build_ast(
  env: &mut Environment,
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  Ok(polynomial_arg(env, args, 0)?.into())
}

// ─── coefficients ───────────────────────────────────────────────────

/// multicoeff(p, [vars], [exps]) - Coefficient of vars^exps in p
pub fn multi_coefficient_ast(
  env: &mut Environment,
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  let p = polynomial_arg(env, args, 0)?;
  let vars = vars_arg(&args[1])?;
  let exponents = exponents_arg(&args[2])?;
  if vars.len() != exponents.len() {
    return Err(InterpreterError::InvalidExpList);
  }
  Ok(p.multi_coefficient(&vars, &exponents).into())
}

/// multicoeff2(p, m) - Like multicoeff, with vars and exps read off the
/// single monomial m
pub fn multi_coefficient_by_term_ast(
  env: &mut Environment,
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  let p = polynomial_arg(env, args, 0)?;
  let m = polynomial_arg(env, args, 1)?;
  let term = match m.monomials() {
    [single] => single.term.clone(),
    _ => return Err(crate::PolyError::InvalidTerm.into()),
  };
  Ok(p.multi_coefficient(m.vars(), term.exponents()).into())
}

/// support(p, [vars]) - Exponents of each monomial restricted to vars
pub fn support_ast(
  env: &mut Environment,
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  let p = polynomial_arg(env, args, 0)?;
  let vars = vars_arg(&args[1])?;
  let rows = p
    .support(&vars)
    .into_iter()
    .map(|row| Expr::List(row.into_iter().map(Expr::Number).collect()))
    .collect();
  Ok(Expr::List(rows))
}

// ─── orders ─────────────────────────────────────────────────────────

fn reorder(
  env: &Environment,
  args: &[Expr],
  order: TermOrder,
) -> Result<Expr, InterpreterError> {
  let mut p = polynomial_arg(env, args, 0)?;
  p.set_order(order);
  Ok(p.into())
}

/// lexorder(p)
pub fn lex_order_ast(
  env: &mut Environment,
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  reorder(env, args, TermOrder::Lex)
}

/// totalorder(p)
pub fn total_order_ast(
  env: &mut Environment,
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  reorder(env, args, TermOrder::Total)
}

/// revlexorder(p)
pub fn revlex_order_ast(
  env: &mut Environment,
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  reorder(env, args, TermOrder::RevLex)
}

// ─── leading terms ──────────────────────────────────────────────────

pub fn leading_power_product_ast(
  env: &mut Environment,
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  Ok(polynomial_arg(env, args, 0)?.leading_power_product().into())
}

pub fn leading_coefficient_ast(
  env: &mut Environment,
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  Ok(Expr::Number(polynomial_arg(env, args, 0)?.leading_coefficient()))
}

pub fn leading_monomial_ast(
  env: &mut Environment,
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  Ok(polynomial_arg(env, args, 0)?.leading_monomial().into())
}

// ─── ranges ─────────────────────────────────────────────────────────

/// higher(p, t) - Monomials of p above the term t
pub fn higher_ast(
  env: &mut Environment,
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  let p = polynomial_arg(env, args, 0)?;
  let t = term_arg(&p, &args[1])?;
  Ok(p.higher(&t).into())
}

/// lower(p, t) - Monomials of p below the term t
pub fn lower_ast(
  env: &mut Environment,
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  let p = polynomial_arg(env, args, 0)?;
  let t = term_arg(&p, &args[1])?;
  Ok(p.lower(&t).into())
}

/// between(p, t1, t2) - Monomials of p above t1 and below t2
pub fn between_ast(
  env: &mut Environment,
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  let p = polynomial_arg(env, args, 0)?;
  let t1 = term_arg(&p, &args[1])?;
  let t2 = term_arg(&p, &args[2])?;
  Ok(p.between(&t1, &t2).into())
}

pub fn remainder_ast(
  env: &mut Environment,
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  Ok(polynomial_arg(env, args, 0)?.remainder().into())
}

// ─── reduction ──────────────────────────────────────────────────────

/// reduceterm(p, f, t) - Eliminate the term t of p with f
pub fn reduce_term_ast(
  env: &mut Environment,
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  let p = polynomial_arg(env, args, 0)?;
  let f = polynomial_arg(env, args, 1)?;
  let t = term_arg(&p, &args[2])?;
  Ok(p.reduce_term(&f, &t)?.into())
}

/// reduce(p, f) - First reduction of p by f that succeeds
pub fn reduce_ast(
  env: &mut Environment,
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  let p = polynomial_arg(env, args, 0)?;
  let f = polynomial_arg(env, args, 1)?;
  Ok(p.reduce(&f).into())
}

/// reduceany(p, [f1, f2, ...]) - Reduce by the first divisor that applies
pub fn reduce_any_ast(
  env: &mut Environment,
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  let p = polynomial_arg(env, args, 0)?;
  let divisors = polynomial_list_arg(env, args, 1)?;
  Ok(p.reduce_any(&divisors).into())
}
