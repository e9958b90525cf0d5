use std::collections::BTreeSet;

use log::debug;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::{Monomial, PolyError, Polynomial, Term, TermOrder};
use crate::syntax::{BinaryOperator, Expr};

impl Polynomial {
  /// Build a polynomial in `Lex` order from an expression tree.
  pub fn build(expr: &Expr) -> Result<Polynomial, PolyError> {
    Self::build_with_order(expr, TermOrder::Lex)
  }

  /// Build a polynomial from an expression tree.
  ///
  /// An expression that already is a polynomial is returned unchanged, keeping
  /// its own order. Otherwise the variables are the sorted identifiers of the
  /// expression and every additive summand becomes one monomial.
  pub fn build_with_order(
    expr: &Expr,
    order: TermOrder,
  ) -> Result<Polynomial, PolyError> {
    if let Expr::Polynomial(p) = expr {
      return Ok(p.clone());
    }
    let vars = collect_variables(expr);
    let mut monomials = Vec::new();
    split_summands(expr, &vars, &BigRational::one(), &mut monomials)?;
    debug!(
      "built polynomial over {:?} from {} summands",
      vars,
      monomials.len()
    );
    Polynomial::from_monomials(vars, order, monomials)
  }

  /// Read `expr` as a single power product over this polynomial's variables.
  ///
  /// The coefficient is ignored, but it must be non-zero and the expression
  /// must not be a sum.
  pub fn term_from_expr(&self, expr: &Expr) -> Result<Term, PolyError> {
    if let Expr::Polynomial(p) = expr {
      let aligned = p.aligned_to(self.vars())?;
      return match aligned.monomials() {
        [single] => Ok(single.term.clone()),
        _ => Err(PolyError::InvalidTerm),
      };
    }
    let mut monomials = Vec::new();
    split_summands(expr, self.vars(), &BigRational::one(), &mut monomials)?;
    monomials.retain(|m| !m.coefficient.is_zero());
    match monomials.as_slice() {
      [single] => Ok(single.term.clone()),
      _ => Err(PolyError::InvalidTerm),
    }
  }
}

/// Every identifier referenced anywhere in `expr`, sorted by name.
pub fn collect_variables(expr: &Expr) -> Vec<String> {
  let mut vars = BTreeSet::new();
  collect_into(expr, &mut vars);
  vars.into_iter().collect()
}

fn collect_into(expr: &Expr, vars: &mut BTreeSet<String>) {
  match expr {
    Expr::Number(_) | Expr::Null => {}
    Expr::Identifier(name) => {
      vars.insert(name.clone());
    }
    Expr::BinaryOp { left, right, .. } => {
      collect_into(left, vars);
      collect_into(right, vars);
    }
    Expr::Call { args, .. } => {
      for arg in args {
        collect_into(arg, vars);
      }
    }
    Expr::List(items) => {
      for item in items {
        collect_into(item, vars);
      }
    }
    Expr::Assign { value, .. } => collect_into(value, vars),
    Expr::Polynomial(p) => vars.extend(p.vars().iter().cloned()),
  }
}

/// Split on `+` and `-`. A subtracted operand starts with the negated sign,
/// so `a - (b + c)` yields the summands `a`, `-b` and `-c`.
fn split_summands(
  expr: &Expr,
  vars: &[String],
  sign: &BigRational,
  out: &mut Vec<Monomial>,
) -> Result<(), PolyError> {
  match expr {
    Expr::BinaryOp {
      op: BinaryOperator::Plus,
      left,
      right,
    } => {
      split_summands(left, vars, sign, out)?;
      split_summands(right, vars, sign, out)
    }
    Expr::BinaryOp {
      op: BinaryOperator::Minus,
      left,
      right,
    } => {
      split_summands(left, vars, sign, out)?;
      split_summands(right, vars, &-sign, out)
    }
    _ => {
      let mut monomial = Monomial::new(sign.clone(), Term::zero(vars.len()));
      accumulate(expr, vars, &mut monomial)?;
      out.push(monomial);
      Ok(())
    }
  }
}

/// Multiply one summand into `m`.
fn accumulate(
  expr: &Expr,
  vars: &[String],
  m: &mut Monomial,
) -> Result<(), PolyError> {
  match expr {
    Expr::Number(n) => {
      m.coefficient *= n;
      Ok(())
    }
    Expr::BinaryOp {
      op: BinaryOperator::Times,
      left,
      right,
    } => {
      accumulate(left, vars, m)?;
      accumulate(right, vars, m)
    }
    Expr::BinaryOp {
      op: BinaryOperator::Power,
      left,
      right,
    } => match (left.as_ref(), right.as_ref()) {
      (Expr::Identifier(name), Expr::Number(exponent)) => {
        let index = variable_index(vars, name)?;
        *m.term.exponent_mut(index) += exponent;
        Ok(())
      }
      _ => Err(PolyError::InvalidPolynomial),
    },
    Expr::Identifier(name) => {
      let index = variable_index(vars, name)?;
      *m.term.exponent_mut(index) += BigRational::one();
      Ok(())
    }
    Expr::BinaryOp { .. }
    | Expr::List(_)
    | Expr::Call { .. }
    | Expr::Assign { .. }
    | Expr::Polynomial(_)
    | Expr::Null => Err(PolyError::InvalidPolynomial),
  }
}

fn variable_index(vars: &[String], name: &str) -> Result<usize, PolyError> {
  vars
    .iter()
    .position(|v| v == name)
    .ok_or(PolyError::InvalidPolynomial)
}
