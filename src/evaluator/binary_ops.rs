use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::syntax::{BinaryOperator, Expr};
use crate::InterpreterError;

/// Largest power, in bits of the base times the exponent, that is folded.
/// Anything bigger stays symbolic.
const MAX_FOLDED_POWER_BITS: u64 = 1 << 20;

/// Apply `op` to two evaluated operands. Two numbers fold exactly, anything
/// else is kept as a symbolic binary operation.
pub fn fold_binary_op(
  op: BinaryOperator,
  left: Expr,
  right: Expr,
) -> Result<Expr, InterpreterError> {
  let folded = match (&left, &right) {
    (Expr::Number(a), Expr::Number(b)) => fold_numbers(op, a, b)?,
    _ => None,
  };
  Ok(folded.unwrap_or_else(|| Expr::binary(op, left, right)))
}

fn fold_numbers(
  op: BinaryOperator,
  a: &BigRational,
  b: &BigRational,
) -> Result<Option<Expr>, InterpreterError> {
  let value = match op {
    BinaryOperator::Plus => a + b,
    BinaryOperator::Minus => a - b,
    BinaryOperator::Times => a * b,
    BinaryOperator::Divide => {
      if b.is_zero() {
        return Err(InterpreterError::DivisionByZero);
      }
      a / b
    }
    BinaryOperator::Power => {
      // Only integral exponents stay rational.
      let exponent = match b.is_integer().then(|| b.to_integer().to_i32()) {
        Some(Some(e)) => e,
        _ => return Ok(None),
      };
      if a.is_zero() && b.is_negative() {
        return Err(InterpreterError::DivisionByZero);
      }
      let base_bits = a.numer().bits().max(a.denom().bits());
      let result_bits =
        base_bits.saturating_mul(u64::from(exponent.unsigned_abs()));
      if result_bits > MAX_FOLDED_POWER_BITS {
        return Ok(None);
      }
      a.pow(exponent)
    }
  };
  Ok(Some(Expr::Number(value)))
}
