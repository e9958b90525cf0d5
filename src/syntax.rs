use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;
use pest::iterators::Pair;

use crate::polynomial::Polynomial;
use crate::{InterpreterError, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
  Plus,
  Minus,
  Times,
  Divide,
  Power,
}

impl BinaryOperator {
  pub fn symbol(self) -> &'static str {
    match self {
      BinaryOperator::Plus => "+",
      BinaryOperator::Minus => "-",
      BinaryOperator::Times => "*",
      BinaryOperator::Divide => "/",
      BinaryOperator::Power => "^",
    }
  }
}

/// Expression tree produced by the parser and consumed by the evaluator.
///
/// `Polynomial` and `Null` never come out of the parser; they are values
/// produced during evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
  Number(BigRational),
  Identifier(String),
  BinaryOp {
    op: BinaryOperator,
    left: Box<Expr>,
    right: Box<Expr>,
  },
  List(Vec<Expr>),
  Call {
    name: String,
    args: Vec<Expr>,
  },
  Assign {
    name: String,
    value: Box<Expr>,
  },
  Polynomial(Polynomial),
  Null,
}

impl Expr {
  pub fn integer(n: i64) -> Expr {
    Expr::Number(BigRational::from_integer(BigInt::from(n)))
  }

  pub fn binary(op: BinaryOperator, left: Expr, right: Expr) -> Expr {
    Expr::BinaryOp {
      op,
      left: Box::new(left),
      right: Box::new(right),
    }
  }

  pub fn as_number(&self) -> Option<&BigRational> {
    match self {
      Expr::Number(n) => Some(n),
      _ => None,
    }
  }

  pub fn as_identifier(&self) -> Option<&str> {
    match self {
      Expr::Identifier(name) => Some(name),
      _ => None,
    }
  }
}

impl From<Polynomial> for Expr {
  fn from(p: Polynomial) -> Self {
    Expr::Polynomial(p)
  }
}

impl From<BigRational> for Expr {
  fn from(n: BigRational) -> Self {
    Expr::Number(n)
  }
}

impl fmt::Display for Expr {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Expr::Number(n) => write!(f, "{}", n),
      Expr::Identifier(name) => f.write_str(name),
      Expr::BinaryOp { op, left, right } => {
        write!(f, "({} {} {})", left, op.symbol(), right)
      }
      Expr::List(items) => {
        f.write_str("[")?;
        for (i, item) in items.iter().enumerate() {
          if i > 0 {
            f.write_str(" ")?;
          }
          write!(f, "{}", item)?;
        }
        f.write_str("]")
      }
      Expr::Call { name, args } => {
        let rendered: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        write!(f, "{}({})", name, rendered.join(", "))
      }
      Expr::Assign { name, value } => write!(f, "{} = {}", name, value),
      Expr::Polynomial(p) => write!(f, "{}", p),
      Expr::Null => f.write_str("Null"),
    }
  }
}

/// Parse a decimal literal such as `12`, `.2` or `3.75` into an exact rational.
pub fn parse_decimal(text: &str) -> Option<BigRational> {
  let (int_part, frac_part) = match text.split_once('.') {
    Some((i, f)) => (i, f),
    None => (text, ""),
  };
  if int_part.is_empty() && frac_part.is_empty() {
    return None;
  }
  let digits = format!("{}{}", int_part, frac_part);
  let numer: BigInt = digits.parse().ok()?;
  let mut denom = BigInt::one();
  for _ in 0..frac_part.len() {
    denom *= 10;
  }
  Some(BigRational::new(numer, denom))
}

/// Convert a parsed pest pair into an expression tree.
pub fn pair_to_expr(pair: Pair<Rule>) -> Result<Expr, InterpreterError> {
  match pair.as_rule() {
    Rule::Assignment => {
      let mut inner = pair.into_inner();
      let name = next_pair(&mut inner)?.as_str().to_string();
      let value = pair_to_expr(next_pair(&mut inner)?)?;
      Ok(Expr::Assign {
        name,
        value: Box::new(value),
      })
    }
    Rule::Expression => {
      let mut inner = pair.into_inner();
      let mut acc = pair_to_expr(next_pair(&mut inner)?)?;
      while let Some(op) = inner.next() {
        let op = match op.as_str() {
          "-" => BinaryOperator::Minus,
          _ => BinaryOperator::Plus,
        };
        let rhs = pair_to_expr(next_pair(&mut inner)?)?;
        acc = Expr::binary(op, acc, rhs);
      }
      Ok(acc)
    }
    Rule::Product => {
      let mut inner = pair.into_inner();
      let mut acc = pair_to_expr(next_pair(&mut inner)?)?;
      while let Some(op) = inner.next() {
        let op = match op.as_str() {
          "/" => BinaryOperator::Divide,
          _ => BinaryOperator::Times,
        };
        let rhs = pair_to_expr(next_pair(&mut inner)?)?;
        acc = Expr::binary(op, acc, rhs);
      }
      Ok(acc)
    }
    Rule::Unary => {
      let mut negations = 0;
      let mut operand = None;
      for child in pair.into_inner() {
        match child.as_rule() {
          Rule::Negation => negations += 1,
          _ => operand = Some(pair_to_expr(child)?),
        }
      }
      let mut expr = operand.ok_or_else(|| malformed("unary operand"))?;
      for _ in 0..negations {
        expr = Expr::binary(BinaryOperator::Times, Expr::integer(-1), expr);
      }
      Ok(expr)
    }
    Rule::Power => {
      let mut inner = pair.into_inner();
      let base = pair_to_expr(next_pair(&mut inner)?)?;
      match inner.next() {
        Some(exponent) => Ok(Expr::binary(
          BinaryOperator::Power,
          base,
          pair_to_expr(exponent)?,
        )),
        None => Ok(base),
      }
    }
    Rule::Call => {
      let mut inner = pair.into_inner();
      let name = next_pair(&mut inner)?.as_str().to_string();
      let args = inner.map(pair_to_expr).collect::<Result<Vec<_>, _>>()?;
      Ok(Expr::Call { name, args })
    }
    Rule::List => {
      let items = pair
        .into_inner()
        .map(pair_to_expr)
        .collect::<Result<Vec<_>, _>>()?;
      Ok(Expr::List(items))
    }
    Rule::Number => parse_decimal(pair.as_str())
      .map(Expr::Number)
      .ok_or_else(|| malformed("number")),
    Rule::Identifier => Ok(Expr::Identifier(pair.as_str().to_string())),
    rule => Err(InterpreterError::EvaluationError(format!(
      "Unexpected rule {:?}",
      rule
    ))),
  }
}

fn next_pair<'i>(
  pairs: &mut pest::iterators::Pairs<'i, Rule>,
) -> Result<Pair<'i, Rule>, InterpreterError> {
  pairs.next().ok_or_else(|| malformed("operand"))
}

fn malformed(what: &str) -> InterpreterError {
  InterpreterError::EvaluationError(format!("Malformed {}", what))
}
