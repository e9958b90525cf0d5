//! Multivariate polynomials with exact rational coefficients and exponents.
//!
//! A [`Polynomial`] is kept in canonical form:
//! - every term has one exponent per variable,
//! - monomials are sorted descending by the active [`TermOrder`],
//! - no monomial has a zero coefficient.
//!
//! Monomials with identical power products are *not* merged during
//! construction, so `x + x` stays two monomials. Operations never mutate the
//! receiver except [`Polynomial::set_order`].

mod convert;
mod order;
mod query;
mod reduce;

use std::fmt;
use std::ops::Index;
use std::rc::Rc;

use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use thiserror::Error;

pub use convert::collect_variables;
pub use order::TermOrder;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolyError {
  #[error("invalid polynomial")]
  InvalidPolynomial,
  #[error("invalid term")]
  InvalidTerm,
  #[error("invalid polynomial f (no leading term)")]
  EmptyDivisor,
  #[error("invalid term (not in support)")]
  TermNotFound,
  #[error("invalid reduction {0}")]
  InvalidReduction(String),
  #[error("variable {0:?} is not available in the target polynomial")]
  VariableMismatch(String),
}

/// Exponent vector of a monomial, positional over the owning polynomial's
/// variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term(Vec<BigRational>);

impl Term {
  pub fn new(exponents: Vec<BigRational>) -> Self {
    Term(exponents)
  }

  pub fn zero(n_vars: usize) -> Self {
    Term(vec![BigRational::zero(); n_vars])
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn exponents(&self) -> &[BigRational] {
    &self.0
  }

  /// Sum of all exponents.
  pub fn degree(&self) -> BigRational {
    self.0.iter().fold(BigRational::zero(), |acc, e| acc + e)
  }

  /// A term is a valid power product when no exponent is negative.
  pub fn is_valid(&self) -> bool {
    self.0.iter().all(|e| !e.is_negative())
  }

  pub fn add(&self, other: &Term) -> Term {
    Term(self.0.iter().zip(&other.0).map(|(a, b)| a + b).collect())
  }

  pub fn sub(&self, other: &Term) -> Term {
    Term(self.0.iter().zip(&other.0).map(|(a, b)| a - b).collect())
  }

  fn exponent_mut(&mut self, index: usize) -> &mut BigRational {
    &mut self.0[index]
  }
}

impl Index<usize> for Term {
  type Output = BigRational;

  fn index(&self, index: usize) -> &BigRational {
    &self.0[index]
  }
}

impl From<Vec<BigRational>> for Term {
  fn from(exponents: Vec<BigRational>) -> Self {
    Term(exponents)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monomial {
  pub coefficient: BigRational,
  pub term: Term,
}

impl Monomial {
  pub fn new(coefficient: BigRational, term: Term) -> Self {
    Monomial { coefficient, term }
  }

  /// Coefficients multiply, exponents add.
  pub fn mul(&self, other: &Monomial) -> Monomial {
    Monomial {
      coefficient: &self.coefficient * &other.coefficient,
      term: self.term.add(&other.term),
    }
  }
}

#[derive(Debug, Clone)]
pub struct Polynomial {
  vars: Rc<[String]>,
  order: TermOrder,
  monomials: Vec<Monomial>,
}

impl Polynomial {
  /// Create a polynomial from raw monomials, pruning zero coefficients and
  /// sorting by `order`.
  pub fn from_monomials(
    vars: Vec<String>,
    order: TermOrder,
    monomials: Vec<Monomial>,
  ) -> Result<Self, PolyError> {
    if monomials.iter().any(|m| m.term.len() != vars.len()) {
      return Err(PolyError::InvalidTerm);
    }
    let mut p = Polynomial {
      vars: vars.into(),
      order,
      monomials,
    };
    p.normalize();
    Ok(p)
  }

  /// The zero polynomial over `vars`.
  pub fn zero(vars: Vec<String>, order: TermOrder) -> Self {
    Polynomial {
      vars: vars.into(),
      order,
      monomials: Vec::new(),
    }
  }

  /// New polynomial sharing this one's variables and order. The monomials
  /// are taken as given.
  fn with_monomials(&self, monomials: Vec<Monomial>) -> Self {
    Polynomial {
      vars: Rc::clone(&self.vars),
      order: self.order,
      monomials,
    }
  }

  pub fn vars(&self) -> &[String] {
    &self.vars
  }

  pub fn order(&self) -> TermOrder {
    self.order
  }

  pub fn monomials(&self) -> &[Monomial] {
    &self.monomials
  }

  pub fn len(&self) -> usize {
    self.monomials.len()
  }

  pub fn is_empty(&self) -> bool {
    self.monomials.is_empty()
  }

  pub fn var_index(&self, name: &str) -> Option<usize> {
    self.vars.iter().position(|v| v == name)
  }

  /// Switch the active order and re-sort in place. Only the ordering of the
  /// monomials changes, never their content.
  pub fn set_order(&mut self, order: TermOrder) {
    self.order = order;
    self.order.sort_descending(&mut self.monomials);
  }

  /// Owned variant of [`Polynomial::set_order`].
  pub fn sorted_by(mut self, order: TermOrder) -> Self {
    self.set_order(order);
    self
  }

  /// True when every exponent of every monomial is non-negative.
  pub fn is_valid(&self) -> bool {
    self.monomials.iter().all(|m| m.term.is_valid())
  }

  /// Re-express this polynomial over another variable list. Exponents move
  /// by variable name; a variable with a non-zero exponent that is missing
  /// from `vars` is an error.
  pub fn aligned_to(&self, vars: &[String]) -> Result<Polynomial, PolyError> {
    if *self.vars == *vars {
      return Ok(self.clone());
    }
    let mapping: Vec<Option<usize>> = self
      .vars
      .iter()
      .map(|v| vars.iter().position(|w| w == v))
      .collect();
    let mut monomials = Vec::with_capacity(self.monomials.len());
    for m in &self.monomials {
      let mut term = Term::zero(vars.len());
      for (i, e) in m.term.exponents().iter().enumerate() {
        match mapping[i] {
          Some(j) => *term.exponent_mut(j) = e.clone(),
          None if e.is_zero() => {}
          None => return Err(PolyError::VariableMismatch(self.vars[i].clone())),
        }
      }
      monomials.push(Monomial::new(m.coefficient.clone(), term));
    }
    Ok(Polynomial {
      vars: vars.into(),
      order: self.order,
      monomials,
    })
  }

  /// Drop zero coefficients, then stable-sort descending by the active order.
  fn normalize(&mut self) {
    self.monomials.retain(|m| !m.coefficient.is_zero());
    self.order.sort_descending(&mut self.monomials);
  }
}

/// Positional equality: same variable count, same number of monomials and
/// pairwise identical coefficients and terms. Two polynomials describing the
/// same mathematical object in a different internal order compare unequal.
impl PartialEq for Polynomial {
  fn eq(&self, other: &Self) -> bool {
    if std::ptr::eq(self, other) {
      return true;
    }
    self.vars.len() == other.vars.len()
      && self.monomials.len() == other.monomials.len()
      && self
        .monomials
        .iter()
        .zip(&other.monomials)
        .all(|(a, b)| a.coefficient == b.coefficient && a.term == b.term)
  }
}

impl fmt::Display for Polynomial {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.monomials.is_empty() {
      return f.write_str("0");
    }
    for (i, m) in self.monomials.iter().enumerate() {
      if i > 0 {
        f.write_str(" + ")?;
      }
      write!(f, "{}", m.coefficient)?;
      for (name, e) in self.vars.iter().zip(m.term.exponents()) {
        if e.is_zero() {
          continue;
        }
        write!(f, "*{}", name)?;
        if !e.is_one() {
          write!(f, "^{}", e)?;
        }
      }
    }
    Ok(())
  }
}
