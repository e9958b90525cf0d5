//! Leading-term queries, sorted range queries and coefficient extraction.
//!
//! The range queries binary-search the monomial list and therefore require
//! the polynomial to be sorted by its own order, which every constructor and
//! [`Polynomial::set_order`] guarantee.

use num_rational::BigRational;
use num_traits::{One, Zero};

use super::{Monomial, Polynomial, Term};

impl Polynomial {
  /// Leading term with coefficient 1, or the zero polynomial.
  pub fn leading_power_product(&self) -> Polynomial {
    let monomials = self
      .monomials
      .first()
      .map(|m| vec![Monomial::new(BigRational::one(), m.term.clone())])
      .unwrap_or_default();
    self.with_monomials(monomials)
  }

  /// Coefficient of the leading monomial, or 0.
  pub fn leading_coefficient(&self) -> BigRational {
    self
      .monomials
      .first()
      .map(|m| m.coefficient.clone())
      .unwrap_or_else(BigRational::zero)
  }

  pub fn leading_monomial(&self) -> Polynomial {
    self.with_monomials(self.monomials.iter().take(1).cloned().collect())
  }

  /// Leading term, if any.
  pub fn leading_term(&self) -> Option<&Term> {
    self.monomials.first().map(|m| &m.term)
  }

  /// All monomials strictly above `t`.
  pub fn higher(&self, t: &Term) -> Polynomial {
    let n = self.partition_above(t);
    self.with_monomials(self.monomials[..n].to_vec())
  }

  /// All monomials strictly below `t`.
  pub fn lower(&self, t: &Term) -> Polynomial {
    let n = self.partition_not_below(t);
    self.with_monomials(self.monomials[n..].to_vec())
  }

  /// Monomials strictly below `upper` and strictly above `lower_bound`.
  pub fn between(&self, lower_bound: &Term, upper: &Term) -> Polynomial {
    self.lower(upper).higher(lower_bound)
  }

  /// Everything but the leading monomial.
  pub fn remainder(&self) -> Polynomial {
    self.with_monomials(self.monomials.iter().skip(1).cloned().collect())
  }

  /// Number of leading monomials whose term is above `t`.
  fn partition_above(&self, t: &Term) -> usize {
    self
      .monomials
      .partition_point(|m| self.order.less(t, &m.term))
  }

  /// Number of leading monomials whose term is not below `t`.
  fn partition_not_below(&self, t: &Term) -> usize {
    self
      .monomials
      .partition_point(|m| !self.order.less(&m.term, t))
  }

  /// Index of the first monomial whose term equals `t`.
  pub(crate) fn find_term(&self, t: &Term) -> Option<usize> {
    let i = self.partition_above(t);
    match self.monomials.get(i) {
      Some(m) if m.term == *t => Some(i),
      _ => None,
    }
  }

  /// Coefficient of `vars[0]^exponents[0] * vars[1]^exponents[1] * ...`,
  /// still written as a polynomial in the remaining variables.
  ///
  /// A monomial is kept when every requested variable has exactly the given
  /// exponent; the requested exponents are then zeroed. A requested variable
  /// that this polynomial does not have matches nothing. `vars` and
  /// `exponents` are expected to have the same length.
  pub fn multi_coefficient(
    &self,
    vars: &[String],
    exponents: &[BigRational],
  ) -> Polynomial {
    debug_assert_eq!(vars.len(), exponents.len());
    let indices: Vec<Option<usize>> =
      vars.iter().map(|v| self.var_index(v)).collect();
    let mut monomials = Vec::new();
    for m in &self.monomials {
      let matches = indices.iter().zip(exponents).all(|(index, e)| {
        index.is_some_and(|i| m.term[i] == *e)
      });
      if !matches {
        continue;
      }
      let mut term = m.term.clone();
      for i in indices.iter().flatten() {
        *term.exponent_mut(*i) = BigRational::zero();
      }
      monomials.push(Monomial::new(m.coefficient.clone(), term));
    }
    let mut p = self.with_monomials(monomials);
    p.normalize();
    p
  }

  /// Exponents of every monomial restricted to `vars`, in monomial order.
  /// Variables this polynomial does not have report 0.
  pub fn support(&self, vars: &[String]) -> Vec<Vec<BigRational>> {
    let indices: Vec<Option<usize>> =
      vars.iter().map(|v| self.var_index(v)).collect();
    self
      .monomials
      .iter()
      .map(|m| {
        indices
          .iter()
          .map(|index| match index {
            Some(i) => m.term[*i].clone(),
            None => BigRational::zero(),
          })
          .collect()
      })
      .collect()
  }
}
