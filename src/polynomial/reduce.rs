use log::{debug, info};

use super::{Monomial, PolyError, Polynomial, Term};

impl Polynomial {
  /// Eliminate the monomial at `t` using the leading monomial of `divisor`.
  ///
  /// With `c*t` the monomial of `self` at `t` and `fc*ft` the leading
  /// monomial of `divisor`, this returns `self + u*divisor` where
  /// `u = -(c/fc) * t/ft`. Monomials of equal terms are merged while adding,
  /// so the monomial at `t` cancels. Only the first monomial at `t` is
  /// eliminated; further monomials with the same term survive.
  pub fn reduce_term(
    &self,
    divisor: &Polynomial,
    t: &Term,
  ) -> Result<Polynomial, PolyError> {
    if t.len() != self.vars.len() {
      return Err(PolyError::InvalidTerm);
    }
    let divisor = divisor.aligned_to(&self.vars)?;
    let lead = divisor.monomials.first().ok_or(PolyError::EmptyDivisor)?;
    let index = self.find_term(t).ok_or(PolyError::TermNotFound)?;
    let target = &self.monomials[index];

    let multiplier = Monomial::new(
      -(&target.coefficient / &lead.coefficient),
      target.term.sub(&lead.term),
    );
    let mut merged: Vec<Monomial> =
      divisor.monomials.iter().map(|m| multiplier.mul(m)).collect();
    for m in &self.monomials {
      match merged.iter_mut().find(|h| h.term == m.term) {
        Some(h) => h.coefficient += &m.coefficient,
        None => merged.push(m.clone()),
      }
    }

    let mut h = self.with_monomials(merged);
    if !h.is_valid() {
      return Err(PolyError::InvalidReduction(h.to_string()));
    }
    h.normalize();
    Ok(h)
  }

  /// First successful [`Polynomial::reduce_term`] over the terms of `self`,
  /// tried from the highest; `self` unchanged when none applies.
  pub fn reduce(&self, divisor: &Polynomial) -> Polynomial {
    for m in &self.monomials {
      match self.reduce_term(divisor, &m.term) {
        Ok(h) => return h,
        Err(e) => debug!("reduction of {} by {} failed: {}", self, divisor, e),
      }
    }
    self.clone()
  }

  /// Reduce by the first divisor that changes `self`.
  pub fn reduce_any(&self, divisors: &[Polynomial]) -> Polynomial {
    for divisor in divisors {
      let h = self.reduce(divisor);
      if h != *self {
        info!("reduced by {} to {}", divisor, h);
        return h;
      }
    }
    self.clone()
  }
}
