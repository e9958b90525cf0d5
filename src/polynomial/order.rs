use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_rational::BigRational;

use super::{Monomial, Term};

/// Strict "less than" over terms of the same length.
///
/// The same value drives both sorting and the binary searches of the range
/// queries, so the two always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TermOrder {
  /// The first differing exponent, in variable order, decides.
  #[default]
  Lex,
  /// Like `Lex`, but scanning from the last variable backwards.
  RevLex,
  /// Total degree first, `Lex` as tie-break.
  Total,
}

impl TermOrder {
  /// Terms of different lengths are incomparable and never less than each
  /// other.
  pub fn less(self, a: &Term, b: &Term) -> bool {
    if a.len() != b.len() {
      return false;
    }
    match self {
      TermOrder::Lex => lex_less(a.exponents().iter().zip(b.exponents())),
      TermOrder::RevLex => {
        lex_less(a.exponents().iter().rev().zip(b.exponents().iter().rev()))
      }
      TermOrder::Total => match a.degree().cmp(&b.degree()) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => TermOrder::Lex.less(a, b),
      },
    }
  }

  /// Ordering derived from [`TermOrder::less`]; incomparable terms are equal.
  pub fn compare(self, a: &Term, b: &Term) -> Ordering {
    if self.less(a, b) {
      Ordering::Less
    } else if self.less(b, a) {
      Ordering::Greater
    } else {
      Ordering::Equal
    }
  }

  /// Stable sort, highest term first.
  pub fn sort_descending(self, monomials: &mut [Monomial]) {
    monomials.sort_by(|a, b| self.compare(&b.term, &a.term));
  }

  pub fn name(self) -> &'static str {
    match self {
      TermOrder::Lex => "lex",
      TermOrder::RevLex => "revlex",
      TermOrder::Total => "total",
    }
  }
}

fn lex_less<'a>(
  mut pairs: impl Iterator<Item = (&'a BigRational, &'a BigRational)>,
) -> bool {
  pairs
    .find_map(|(x, y)| match x.cmp(y) {
      Ordering::Equal => None,
      other => Some(other == Ordering::Less),
    })
    .unwrap_or(false)
}

impl fmt::Display for TermOrder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for TermOrder {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "lex" => Ok(TermOrder::Lex),
      "revlex" => Ok(TermOrder::RevLex),
      "total" => Ok(TermOrder::Total),
      other => Err(format!("unknown term order {:?}", other)),
    }
  }
}
