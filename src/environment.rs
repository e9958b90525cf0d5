use std::collections::HashMap;

use crate::polynomial::TermOrder;
use crate::syntax::Expr;

/// Identifier bindings of a session, plus the term order used when an
/// expression is implicitly turned into a polynomial.
#[derive(Debug, Clone, Default)]
pub struct Environment {
  bindings: HashMap<String, Expr>,
  order: TermOrder,
}

impl Environment {
  pub fn with_order(order: TermOrder) -> Self {
    Environment {
      bindings: HashMap::new(),
      order,
    }
  }

  pub fn get(&self, name: &str) -> Option<&Expr> {
    self.bindings.get(name)
  }

  pub fn set(&mut self, name: impl Into<String>, value: Expr) {
    self.bindings.insert(name.into(), value);
  }

  pub fn order(&self) -> TermOrder {
    self.order
  }

  /// Forget all bindings. The configured order survives.
  pub fn reset(&mut self) {
    *self = Environment::with_order(self.order);
  }

  pub fn len(&self) -> usize {
    self.bindings.len()
  }

  pub fn is_empty(&self) -> bool {
    self.bindings.is_empty()
  }
}
