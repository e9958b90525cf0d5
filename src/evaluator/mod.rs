use crate::environment::Environment;
use crate::syntax::Expr;
use crate::InterpreterError;

pub mod binary_ops;
pub mod dispatch;
pub mod type_helpers;

/// Evaluate an expression against `env`.
///
/// Unbound identifiers stay symbolic and calls go through the operation
/// registry.
pub fn evaluate_expr(
  env: &mut Environment,
  expr: &Expr,
) -> Result<Expr, InterpreterError> {
  match expr {
    Expr::Number(_) | Expr::Polynomial(_) | Expr::Null => Ok(expr.clone()),
    Expr::Identifier(name) => {
      Ok(env.get(name).cloned().unwrap_or_else(|| expr.clone()))
    }
    Expr::BinaryOp { op, left, right } => {
      let left = evaluate_expr(env, left)?;
      let right = evaluate_expr(env, right)?;
      binary_ops::fold_binary_op(*op, left, right)
    }
    Expr::List(items) => Ok(Expr::List(evaluate_all(env, items)?)),
    Expr::Call { name, args } => {
      let args = evaluate_all(env, args)?;
      dispatch::call_builtin(env, name, &args)
    }
    Expr::Assign { name, value } => {
      let value = evaluate_expr(env, value)?;
      env.set(name.clone(), value.clone());
      Ok(Expr::Assign {
        name: name.clone(),
        value: Box::new(value),
      })
    }
  }
}

fn evaluate_all(
  env: &mut Environment,
  exprs: &[Expr],
) -> Result<Vec<Expr>, InterpreterError> {
  exprs.iter().map(|e| evaluate_expr(env, e)).collect()
}
