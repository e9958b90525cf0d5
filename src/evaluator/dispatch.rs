use log::debug;

use crate::environment::Environment;
use crate::functions::polynomial_ast as poly;
use crate::syntax::Expr;
use crate::InterpreterError;

pub type Handler = fn(&mut Environment, &[Expr]) -> Result<Expr, InterpreterError>;

/// A named operation callable from the expression language.
pub struct Builtin {
  pub name: &'static str,
  pub arity: usize,
  pub handler: Handler,
}

const fn builtin(name: &'static str, arity: usize, handler: Handler) -> Builtin {
  Builtin {
    name,
    arity,
    handler,
  }
}

pub static BUILTINS: &[Builtin] = &[
  builtin("quit", 0, quit),
  builtin("reset", 0, reset),
  builtin("p", 1, poly::build_ast),
  builtin("multicoeff", 3, poly::multi_coefficient_ast),
  builtin("multicoeff2", 2, poly::multi_coefficient_by_term_ast),
  builtin("support", 2, poly::support_ast),
  builtin("lexorder", 1, poly::lex_order_ast),
  builtin("totalorder", 1, poly::total_order_ast),
  builtin("revlexorder", 1, poly::revlex_order_ast),
  builtin("lpp", 1, poly::leading_power_product_ast),
  builtin("lc", 1, poly::leading_coefficient_ast),
  builtin("lm", 1, poly::leading_monomial_ast),
  builtin("higher", 2, poly::higher_ast),
  builtin("lower", 2, poly::lower_ast),
  builtin("between", 3, poly::between_ast),
  builtin("remainder", 1, poly::remainder_ast),
  builtin("reduceterm", 3, poly::reduce_term_ast),
  builtin("reduce", 2, poly::reduce_ast),
  builtin("reduceany", 2, poly::reduce_any_ast),
];

pub fn lookup(name: &str) -> Option<&'static Builtin> {
  BUILTINS.iter().find(|b| b.name == name)
}

/// Call a registered operation with already evaluated arguments.
pub fn call_builtin(
  env: &mut Environment,
  name: &str,
  args: &[Expr],
) -> Result<Expr, InterpreterError> {
  let builtin =
    lookup(name).ok_or_else(|| InterpreterError::Undefined(name.to_string()))?;
  if args.len() != builtin.arity {
    return Err(InterpreterError::ArgumentCount {
      expected: builtin.arity,
      got: args.len(),
    });
  }
  debug!("dispatching {} with {} arguments", name, args.len());
  (builtin.handler)(env, args)
}

fn quit(_env: &mut Environment, _args: &[Expr]) -> Result<Expr, InterpreterError> {
  Err(InterpreterError::Quit)
}

fn reset(env: &mut Environment, _args: &[Expr]) -> Result<Expr, InterpreterError> {
  env.reset();
  Ok(Expr::Null)
}
