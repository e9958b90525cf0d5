use super::*;

/// A complete worked session, checked line by line.
const TRANSCRIPT: &[(&str, &str)] = &[
  ("3", "3"),
  (".2 * 5 + 8 / (3 + 1)", "3"),
  ("identifier", "identifier"),
  ("3*x + 6 * y ^ 2", "((3 * x) + (6 * (y ^ 2)))"),
  ("[1, 2, a, b, c]", "[1 2 a b c]"),
  ("q = 3", "q = 3"),
  ("multicoeff(18*x^2*y + y*z, [x, y, z], [2, 1, 0])", "18"),
  (
    "multicoeff(18*x^2*y + 19*x^2*y*z + y*z, [x, y], [2, 1])",
    "19*z + 18",
  ),
  (
    "multicoeff(18*x^2*y + 19*x^2*y*z + y*z, [x, y, z], [2, 1, 0])",
    "18",
  ),
  ("multicoeff2(18*x^2*y + 19*x^2*y*z + y*z, x^2*y)", "19*z + 18"),
  (
    "f = p(3*x*y^2 + 8*x^2 + 7 + 20*x*y + 3*y^10)",
    "f = 8*x^2 + 3*x*y^2 + 20*x*y + 3*y^10 + 7",
  ),
  ("totalorder(f)", "3*y^10 + 3*x*y^2 + 8*x^2 + 20*x*y + 7"),
  ("lexorder(f)", "8*x^2 + 3*x*y^2 + 20*x*y + 3*y^10 + 7"),
  ("lpp(f)", "1*x^2"),
  ("lc(f)", "8"),
  ("lm(f)", "8*x^2"),
  ("lm(totalorder(f))", "3*y^10"),
  ("support(lexorder(f), [x, y])", "[[2 0] [1 2] [1 1] [0 10] [0 0]]"),
  ("support(f, [y])", "[[0] [2] [1] [10] [0]]"),
  ("f1 = p(2*x^2*y + 3*x + 4*y)", "f1 = 2*x^2*y + 3*x + 4*y"),
  ("lpp(f1)", "1*x^2*y"),
  ("lc(f1)", "2"),
  ("lm(f1)", "2*x^2*y"),
  ("higher(f1, y)", "2*x^2*y + 3*x"),
  ("lower(f1, x*y)", "3*x + 4*y"),
  ("remainder(f1)", "3*x + 4*y"),
  ("g = p(-8*x^2 + -1*x*y + 12*y^2)", "g = -8*x^2 + -1*x*y + 12*y^2"),
  (
    "f5 = 40*x + 36*y^3 + 53*y",
    "f5 = (((40 * x) + (36 * (y ^ 3))) + (53 * y))",
  ),
  ("reduceterm(g, f5, x^2)", "36/5*x*y^3 + 48/5*x*y + 12*y^2"),
  ("reduce(g, f5)", "36/5*x*y^3 + 48/5*x*y + 12*y^2"),
  ("reduceany(g, [f5])", "36/5*x*y^3 + 48/5*x*y + 12*y^2"),
];

#[test]
fn worked_session() {
  let mut session = Session::new();
  for (input, expected) in TRANSCRIPT {
    assert_eq!(run(&mut session, input), *expected, "input: {input}");
  }
}

#[test]
fn bindings_persist_between_statements() {
  let mut session = Session::new();
  run(&mut session, "h = p(x + 2*y)");
  assert!(matches!(
    session.environment().get("h"),
    Some(polycalc::Expr::Polynomial(_))
  ));
  assert_eq!(run(&mut session, "h"), "1*x + 2*y");
  assert_eq!(run(&mut session, "lc(h)"), "1");
}

#[test]
fn reordering_does_not_rebind() {
  let mut session = Session::new();
  run(&mut session, "f = p(x + y^3)");
  assert_eq!(run(&mut session, "totalorder(f)"), "1*y^3 + 1*x");
  assert_eq!(run(&mut session, "f"), "1*x + 1*y^3");
}

#[test]
fn reordered_polynomial_can_be_bound() {
  let mut session = Session::new();
  run(&mut session, "f = totalorder(p(x + y^3))");
  assert_eq!(run(&mut session, "lm(f)"), "1*y^3");
  assert_eq!(run(&mut session, "higher(f, x)"), "1*y^3");
}

#[test]
fn reset_forgets_bindings() {
  let mut session = Session::new();
  run(&mut session, "q = 3");
  assert_eq!(run(&mut session, "reset()"), "Null");
  assert_eq!(run(&mut session, "q"), "q");
}

#[test]
fn quit_ends_the_session() {
  let mut session = Session::new();
  assert!(matches!(
    run_err(&mut session, "quit()"),
    InterpreterError::Quit
  ));
}

#[test]
fn session_order_applies_to_new_polynomials() {
  let mut session = Session::with_order(polycalc::TermOrder::Total);
  assert_eq!(
    run(&mut session, "p(8*x^2 + 3*y^10)"),
    "3*y^10 + 8*x^2"
  );
  run(&mut session, "reset()");
  assert_eq!(run(&mut session, "lm(8*x^2 + 3*y^10)"), "3*y^10");
}

#[test]
fn one_shot_interpret() {
  assert_eq!(interpret("lc(5*x^3 + x)").unwrap(), "5");
  assert_eq!(interpret("reset()").unwrap(), "Null");
}
