use super::*;

mod construction {
  use super::*;

  #[test]
  fn equal_terms_are_not_merged() {
    assert_eq!(interpret("p(x + x)").unwrap(), "1*x + 1*x");
  }

  #[test]
  fn zero_monomials_are_dropped() {
    assert_eq!(interpret("p(0*x + 3)").unwrap(), "3");
    assert_eq!(interpret("p(0)").unwrap(), "0");
  }

  #[test]
  fn numeric_factors_multiply() {
    assert_eq!(interpret("p(2*x*3*x)").unwrap(), "6*x^2");
  }

  #[test]
  fn subtraction_negates_every_summand() {
    assert_eq!(interpret("p(x - (y + 2))").unwrap(), "1*x + -1*y + -2");
  }

  #[test]
  fn variables_are_sorted_by_name() {
    assert_eq!(interpret("p(b + a)").unwrap(), "1*a + 1*b");
  }

  #[test]
  fn polynomial_arguments_pass_through() {
    let mut s = Session::new();
    run(&mut s, "f = p(y + x^2)");
    assert_eq!(run(&mut s, "p(f)"), "1*x^2 + 1*y");
  }
}

mod coefficients {
  use super::*;

  #[test]
  fn multicoeff_over_a_subset() {
    assert_eq!(
      interpret("multicoeff(3*x^2*y + x^2 + x, [x], [2])").unwrap(),
      "3*y + 1"
    );
  }

  #[test]
  fn multicoeff_with_unknown_variable_matches_nothing() {
    assert_eq!(interpret("multicoeff(x + 1, [z], [0])").unwrap(), "0");
  }

  #[test]
  fn multicoeff2_reads_a_monomial() {
    assert_eq!(
      interpret("multicoeff2(5*x^2*y + 2*x*y, 7*x)").unwrap(),
      "2*y"
    );
  }

  #[test]
  fn support_reports_zero_for_unknown_variables() {
    assert_eq!(interpret("support(x^2 + 1, [x, z])").unwrap(), "[[2 0] [0 0]]");
  }
}

mod orders {
  use super::*;

  #[test]
  fn lex_total_and_revlex() {
    let mut s = Session::new();
    run(&mut s, "f = p(x^2 + x*y^2 + y^3)");
    assert_eq!(run(&mut s, "lexorder(f)"), "1*x^2 + 1*x*y^2 + 1*y^3");
    assert_eq!(run(&mut s, "totalorder(f)"), "1*x*y^2 + 1*y^3 + 1*x^2");
    assert_eq!(run(&mut s, "revlexorder(f)"), "1*y^3 + 1*x*y^2 + 1*x^2");
  }

  #[test]
  fn reordering_is_idempotent() {
    let mut s = Session::new();
    run(&mut s, "f = totalorder(p(x^2 + y^3 + x*y))");
    assert_eq!(run(&mut s, "totalorder(f)"), run(&mut s, "f"));
  }
}

mod leading_terms {
  use super::*;

  #[test]
  fn leading_queries() {
    let mut s = Session::new();
    run(&mut s, "f = p(3*x*y + 1/2*x^3)");
    assert_eq!(run(&mut s, "lpp(f)"), "1*x^3");
    assert_eq!(run(&mut s, "lc(f)"), "1/2");
    assert_eq!(run(&mut s, "lm(f)"), "1/2*x^3");
    assert_eq!(run(&mut s, "remainder(f)"), "3*x*y");
  }

  #[test]
  fn zero_polynomial() {
    assert_eq!(interpret("lpp(0)").unwrap(), "0");
    assert_eq!(interpret("lc(0)").unwrap(), "0");
    assert_eq!(interpret("lm(0)").unwrap(), "0");
    assert_eq!(interpret("remainder(5)").unwrap(), "0");
  }
}

mod ranges {
  use super::*;

  fn session() -> Session {
    let mut s = Session::new();
    run(&mut s, "f1 = p(2*x^2*y + 3*x + 4*y)");
    s
  }

  #[test]
  fn higher_and_lower_at_the_ends() {
    let mut s = session();
    assert_eq!(run(&mut s, "higher(f1, x^2*y)"), "0");
    assert_eq!(run(&mut s, "lower(f1, y)"), "0");
    assert_eq!(run(&mut s, "lower(f1, x^2*y)"), "3*x + 4*y");
  }

  #[test]
  fn bound_need_not_be_in_the_support() {
    let mut s = session();
    assert_eq!(run(&mut s, "higher(f1, x^2)"), "2*x^2*y");
    assert_eq!(run(&mut s, "lower(f1, x^2)"), "3*x + 4*y");
  }

  #[test]
  fn coefficient_of_the_bound_is_ignored() {
    let mut s = session();
    assert_eq!(run(&mut s, "higher(f1, 9*y)"), "2*x^2*y + 3*x");
  }

  #[test]
  fn between_is_exclusive() {
    let mut s = session();
    assert_eq!(run(&mut s, "between(f1, y, x^2*y)"), "3*x");
    assert_eq!(run(&mut s, "between(f1, x, x^2*y)"), "0");
  }

  #[test]
  fn between_with_swapped_bounds_is_empty() {
    let mut s = session();
    assert_eq!(run(&mut s, "between(f1, x^2*y, y)"), "0");
  }
}
