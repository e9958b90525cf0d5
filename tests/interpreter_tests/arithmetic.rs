use super::*;

mod folding {
  use super::*;

  #[test]
  fn exact_rationals() {
    assert_eq!(interpret("1/3 + 1/6").unwrap(), "1/2");
    assert_eq!(interpret("2^10").unwrap(), "1024");
    assert_eq!(interpret("2^-2").unwrap(), "1/4");
    assert_eq!(interpret("-3 * -3").unwrap(), "9");
    assert_eq!(interpret("1.25 * 4").unwrap(), "5");
  }

  #[test]
  fn unary_minus_binds_looser_than_power() {
    assert_eq!(interpret("-2^2").unwrap(), "-4");
    assert_eq!(interpret("(-2)^2").unwrap(), "4");
  }

  #[test]
  fn power_is_right_associative() {
    assert_eq!(interpret("2^3^2").unwrap(), "512");
  }

  #[test]
  fn symbolic_operands_are_kept() {
    assert_eq!(interpret("x - 2*3").unwrap(), "(x - 6)");
    assert_eq!(interpret("x / 2").unwrap(), "(x / 2)");
    assert_eq!(interpret("-x").unwrap(), "(-1 * x)");
  }

  #[test]
  fn huge_powers_are_not_expanded() {
    assert_eq!(interpret("2^2000000000").unwrap(), "(2 ^ 2000000000)");
    assert_eq!(interpret("2^-2000000000").unwrap(), "(2 ^ -2000000000)");
  }

  #[test]
  fn non_integral_power_stays_symbolic() {
    assert_eq!(interpret("4^.5").unwrap(), "(4 ^ 1/2)");
  }
}

mod polynomial_arithmetic_inputs {
  use super::*;

  #[test]
  fn folded_constants_feed_coefficients() {
    assert_eq!(interpret("p(8/4*x + 1/2)").unwrap(), "2*x + 1/2");
  }

  #[test]
  fn folded_exponents_are_rational() {
    assert_eq!(interpret("p(x^(1/2) * y)").unwrap(), "1*x^1/2*y");
  }
}
