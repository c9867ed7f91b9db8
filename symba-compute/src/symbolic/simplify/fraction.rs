//! Tools to help manipulate fractions.
//!
//! A fraction is a division of two numeric literals, such as `9 / 4`. Fractions are produced in
//! one of two forms: as a single number when the quotient is an integer, and otherwise as a
//! division whose denominator is positive.

use symba_parser::parser::ast::Expr;

/// Returns true if the value is a finite integer.
pub(crate) fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Returns the greatest common divisor of two integers. The result is always non-negative.
///
/// Returns `1` if either value is not a finite integer.
pub(crate) fn gcd(a: f64, b: f64) -> f64 {
    if !is_integer(a) || !is_integer(b) {
        return 1.0;
    }

    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0.0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Returns the least common multiple of two integers. The result is always non-negative.
pub(crate) fn lcm(a: f64, b: f64) -> f64 {
    let divisor = gcd(a, b);
    if divisor == 0.0 {
        0.0
    } else {
        (a * b).abs() / divisor
    }
}

/// Creates a fraction from the given numerator and denominator. If the quotient is an integer,
/// it is returned as a single number instead.
///
/// The fraction is not reduced.
pub(crate) fn make_fraction(numerator: f64, denominator: f64) -> Expr {
    let quotient = numerator / denominator;
    if is_integer(quotient) {
        Expr::number(quotient)
    } else if denominator < 0.0 {
        Expr::fraction(-numerator, -denominator)
    } else {
        Expr::fraction(numerator, denominator)
    }
}

/// Creates a fraction in lowest terms from the given numerator and denominator.
pub(crate) fn reduce_fraction(numerator: f64, denominator: f64) -> Expr {
    let divisor = gcd(numerator, denominator);
    if divisor == 0.0 {
        return make_fraction(numerator, denominator);
    }
    make_fraction(numerator / divisor, denominator / divisor)
}
