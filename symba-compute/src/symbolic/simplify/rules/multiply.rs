//! Simplification rules for multiplication and division of numbers and fractions.

use symba_parser::parser::ast::Expr;
use crate::symbolic::simplify::{
    fraction::{is_integer, make_fraction, reduce_fraction},
    rules::{with_binary, Rule},
    step::Step,
};

/// The rules for `mul` nodes, in order.
pub const MUL_RULES: &[Rule] = &[
    Rule { step: Step::ConstantFold, applies: is_constant_fold, rewrite: constant_fold },
    Rule { step: Step::FractionFold, applies: is_fraction_fold, rewrite: fraction_fold },
    Rule { step: Step::MultiplyZero, applies: is_multiply_zero, rewrite: multiply_zero },
];

/// The rules for `div` nodes, in order.
pub const DIV_RULES: &[Rule] = &[
    Rule { step: Step::DivideFold, applies: is_constant_fold, rewrite: divide_fold },
    Rule { step: Step::DivideByFraction, applies: is_divide_by_fraction, rewrite: divide_by_fraction },
];

/// Matches a binary node whose operands are both numbers.
fn is_constant_fold(expr: &Expr) -> bool {
    with_binary(expr, false, |_, lhs, rhs| lhs.as_number().is_some() && rhs.as_number().is_some())
}

/// `3 * 5 = 15`
fn constant_fold(expr: &Expr) -> Expr {
    with_binary(expr, expr.clone(), |_, lhs, rhs| match (lhs.as_number(), rhs.as_number()) {
        (Some(lhs), Some(rhs)) => Expr::number(lhs * rhs),
        _ => expr.clone(),
    })
}

fn is_fraction_fold(expr: &Expr) -> bool {
    with_binary(expr, false, |_, lhs, rhs| lhs.as_fraction().is_some() && rhs.as_fraction().is_some())
}

/// Multiplies numerators and denominators, collapsing the result to a number if it is an
/// integer. Reduction is left to the `div` rules.
///
/// `2/3 * 3/4 = 6/12`
/// `3/2 * 2/3 = 1`
fn fraction_fold(expr: &Expr) -> Expr {
    with_binary(expr, expr.clone(), |_, lhs, rhs| match (lhs.as_fraction(), rhs.as_fraction()) {
        (Some((num_l, den_l)), Some((num_r, den_r))) => make_fraction(num_l * num_r, den_l * den_r),
        _ => expr.clone(),
    })
}

/// Matches zero times an atom or a product with an atom, in either order.
fn is_multiply_zero(expr: &Expr) -> bool {
    let is_symbolic = |expr: &Expr| expr.as_atom().is_some() || expr.as_product().is_some();
    with_binary(expr, false, |_, lhs, rhs| {
        (lhs.as_number() == Some(0.0) && is_symbolic(rhs))
            || (is_symbolic(lhs) && rhs.as_number() == Some(0.0))
    })
}

/// `0x = 0`
/// `pi * 0 = 0`
fn multiply_zero(_: &Expr) -> Expr {
    Expr::number(0.0)
}

/// Divides two numbers. The result is a number if either operand is not an integer, or if the
/// quotient is an integer or not finite. Otherwise, it is a fraction in lowest terms.
///
/// `8 / 2 = 4`
/// `5.5 / 2 = 2.75`
/// `8 / 10 = 4/5`
fn divide_fold(expr: &Expr) -> Expr {
    with_binary(expr, expr.clone(), |_, lhs, rhs| match (lhs.as_number(), rhs.as_number()) {
        (Some(numerator), Some(denominator)) => {
            let quotient = numerator / denominator;
            if !is_integer(numerator)
                || !is_integer(denominator)
                || is_integer(quotient)
                || !quotient.is_finite()
            {
                Expr::number(quotient)
            } else {
                reduce_fraction(numerator, denominator)
            }
        },
        _ => expr.clone(),
    })
}

/// Returns a number as a fraction over one, or the parts of a canonical fraction.
fn as_rational(expr: &Expr) -> Option<(f64, f64)> {
    expr.as_number().map(|value| (value, 1.0)).or_else(|| expr.as_fraction())
}

fn is_divide_by_fraction(expr: &Expr) -> bool {
    with_binary(expr, false, |_, lhs, rhs| as_rational(lhs).is_some() && rhs.as_fraction().is_some())
}

/// Multiplies by the reciprocal of the divisor. Reduction is left to [`divide_fold`].
///
/// `3 / (1/2) = 6`
/// `(2/3) / (4/5) = 10/12`
fn divide_by_fraction(expr: &Expr) -> Expr {
    with_binary(expr, expr.clone(), |_, lhs, rhs| match (as_rational(lhs), rhs.as_fraction()) {
        (Some((num_l, den_l)), Some((num_r, den_r))) => make_fraction(num_l * den_r, den_l * num_r),
        _ => expr.clone(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use symba_parser::parser::Parser;

    fn parse(source: &str) -> Expr {
        Parser::new(source).try_parse_full::<Expr>().unwrap()
    }

    #[test]
    fn fold_numbers() {
        assert_eq!(constant_fold(&parse("3 * 5")), Expr::number(15.0));
    }

    #[test]
    fn fold_fractions() {
        let product = Expr::binary(
            Expr::fraction(2.0, 3.0),
            symba_parser::parser::token::op::BinOpKind::Mul,
            Expr::fraction(3.0, 4.0),
        );
        assert!(is_fraction_fold(&product));
        assert_eq!(fraction_fold(&product), Expr::fraction(6.0, 12.0));
    }

    #[test]
    fn zero_product() {
        assert!(is_multiply_zero(&parse("0x")));
        assert!(is_multiply_zero(&parse("pi * 0")));
        assert!(!is_multiply_zero(&parse("0 * 5")));
        assert_eq!(multiply_zero(&parse("0x")), Expr::number(0.0));
    }

    #[test]
    fn divide() {
        assert_eq!(divide_fold(&parse("8 / 2")), Expr::number(4.0));
        assert_eq!(divide_fold(&parse("0 / 2")), Expr::number(0.0));
        assert_eq!(divide_fold(&parse("9 / 4")), Expr::fraction(9.0, 4.0));
        assert_eq!(divide_fold(&parse("8 / 10")), Expr::fraction(4.0, 5.0));
        assert_eq!(divide_fold(&parse("5.5 / 2")), Expr::number(2.75));
        assert_eq!(divide_fold(&parse("5 / 0.2")), Expr::number(25.0));
        assert_eq!(divide_fold(&parse("1 / 0")), Expr::number(f64::INFINITY));
    }

    #[test]
    fn divide_by_fractions() {
        let by_half = parse("3 / (1 / 2)");
        assert!(!is_constant_fold(&by_half));
        assert!(is_divide_by_fraction(&by_half));
        assert_eq!(divide_by_fraction(&by_half), Expr::number(6.0));
        assert_eq!(divide_by_fraction(&parse("(2 / 3) / (4 / 5)")), Expr::fraction(10.0, 12.0));

        let by_negative = Expr::binary(
            Expr::number(1.0),
            symba_parser::parser::token::op::BinOpKind::Div,
            Expr::fraction(-2.0, 3.0),
        );
        assert_eq!(divide_by_fraction(&by_negative), Expr::fraction(-3.0, 2.0));
        assert!(!is_divide_by_fraction(&parse("x / (1 / 2)")));
    }
}
