//! Simplification rules for addition and subtraction, including combining like terms.
//!
//! The same group serves both operations; each rule reads the operator to decide the sign of the
//! right-hand operand.

use symba_parser::parser::{ast::Expr, token::op::BinOpKind};
use crate::symbolic::simplify::{
    fraction::{lcm, make_fraction},
    rules::{with_binary, Rule},
    step::Step,
};

/// The rules for `add` and `sub` nodes, in order.
pub const RULES: &[Rule] = &[
    Rule { step: Step::ConstantFold, applies: is_constant_fold, rewrite: constant_fold },
    Rule { step: Step::FractionFold, applies: is_fraction_fold, rewrite: fraction_fold },
    Rule { step: Step::VariableAndConstant, applies: is_variable_and_constant, rewrite: Expr::clone },
    Rule { step: Step::CombineLikeTerms, applies: is_like_terms, rewrite: combine_like_terms },
];

/// Applies `op` to two numbers, where `op` is addition or subtraction.
fn add_or_sub(op: BinOpKind, lhs: f64, rhs: f64) -> f64 {
    if op == BinOpKind::Sub {
        lhs - rhs
    } else {
        lhs + rhs
    }
}

fn is_constant_fold(expr: &Expr) -> bool {
    with_binary(expr, false, |_, lhs, rhs| lhs.as_number().is_some() && rhs.as_number().is_some())
}

/// `3 + 5 = 8`
/// `3 - 5 = -2`
fn constant_fold(expr: &Expr) -> Expr {
    with_binary(expr, expr.clone(), |op, lhs, rhs| match (lhs.as_number(), rhs.as_number()) {
        (Some(lhs), Some(rhs)) => Expr::number(add_or_sub(op, lhs, rhs)),
        _ => expr.clone(),
    })
}

fn is_fraction_fold(expr: &Expr) -> bool {
    with_binary(expr, false, |_, lhs, rhs| lhs.as_fraction().is_some() && rhs.as_fraction().is_some())
}

/// Adds two fractions over their least common denominator, collapsing the result to a number if
/// it is an integer.
///
/// `2/3 + 5/2 = 19/6`
/// `1/2 + 5/2 = 3`
fn fraction_fold(expr: &Expr) -> Expr {
    with_binary(expr, expr.clone(), |op, lhs, rhs| match (lhs.as_fraction(), rhs.as_fraction()) {
        (Some((num_l, den_l)), Some((num_r, den_r))) => {
            let denominator = lcm(den_l, den_r);
            let numerator = add_or_sub(
                op,
                num_l * (denominator / den_l),
                num_r * (denominator / den_r),
            );
            make_fraction(numerator, denominator)
        },
        _ => expr.clone(),
    })
}

/// Matches a number next to a coefficient times an atom, such as `2x + 3` or `3 - 2pi`. The node
/// is already in its simplest form, so the rule leaves it unchanged.
fn is_variable_and_constant(expr: &Expr) -> bool {
    with_binary(expr, false, |_, lhs, rhs| {
        (lhs.as_number().is_some() && rhs.as_product().is_some())
            || (lhs.as_product().is_some() && rhs.as_number().is_some())
    })
}

/// Matches two products sharing the same atom. Both operands must have been tagged.
fn is_like_terms(expr: &Expr) -> bool {
    with_binary(expr, false, |_, lhs, rhs| match (lhs.as_product(), rhs.as_product()) {
        (Some((_, atom_l)), Some((_, atom_r))) => {
            lhs.tags().intersects(rhs.tags()) && atom_l == atom_r
        },
        _ => false,
    })
}

/// Factors the shared atom out of two products. The coefficients are combined by a later pass.
///
/// `2x + 3x = (2 + 3)x`
/// `2e - 2e = (2 - 2)e`
fn combine_like_terms(expr: &Expr) -> Expr {
    with_binary(expr, expr.clone(), |op, lhs, rhs| match (lhs.as_product(), rhs.as_product()) {
        (Some((coefficient_l, atom)), Some((coefficient_r, _))) => Expr::binary(
            Expr::binary(coefficient_l.clone(), op, coefficient_r.clone()),
            BinOpKind::Mul,
            Expr::Literal(atom.clone()),
        ),
        _ => expr.clone(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::symbolic::tag::tag;
    use symba_parser::parser::{ast::Irrational, Parser};

    fn parse(source: &str) -> Expr {
        let mut expr = Parser::new(source).try_parse_full::<Expr>().unwrap();
        tag(&mut expr);
        expr
    }

    #[test]
    fn fold_numbers() {
        assert!(is_constant_fold(&parse("3 + 5")));
        assert_eq!(constant_fold(&parse("3 + 5")), Expr::number(8.0));
        assert_eq!(constant_fold(&parse("3 - 5")), Expr::number(-2.0));
    }

    #[test]
    fn fold_fractions() {
        let sum = parse("2/3 + 5/2");
        assert!(is_fraction_fold(&sum));
        assert_eq!(fraction_fold(&sum), Expr::fraction(19.0, 6.0));
        assert_eq!(fraction_fold(&parse("1/2 + 5/2")), Expr::number(3.0));
        assert_eq!(fraction_fold(&parse("1/2 - 1/3")), Expr::fraction(1.0, 6.0));
        assert_eq!(fraction_fold(&parse("1/3 - 1/2")), Expr::fraction(-1.0, 6.0));
    }

    #[test]
    fn variable_and_constant_is_fixed() {
        let expr = parse("2x + 3");
        assert!(is_variable_and_constant(&expr));
        assert_eq!(Expr::clone(&expr), expr);

        assert!(is_variable_and_constant(&parse("3 - 2pi")));
        assert!(!is_variable_and_constant(&parse("2x + 2e")));
        assert!(!is_variable_and_constant(&parse("2 + 3")));
    }

    #[test]
    fn combine_terms() {
        let expr = parse("2e + 2e");
        assert!(is_like_terms(&expr));
        assert_eq!(
            combine_like_terms(&expr),
            Expr::binary(
                Expr::binary(Expr::number(2.0), BinOpKind::Add, Expr::number(2.0)),
                BinOpKind::Mul,
                Expr::irrational(Irrational::E),
            ),
        );

        assert!(is_like_terms(&parse("2x - 2x")));
        assert!(!is_like_terms(&parse("2x + 2e")));
    }
}
